#[macro_use]
extern crate log;

use std::env;

use diesel::{self, Connection, PgConnection, RunQueryDsl};
use dotenv::dotenv;

use db::{
    get_conn,
    models::{Category, NewCategory, NewQuestion, Question},
    new_pool,
    schema::{categories, questions},
};
use errors::Error;

// (question, answer, difficulty) grouped by category
const QUESTIONS: &[(&str, &[(&str, &str, i32)])] = &[
    (
        "Science",
        &[
            ("What is the heaviest organ in the human body?", "The Liver", 4),
            ("Who discovered penicillin?", "Alexander Fleming", 3),
            ("Hematology is a branch of medicine involving the study of what?", "Blood", 4),
        ],
    ),
    (
        "Art",
        &[
            ("Which Dutch graphic artist - initials M C was a creator of optical illusions?", "Escher", 1),
            ("La Giaconda is better known as what?", "Mona Lisa", 3),
            ("How many paintings did Van Gogh sell in his lifetime?", "One", 4),
        ],
    ),
    (
        "Geography",
        &[
            ("What is the largest lake in Africa?", "Lake Victoria", 2),
            ("In which royal palace would you find the Hall of Mirrors?", "The Palace of Versailles", 3),
            ("The Taj Mahal is located in which Indian city?", "Agra", 2),
        ],
    ),
    (
        "History",
        &[
            ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 2),
            ("What boxer's original name is Cassius Clay?", "Muhammad Ali", 1),
            ("Who invented Peanut Butter?", "George Washington Carver", 2),
        ],
    ),
    (
        "Entertainment",
        &[
            ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 4),
            ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 4),
        ],
    ),
    (
        "Sports",
        &[
            ("Which is the only team to play in every soccer World Cup tournament?", "Brazil", 3),
            ("Which country won the first ever soccer World Cup in 1930?", "Uruguay", 4),
        ],
    ),
];

fn seed(conn: &mut PgConnection) -> Result<usize, Error> {
    conn.transaction::<usize, Error, _>(|conn| {
        let mut inserted = 0;
        for (kind, entries) in QUESTIONS {
            let category: Category = diesel::insert_into(categories::table)
                .values(NewCategory { kind: *kind })
                .get_result(conn)?;

            for (question, answer, difficulty) in entries.iter() {
                let _: Question = diesel::insert_into(questions::table)
                    .values(NewQuestion {
                        question: question.to_string(),
                        answer: answer.to_string(),
                        category: category.id,
                        difficulty: *difficulty,
                    })
                    .get_result(conn)?;
                inserted += 1;
            }
        }

        Ok(inserted)
    })
}

fn main() -> Result<(), Error> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let database_url = env::var("DATABASE_URL")
        .map_err(|_| Error::InternalServerError("DATABASE_URL must be set".into()))?;
    let pool = new_pool(&database_url)?;
    let mut conn = get_conn(&pool)?;

    if !Category::get_all(&mut conn)?.is_empty() {
        info!("Categories already present, skipping seeds");
        return Ok(());
    }

    let inserted = seed(&mut conn)?;
    info!("Seeded {} categories and {} questions", QUESTIONS.len(), inserted);

    Ok(())
}
