use diesel::{
    self, BelongingToDsl, ExpressionMethods, OptionalExtension, PgConnection,
    PgTextExpressionMethods, QueryDsl, RunQueryDsl,
};
use rand::{seq::SliceRandom, thread_rng, Rng};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::models::{Category, ALL_CATEGORIES};
use crate::schema::questions::{self, table};
use crate::utils::{escape_like, page_offset};

pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Associations, Clone, Debug, Deserialize, Identifiable, Queryable, Serialize, PartialEq)]
#[diesel(belongs_to(Category, foreign_key = category))]
#[diesel(table_name = questions)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Deserialize, Insertable, Serialize)]
#[diesel(table_name = questions)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    pub fn create(conn: &mut PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(new_question)
            .get_result(conn)?;

        Ok(question)
    }

    /// One 1-based page of questions ordered by id.
    pub fn get_page(conn: &mut PgConnection, page: i64) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, questions};

        let offset = page_offset(page)
            .ok_or_else(|| Error::NotFound(format!("Page {} does not exist", page)))?;
        let results = questions
            .order(id)
            .limit(QUESTIONS_PER_PAGE)
            .offset(offset)
            .load::<Question>(conn)?;

        Ok(results)
    }

    pub fn count(conn: &mut PgConnection) -> Result<i64, Error> {
        use crate::schema::questions::dsl::questions;

        let total = questions.count().get_result(conn)?;

        Ok(total)
    }

    pub fn find_by_id(conn: &mut PgConnection, question_id: i32) -> Result<Question, Error> {
        use crate::schema::questions::dsl::questions;

        questions
            .find(question_id)
            .first::<Question>(conn)
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("Question {} not found", question_id)))
    }

    pub fn find_by_category(
        conn: &mut PgConnection,
        category: &Category,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::id;

        let results = Question::belonging_to(category)
            .order(id)
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Case-insensitive substring match on the question text.
    pub fn search(conn: &mut PgConnection, term: &str) -> Result<Vec<Question>, Error> {
        use crate::schema::questions::dsl::{id, question, questions};

        let pattern = format!("%{}%", escape_like(term));
        let results = questions
            .filter(question.ilike(pattern))
            .order(id)
            .load::<Question>(conn)?;

        Ok(results)
    }

    /// Returns the deleted id, or NotFound when no row had it.
    pub fn delete(conn: &mut PgConnection, question_id: i32) -> Result<i32, Error> {
        use crate::schema::questions::dsl::questions;

        let deleted = diesel::delete(questions.find(question_id)).execute(conn)?;
        if deleted == 0 {
            return Err(Error::NotFound(format!(
                "Question {} not found",
                question_id
            )));
        }

        Ok(question_id)
    }

    /// Random question of `category_id` (or of any category for
    /// `ALL_CATEGORIES`) whose id is not in `previous`.
    pub fn random_for_quiz(
        conn: &mut PgConnection,
        category_id: i32,
        previous: &[i32],
    ) -> Result<Option<Question>, Error> {
        use crate::schema::questions::dsl::{category, id, questions};

        let mut query = questions.filter(id.ne_all(previous.to_vec())).into_boxed();
        if category_id != ALL_CATEGORIES {
            query = query.filter(category.eq(category_id));
        }

        let candidates = query.order(id).load::<Question>(conn)?;

        Ok(pick_random(candidates, &mut thread_rng()))
    }
}

pub fn pick_random<R: Rng + ?Sized>(candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    candidates.choose(rng).cloned()
}
