use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Category, Question, ALL_CATEGORIES},
    PgPool,
};
use errors::Error;

use crate::deserializers::deserialize_id;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i32,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    /// `None` once every question of the category has been asked.
    pub question: Option<Question>,
}

pub async fn next_question(
    pool: Data<PgPool>,
    params: Json<QuizRequest>,
) -> Result<Json<QuizResponse>, Error> {
    let QuizRequest {
        previous_questions,
        quiz_category,
    } = params.into_inner();
    let question = block(move || {
        let mut connection = get_conn(&pool)?;
        if quiz_category.id != ALL_CATEGORIES {
            Category::find_by_id(&mut connection, quiz_category.id)?;
        }
        Question::random_for_quiz(&mut connection, quiz_category.id, &previous_questions)
    })
    .await??;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}
