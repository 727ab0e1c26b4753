use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    get_conn,
    models::{Category, NewQuestion, Question},
    PgPool,
};
use errors::Error;

use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(min = 1, message = "question is required"))]
    pub question: String,
    #[validate(length(min = 1, message = "answer is required"))]
    pub answer: String,
    pub category: i32,
    #[validate(range(min = 1, max = 5, message = "difficulty must be between 1 and 5"))]
    pub difficulty: i32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: i32,
}

pub async fn create(
    pool: Data<PgPool>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<CreatedResponse>, Error> {
    validate(&params)?;
    let params = params.into_inner();
    let question = block(move || {
        let mut connection = get_conn(&pool)?;
        Category::find_by_id(&mut connection, params.category).map_err(|err| match err {
            Error::NotFound(message) => Error::UnprocessableEntity(message),
            _ => err,
        })?;

        Question::create(
            &mut connection,
            NewQuestion {
                question: params.question,
                answer: params.answer,
                category: params.category,
                difficulty: params.difficulty,
            },
        )
    })
    .await??;

    info!("Created question {}", question.id);

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}
