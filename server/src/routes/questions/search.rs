use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    /// Category of the first match.
    pub current_category: Option<i32>,
}

pub async fn search(
    pool: Data<PgPool>,
    params: Json<SearchRequest>,
) -> Result<Json<SearchResponse>, Error> {
    let term = params.into_inner().search_term;
    let questions = block(move || {
        let mut connection = get_conn(&pool)?;
        Question::search(&mut connection, &term)
    })
    .await??;

    Ok(Json(SearchResponse {
        success: true,
        total_questions: questions.len(),
        current_category: questions.first().map(|question| question.category),
        questions,
    }))
}
