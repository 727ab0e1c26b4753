use actix_web::{
    web::{block, Data, Json, Query},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Category, CategoryMap, Question},
    page_offset, PgPool,
};
use errors::Error;

#[derive(Debug, Deserialize)]
pub struct PageParams {
    page: Option<i64>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub categories: CategoryMap,
    pub current_category: Option<i32>,
}

pub async fn get_all(
    pool: Data<PgPool>,
    params: Query<PageParams>,
) -> Result<Json<QuestionsResponse>, Error> {
    let page = params.page.unwrap_or(1);
    if page < 1 || page_offset(page).is_none() {
        return Err(Error::NotFound(format!("Page {} does not exist", page)));
    }

    let (questions, total_questions, categories) = block(move || {
        let mut connection = get_conn(&pool)?;
        let questions = Question::get_page(&mut connection, page)?;
        let total = Question::count(&mut connection)?;
        let categories = Category::get_all(&mut connection)?;
        Ok::<_, Error>((questions, total, categories))
    })
    .await??;

    if questions.is_empty() {
        return Err(Error::NotFound(format!("Page {} holds no questions", page)));
    }

    Ok(Json(QuestionsResponse {
        success: true,
        questions,
        total_questions,
        categories: Category::as_map(&categories),
        current_category: None,
    }))
}
