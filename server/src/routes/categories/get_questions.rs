use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Category, Question},
    PgPool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i32,
}

pub async fn get_questions(
    pool: Data<PgPool>,
    path: Path<i32>,
) -> Result<Json<CategoryQuestionsResponse>, Error> {
    let category_id = path.into_inner();
    let (category, questions) = block(move || {
        let mut connection = get_conn(&pool)?;
        let category = Category::find_by_id(&mut connection, category_id)?;
        let questions = Question::find_by_category(&mut connection, &category)?;
        Ok::<_, Error>((category, questions))
    })
    .await??;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        total_questions: questions.len(),
        questions,
        current_category: category.id,
    }))
}
