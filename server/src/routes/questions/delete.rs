use actix_web::{
    web::{block, Data, Json, Path},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{get_conn, models::Question, PgPool};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: i32,
}

pub async fn delete(pool: Data<PgPool>, path: Path<i32>) -> Result<Json<DeletedResponse>, Error> {
    let question_id = path.into_inner();
    let deleted = block(move || {
        let mut connection = get_conn(&pool)?;
        Question::delete(&mut connection, question_id)
    })
    .await??;

    info!("Deleted question {}", deleted);

    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
