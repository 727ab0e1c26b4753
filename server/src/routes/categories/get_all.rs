use actix_web::{
    web::{block, Data, Json},
    Result,
};
use serde::{Deserialize, Serialize};

use db::{
    get_conn,
    models::{Category, CategoryMap},
    PgPool,
};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

pub async fn get_all(pool: Data<PgPool>) -> Result<Json<CategoriesResponse>, Error> {
    let categories = block(move || {
        let mut connection = get_conn(&pool)?;
        Category::get_all(&mut connection)
    })
    .await??;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: Category::as_map(&categories),
    }))
}
