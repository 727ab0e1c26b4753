#[cfg(test)]
pub mod tests {
    use std::env;
    use std::time::Duration;

    use actix_web::{test, web, App};
    use diesel::{
        self,
        pg::PgConnection,
        r2d2::{ConnectionManager, Pool},
        ExpressionMethods, QueryDsl, RunQueryDsl,
    };
    use dotenv::dotenv;
    use serde::{de::DeserializeOwned, Serialize};

    use db::{
        get_conn,
        models::{Category, NewCategory, NewQuestion, Question},
        new_lazy_pool,
        schema::{categories, questions},
        Connection, PgPool,
    };

    use crate::routes::{not_found, routes};

    /// Pool that only connects when a handler asks for a connection, so
    /// routing and validation tests run without a database.
    pub fn get_pool() -> PgPool {
        dotenv().ok();
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/trivia_test".to_string());
        new_lazy_pool(&database_url)
    }

    /// Pool whose connections never come up; checkouts fail after `timeout`.
    pub fn unreachable_pool(timeout: Duration) -> PgPool {
        let manager = ConnectionManager::<PgConnection>::new("postgres://127.0.0.1:1/trivia");

        Pool::builder()
            .min_idle(Some(0))
            .connection_timeout(timeout)
            .build_unchecked(manager)
    }

    pub fn get_test_conn() -> Connection {
        get_conn(&get_pool()).unwrap()
    }

    async fn call<R>(req: test::TestRequest) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call_with_pool(get_pool(), req).await
    }

    pub async fn call_with_pool<R>(pool: PgPool, req: test::TestRequest) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call(test::TestRequest::get().uri(route)).await
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(route: &str, params: T) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call(test::TestRequest::post().set_json(&params).uri(route)).await
    }

    /// POST without a body or content type
    pub async fn test_post_empty<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call(test::TestRequest::post().uri(route)).await
    }

    pub async fn test_delete<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call(test::TestRequest::delete().uri(route)).await
    }

    pub async fn test_patch<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        call(test::TestRequest::patch().uri(route)).await
    }

    pub fn insert_category(conn: &mut Connection, kind: &str) -> Category {
        diesel::insert_into(categories::table)
            .values(NewCategory { kind })
            .get_result(conn)
            .unwrap()
    }

    pub fn insert_question(conn: &mut Connection, category: i32, text: &str) -> Question {
        diesel::insert_into(questions::table)
            .values(NewQuestion {
                question: text.to_string(),
                answer: "An answer".to_string(),
                category,
                difficulty: 2,
            })
            .get_result(conn)
            .unwrap()
    }

    /// Removes a category created by a test together with its questions.
    pub fn remove_category(conn: &mut Connection, category: &Category) {
        diesel::delete(questions::table.filter(questions::dsl::category.eq(category.id)))
            .execute(conn)
            .unwrap();
        diesel::delete(categories::table.find(category.id))
            .execute(conn)
            .unwrap();
    }

    /// Id of a category that existed and was removed, so no row holds it.
    pub fn freed_category_id(conn: &mut Connection) -> i32 {
        let category = insert_category(conn, "Removed");
        remove_category(conn, &category);
        category.id
    }

    /// Id of a question that existed and was removed, so no row holds it.
    pub fn freed_question_id(conn: &mut Connection) -> i32 {
        let category = insert_category(conn, "Removed");
        let question = insert_question(conn, category.id, "Removed question");
        remove_category(conn, &category);
        question.id
    }
}
