use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    web, HttpRequest, HttpResponse,
};

use errors::Error;

pub mod categories;
pub mod questions;
pub mod quizzes;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::resource("/categories")
                .route(web::get().to(categories::get_all))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/categories/{id}/questions")
                .route(web::get().to(categories::get_questions))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/questions")
                .route(web::get().to(questions::get_all))
                .route(web::post().to(questions::create))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/questions/search")
                .route(web::post().to(questions::search))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/questions/{id}")
                .route(web::delete().to(questions::delete))
                .default_service(web::route().to(method_not_allowed)),
        )
        .service(
            web::resource("/quizzes")
                .route(web::post().to(quizzes::next_question))
                .default_service(web::route().to(method_not_allowed)),
        );
}

pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, Error> {
    Err(Error::NotFound(format!("No route for {}", req.path())))
}

pub async fn method_not_allowed() -> Result<HttpResponse, Error> {
    Err(Error::MethodNotAllowed)
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::UnprocessableEntity(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::BadRequest(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    Error::NotFound(err.to_string()).into()
}
