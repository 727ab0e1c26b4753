#[macro_use]
extern crate log;

use actix_web::{
    error::{BlockingError, ResponseError},
    http::StatusCode,
    HttpResponse,
};
use derive_more::Display;
use diesel::result::{DatabaseErrorKind, Error as DBError};
use r2d2::Error as PoolError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, PartialEq)]
pub enum Error {
    #[display(fmt = "bad request: {}", _0)]
    BadRequest(String),
    #[display(fmt = "internal server error: {}", _0)]
    InternalServerError(String),
    #[display(fmt = "method not allowed")]
    MethodNotAllowed,
    #[display(fmt = "not found: {}", _0)]
    NotFound(String),
    #[display(fmt = "pool error: {}", _0)]
    PoolError(String),
    #[display(fmt = "unprocessable: {}", _0)]
    UnprocessableEntity(String),
    #[display(fmt = "validation failed: {:?}", _0)]
    ValidationError(Vec<String>),
    #[display(fmt = "blocking error: {}", _0)]
    BlockingError(String),
}

/// Body of every failed request.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ErrorResponse {
    pub fn new(status: StatusCode) -> Self {
        ErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message_for(status).to_string(),
            details: Vec::new(),
        }
    }

    pub fn with_details(mut self, details: Vec<String>) -> Self {
        self.details = details;
        self
    }
}

fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::BAD_REQUEST => "bad request",
        StatusCode::NOT_FOUND => "resource not found",
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::UNPROCESSABLE_ENTITY => "unprocessable",
        _ => "internal server error",
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::BadRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Error::UnprocessableEntity(_) | Error::ValidationError(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            Error::InternalServerError(_) | Error::PoolError(_) | Error::BlockingError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("{}", self);
        } else {
            debug!("{}", self);
        }

        let body = match self {
            Error::ValidationError(ref validation_errors) => {
                ErrorResponse::new(status).with_details(validation_errors.to_vec())
            }
            _ => ErrorResponse::new(status),
        };

        HttpResponse::build(status).json(body)
    }
}

// Convert DBErrors to our Error type
impl From<DBError> for Error {
    fn from(error: DBError) -> Error {
        match error {
            DBError::DatabaseError(kind, info) => match kind {
                DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation
                | DatabaseErrorKind::UniqueViolation => {
                    let message = info.details().unwrap_or_else(|| info.message()).to_string();
                    Error::UnprocessableEntity(message)
                }
                _ => Error::InternalServerError(info.message().to_string()),
            },
            DBError::NotFound => Error::NotFound("Record not found".into()),
            err => Error::InternalServerError(err.to_string()),
        }
    }
}

// Convert PoolError to our Error type
impl From<PoolError> for Error {
    fn from(error: PoolError) -> Error {
        Error::PoolError(error.to_string())
    }
}

impl From<BlockingError> for Error {
    fn from(_: BlockingError) -> Error {
        Error::BlockingError("Thread blocking error".into())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{body::to_bytes, http::StatusCode, ResponseError};
    use diesel::result::Error as DBError;

    use super::{Error, ErrorResponse};

    async fn render(error: Error) -> (StatusCode, ErrorResponse) {
        let res = error.error_response();
        let status = res.status();
        let body = to_bytes(res.into_body()).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_rt::test]
    async fn test_not_found_body() {
        let (status, body) = render(Error::NotFound("Question 10000".into())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.success, false);
        assert_eq!(body.error, 404);
        assert_eq!(body.message, "resource not found");
    }

    #[actix_rt::test]
    async fn test_method_not_allowed_body() {
        let (status, body) = render(Error::MethodNotAllowed).await;

        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body.message, "method not allowed");
    }

    #[actix_rt::test]
    async fn test_validation_errors_keep_details() {
        let (status, body) = render(Error::ValidationError(vec![
            "difficulty must be between 1 and 5".to_string(),
        ]))
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.message, "unprocessable");
        assert_eq!(body.details, vec!["difficulty must be between 1 and 5"]);
    }

    #[actix_rt::test]
    async fn test_internal_errors_hide_detail() {
        let (status, body) = render(Error::InternalServerError("connection reset".into())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.message, "internal server error");
        assert!(body.details.is_empty());
    }

    #[test]
    fn test_diesel_not_found_maps_to_not_found() {
        let err: Error = DBError::NotFound.into();
        assert_eq!(err, Error::NotFound("Record not found".into()));
    }

    #[test]
    fn test_other_diesel_errors_map_to_internal() {
        let err: Error = DBError::RollbackTransaction.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
