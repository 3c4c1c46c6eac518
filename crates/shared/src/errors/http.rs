use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => HttpError::BadRequest(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::InvalidId(id) => {
                    HttpError::BadRequest(format!("Invalid product id: {id}"))
                }
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                other => HttpError::Internal(other.to_string()),
            },

            ServiceError::NotFound(msg) => HttpError::NotFound(msg),

            ServiceError::Decode(msg) | ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse { detail: msg });

        (status, body).into_response()
    }
}
