use sqlx::Error as SqlxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Sqlx(#[from] SqlxError),

    #[error("Invalid document id: {0}")]
    InvalidId(String),

    #[error("Not found")]
    NotFound,

    #[error("Custom: {0}")]
    Custom(String),
}
