use crate::errors::repository::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),
}
