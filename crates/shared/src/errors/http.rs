use crate::{
    domain::TYPE_MISMATCH,
    errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError},
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum HttpError {
    BadRequest { path: String, message: String },
    NotFound { path: String, message: String },
    UnprocessableEntity { path: String, message: String },
    Internal { path: String, message: String },
}

impl HttpError {
    /// Maps a service failure onto the HTTP status it is reported with.
    pub fn from_service(path: impl Into<String>, err: ServiceError) -> Self {
        let path = path.into();

        match err {
            ServiceError::InvalidFormat(message) => HttpError::BadRequest { path, message },

            ServiceError::Validation(errors) => HttpError::BadRequest {
                path,
                message: errors.join("; "),
            },

            ServiceError::InvalidArgument(message) => {
                HttpError::UnprocessableEntity { path, message }
            }

            ServiceError::NotFound(message) => HttpError::NotFound { path, message },

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound {
                    path,
                    message: "Not found".into(),
                },
                RepositoryError::AlreadyExists(message) => {
                    HttpError::UnprocessableEntity { path, message }
                }
                other => {
                    error!("❌ Repository failure on {path}: {other}");
                    HttpError::Internal {
                        path,
                        message: "Internal server error".into(),
                    }
                }
            },

            ServiceError::Internal(msg) => {
                error!("❌ Internal failure on {path}: {msg}");
                HttpError::Internal {
                    path,
                    message: "Internal server error".into(),
                }
            }
        }
    }

    pub fn bad_request(path: impl Into<String>, message: impl Into<String>) -> Self {
        HttpError::BadRequest {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Rejection for an identifier the extractor could not even decode.
    pub fn type_mismatch(path: impl Into<String>) -> Self {
        Self::bad_request(path, TYPE_MISMATCH)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound { .. } => StatusCode::NOT_FOUND,
            HttpError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            HttpError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (path, message) = match self {
            HttpError::BadRequest { path, message }
            | HttpError::NotFound { path, message }
            | HttpError::UnprocessableEntity { path, message }
            | HttpError::Internal { path, message } => (path, message),
        };

        (status, Json(ErrorResponse { path, message })).into_response()
    }
}
