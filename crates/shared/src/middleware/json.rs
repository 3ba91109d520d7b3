use crate::errors::HttpError;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

/// JSON body extractor whose rejections use the service error body
/// (`{path, message}`) instead of axum's plain-text rejections. Field rules
/// are left to the service layer.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let path = req.uri().path().to_string();

        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::bad_request(&path, rejection.body_text()))?;

        Ok(Self(value))
    }
}
