//! Typed JSON body extractor.
//!
//! Unlike `axum::Json`, [`JsonBody`] ignores the `Content-Type` header and
//! reports body problems as a [`BodyError`] that says which field is at fault.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::AppError;

/// Why a request body could not be turned into the expected type.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum BodyError {
    #[error("Missing field `{0}`")]
    MissingField(String),

    #[error("Invalid field: {0}")]
    InvalidField(String),

    #[error("Malformed JSON: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for BodyError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        match err.classify() {
            Category::Data => match missing_field_name(&message) {
                Some(field) => BodyError::MissingField(field.to_string()),
                None => BodyError::InvalidField(message),
            },
            Category::Syntax | Category::Eof | Category::Io => BodyError::Malformed(message),
        }
    }
}

/// Pull `name` out of serde's "missing field `name`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next()
}

/// Deserializes the whole request body as JSON into `T`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|err| AppError::Body(err.into()))
    }
}
