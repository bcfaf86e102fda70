use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, rejection::BytesRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;

pub mod builtins;

use builtins::JsonBodyPipe;

pub type PipeResult<T> = Result<T, PipeError>;

/// Outcome of a failed pipe.
///
/// `Structural` means the input does not have the expected shape at all;
/// `Semantic` means the shape is right but a value breaks a rule.
#[derive(Debug, thiserror::Error)]
pub enum PipeError {
    #[error("Structural validation failed: {0}")]
    Structural(String),

    #[error("{0}")]
    Semantic(String),
}

impl From<PipeError> for AppError {
    fn from(err: PipeError) -> Self {
        match err {
            PipeError::Structural(reason) => AppError::InvalidRequestFormat { reason },
            PipeError::Semantic(message) => AppError::Validation(message),
        }
    }
}

/// The Pipe trait for transformation and validation
#[async_trait]
pub trait Pipe: Send + Sync + 'static {
    type Input: Send + 'static;
    type Output: Send + 'static;

    async fn transform(&self, input: Self::Input) -> PipeResult<Self::Output>;
}

/// Body extractor that runs the raw bytes through a [`JsonBodyPipe`].
///
/// Unlike `axum::Json`, the `Content-Type` header is not checked and every
/// rejection is the same 422 `Invalid request format` error, except a body
/// over the request body limit, which is a 413.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(request, state)
            .await
            .map_err(body_rejection)?;

        let value = JsonBodyPipe::<T>::new().transform(body).await?;
        Ok(ValidatedJson(value))
    }
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        AppError::invalid_format(rejection.body_text())
    }
}
