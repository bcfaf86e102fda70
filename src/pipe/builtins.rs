use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;
use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::marker::PhantomData;

/// A pipe that decodes a JSON object body into `T`
///
/// Any decoding failure (not JSON, wrong top-level type, missing field,
/// wrong field type) is a structural failure. The top level must be an
/// object: a derived struct would otherwise also accept a positional array.
/// A repeated key keeps its last value.
pub struct JsonBodyPipe<T> {
    _target: PhantomData<fn() -> T>,
}

impl<T> JsonBodyPipe<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for JsonBodyPipe<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> Pipe for JsonBodyPipe<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Input = Bytes;
    type Output = T;

    async fn transform(&self, input: Bytes) -> PipeResult<T> {
        let object: Map<String, Value> = serde_json::from_slice(&input)
            .map_err(|e| PipeError::Structural(e.to_string()))?;
        serde_json::from_value(Value::Object(object))
            .map_err(|e| PipeError::Structural(e.to_string()))
    }
}

/// A pipe that rejects text which is empty once surrounding whitespace is
/// stripped. The value passes through untrimmed.
pub struct NonBlankPipe {
    message: String,
}

impl NonBlankPipe {
    /// `message` becomes the semantic error reported for blank input.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl Pipe for NonBlankPipe {
    type Input = String;
    type Output = String;

    async fn transform(&self, input: String) -> PipeResult<String> {
        if input.trim().is_empty() {
            return Err(PipeError::Semantic(self.message.clone()));
        }
        Ok(input)
    }
}
