use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderValue, Request},
};
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id attached to the request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Reuses the caller's `x-request-id` or mints a UUIDv4, and echoes it back
/// on the response. A supplied value that is not visible ASCII is replaced.
#[derive(Clone, Default)]
pub struct RequestIdInterceptor;

#[async_trait]
impl Interceptor for RequestIdInterceptor {
    async fn intercept(&self, mut request: Request<Body>, next: Next) -> InterceptorResult {
        let id = match request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            Some(supplied) => supplied.to_owned(),
            None => Uuid::new_v4().to_string(),
        };
        let header = HeaderValue::from_str(&id)?;
        request.extensions_mut().insert(RequestId(id.clone()));

        let mut response = next
            .run(request)
            .instrument(tracing::info_span!("request", request_id = %id))
            .await?;
        response.headers_mut().insert(REQUEST_ID_HEADER, header);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::HttpExceptionFilter;
    use crate::interceptor::InterceptorLayer;
    use axum::{Extension, Router, routing::get};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route(
                "/",
                get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
            )
            .layer(InterceptorLayer::new(
                vec![Box::new(RequestIdInterceptor) as Box<dyn Interceptor>],
                HttpExceptionFilter,
            ))
    }

    #[tokio::test]
    async fn test_echoes_supplied_id() {
        let request = Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()[REQUEST_ID_HEADER], "abc-123");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"abc-123");
    }

    #[tokio::test]
    async fn test_generates_uuid_when_missing() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app().oneshot(request).await.unwrap();
        let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_replaces_non_ascii_id() {
        let request = Request::builder()
            .uri("/")
            .header(REQUEST_ID_HEADER, HeaderValue::from_bytes(b"caf\xe9").unwrap())
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let id = response.headers()[REQUEST_ID_HEADER]
            .to_str()
            .unwrap()
            .to_owned();
        assert!(Uuid::parse_str(&id).is_ok());

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], id.as_bytes());
    }
}
