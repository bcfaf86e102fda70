use crate::interceptor::{Interceptor, InterceptorResult, Next};
use async_trait::async_trait;
use axum::{body::Body, http::Request};
use std::time::Instant;

/// An interceptor that logs request timing and status
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

#[async_trait]
impl Interceptor for LoggingInterceptor {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
        let method = request.method().clone();
        let path = request.uri().path().to_owned();
        let start = Instant::now();

        tracing::debug!("--> {} {}", method, path);

        match next.run(request).await {
            Ok(response) => {
                let status = response.status();
                tracing::info!(
                    status = status.as_u16(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "<-- {} {}",
                    method,
                    path
                );
                Ok(response)
            }
            Err(e) => {
                tracing::warn!(
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "<-- {} {} ERROR: {}",
                    method,
                    path,
                    e
                );
                Err(e)
            }
        }
    }
}
