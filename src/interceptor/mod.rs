use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response};
use std::future::Future;
use std::pin::Pin;

pub mod layer;
pub mod logging;
pub mod request_id;

pub use layer::{InterceptorLayer, InterceptorMiddleware};
pub use logging::LoggingInterceptor;
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdInterceptor};

/// standard return type for Interceptors
pub type InterceptorResult = Result<Response, InterceptorError>;

/// A type-erased error for interceptors
pub type InterceptorError = Box<dyn std::error::Error + Send + Sync>;

/// Future produced by one link of the chain
pub type ChainFuture = Pin<Box<dyn Future<Output = InterceptorResult> + Send>>;

type BoxedChain = Box<dyn FnOnce(Request<Body>) -> ChainFuture + Send>;

/// Represents the next handler in the chain
pub struct Next {
    run: BoxedChain,
}

impl Next {
    /// Create a new Next handler
    pub fn new<F>(f: F) -> Self
    where
        F: FnOnce(Request<Body>) -> ChainFuture + Send + 'static,
    {
        Self { run: Box::new(f) }
    }

    /// Execute the next handler
    pub async fn run(self, request: Request<Body>) -> InterceptorResult {
        (self.run)(request).await
    }
}

/// The Interceptor trait
///
/// Interceptors can inspect/modify the request before it reaches the handler,
/// and inspect/modify the response after the handler returns.
///
/// # Example
/// ```
/// use farm_stack_basic::interceptor::{Interceptor, InterceptorResult, Next};
/// use axum::{body::Body, http::Request};
///
/// struct Noop;
///
/// #[async_trait::async_trait]
/// impl Interceptor for Noop {
///     async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult {
///         next.run(request).await
///     }
/// }
/// ```
#[async_trait]
pub trait Interceptor: Send + Sync + 'static {
    async fn intercept(&self, request: Request<Body>, next: Next) -> InterceptorResult;
}
