use crate::di::Container;
use crate::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor that resolves a service from the container
///
/// # Example
/// ```
/// use farm_stack_basic::di::Inject;
/// use farm_stack_basic::modules::user::UserService;
///
/// async fn handler(Inject(service): Inject<UserService>) {
///     let _ = service;
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Implemented by router state that carries the container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state.get_container().resolve::<T>().map(Inject)
    }
}

impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::AppState;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    struct Greeter {
        greeting: &'static str,
    }

    async fn greet(Inject(greeter): Inject<Greeter>) -> &'static str {
        greeter.greeting
    }

    fn app(container: Container) -> Router {
        Router::new()
            .route("/", get(greet))
            .with_state(AppState::new(container))
    }

    fn request() -> Request<Body> {
        Request::builder().uri("/").body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_inject_resolves_registered_service() {
        let mut container = Container::new();
        container.register(Greeter { greeting: "hi" });

        let response = app(container).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_service_is_internal_error() {
        let response = app(Container::new()).oneshot(request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
    }
}
