use crate::di::{Container, HasContainer};
use crate::error::Result;
use axum::Router;
use std::sync::Arc;

/// Router state shared by every module's routes
#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: Container) -> Self {
        Self {
            container: Arc::new(container),
        }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Trait for application modules
///
/// A module contributes services to the container and a slice of the route
/// table. The full table is assembled explicitly at startup by composing
/// modules, so nothing is registered as a side effect of loading code.
///
/// # Example
/// ```
/// use farm_stack_basic::di::Container;
/// use farm_stack_basic::module::Module;
/// use farm_stack_basic::modules::AppModule;
///
/// let mut container = Container::new();
/// AppModule::register(&mut container).unwrap();
/// let _routes = AppModule::routes();
/// ```
pub trait Module {
    /// Register all services this module's handlers resolve
    fn register(container: &mut Container) -> Result<()>;

    /// The routes this module serves
    fn routes() -> Router<AppState>;
}
