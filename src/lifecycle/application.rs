//! Application Bootstrap
//!
//! Builds the router from a root module and runs it until shutdown.

use super::{LifecycleError, Result, shutdown_signal};
use crate::config::{ConfigService, Profile, ServerConfig};
use crate::di::Container;
use crate::exception::HttpExceptionFilter;
use crate::interceptor::{Interceptor, InterceptorLayer, LoggingInterceptor, RequestIdInterceptor};
use crate::module::{AppState, Module};
use axum::Router;
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Assemble the route table for `M`
///
/// Registers the module's services, attaches the interceptor chain (which
/// also wraps the fallbacks) and, for the dev profile, HTTP trace spans.
pub fn build_router<M: Module>(profile: Profile) -> Result<Router> {
    let mut container = Container::new();
    M::register(&mut container).map_err(|e| LifecycleError::init_failed(e.to_string()))?;
    if container.is_empty() {
        tracing::warn!("Root module registered no services");
    } else {
        tracing::debug!("Registered {} services", container.len());
    }

    let interceptors: Vec<Box<dyn Interceptor>> = vec![
        Box::new(RequestIdInterceptor) as Box<dyn Interceptor>,
        Box::new(LoggingInterceptor),
    ];

    let router = M::routes()
        .layer(InterceptorLayer::new(interceptors, HttpExceptionFilter))
        .with_state(AppState::new(container));

    Ok(match profile {
        Profile::Dev => router.layer(TraceLayer::new_for_http()),
        Profile::Prod => router,
    })
}

/// A configured, ready-to-serve application
///
/// # Example
///
/// ```rust,ignore
/// use farm_stack_basic::lifecycle::Application;
/// use farm_stack_basic::modules::AppModule;
///
/// let app = Application::builder().config(config).build::<AppModule>()?;
/// app.serve().await?;
/// ```
pub struct Application {
    config: ServerConfig,
    router: Router,
}

impl Application {
    /// Create a new application builder
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| LifecycleError::Bind { addr, source })?;
        self.run(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr().map_err(LifecycleError::Serve)?;
        tracing::info!(
            "Server running on http://{} ({} profile)",
            local_addr,
            self.config.profile
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.await;
                tracing::info!("Initiating graceful shutdown...");
            })
            .await
            .map_err(LifecycleError::Serve)?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Builder for Application
#[derive(Default)]
pub struct ApplicationBuilder {
    config: Option<ServerConfig>,
}

impl ApplicationBuilder {
    /// Create a new application builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the server configuration
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the application around root module `M`
    ///
    /// Without an explicit configuration the prod profile defaults are used.
    pub fn build<M: Module>(self) -> Result<Application> {
        let config = match self.config {
            Some(config) => config,
            None => ServerConfig::for_profile(Profile::Prod, &ConfigService::new())?,
        };

        tracing::info!("Starting application initialization...");
        let router = build_router::<M>(config.profile)?;
        tracing::info!("Application initialization complete");

        Ok(Application { config, router })
    }
}
