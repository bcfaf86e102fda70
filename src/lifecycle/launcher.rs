use super::Application;
use crate::config::{ConfigService, Profile, ServerConfig};
use crate::modules::AppModule;
use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` wins over the profile default.
pub fn init_tracing(profile: Profile) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(profile.default_log_filter()));

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("Global tracing subscriber already installed");
    }
}

/// Entry point shared by the `serve-dev` and `serve-prod` binaries.
pub async fn launch(profile: Profile) -> anyhow::Result<()> {
    init_tracing(profile);

    let config = ServerConfig::for_profile(profile, &ConfigService::from_env())
        .context("Failed to load server configuration")?;

    if profile == Profile::Dev {
        tracing::info!("Dev profile: run under `cargo watch -x 'run --bin serve-dev'` to restart on change");
    }

    Application::builder()
        .config(config)
        .build::<AppModule>()
        .context("Failed to initialize application")?
        .serve()
        .await
        .context("Server exited with an error")?;

    Ok(())
}
