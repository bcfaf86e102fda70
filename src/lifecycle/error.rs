//! Lifecycle-specific error types

use crate::config::ConfigError;
use std::net::SocketAddr;
use thiserror::Error;

/// Errors that can occur while starting or running the server
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Server configuration could not be resolved
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A module failed to register its services
    #[error("Initialization failed: {0}")]
    InitializationFailed(String),

    /// The listening socket could not be opened
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The server loop exited with an I/O error
    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

impl LifecycleError {
    /// Create an initialization failure error
    pub fn init_failed(msg: impl Into<String>) -> Self {
        Self::InitializationFailed(msg.into())
    }
}

/// A specialized Result type for lifecycle operations
pub type Result<T> = std::result::Result<T, LifecycleError>;
