//! Application Lifecycle
//!
//! ```text
//! 1. Logging setup
//!    ↓
//! 2. Configuration loading (profile defaults + FARM_HOST / FARM_PORT)
//!    ↓
//! 3. Module registration into the container
//!    ↓
//! 4. Route table assembly
//!    ↓
//! 5. Bind + serve
//!    ↓
//! [Running...]
//!    ↓
//! 6. Shutdown signal (SIGTERM/SIGINT), in-flight requests drain
//! ```

mod application;
mod error;
mod launcher;
mod shutdown;

pub use application::{Application, ApplicationBuilder, build_router};
pub use error::{LifecycleError, Result};
pub use launcher::{init_tracing, launch};
pub use shutdown::shutdown_signal;
