//! Label Server - web app for printing product labels
//!
//! # Architecture overview
//!
//! Serves a small form page and a print API. A print request renders a ZPL
//! label and sends it to a Zebra-compatible printer over raw TCP (one
//! connection per job, fixed timeout, single attempt).
//!
//! # Module structure
//!
//! ```text
//! label-server/src/
//! ├── config.rs      # Environment-based configuration
//! ├── state.rs       # Shared application state
//! ├── error.rs       # Unified error handling
//! ├── logger.rs      # Logging setup
//! ├── middleware.rs  # Request logging middleware
//! ├── routes/        # Router assembly and middleware stack
//! ├── api/           # HTTP routes and handlers
//! └── server.rs      # HTTP server lifecycle
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

// Re-export public types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use server::Server;
pub use state::ServerState;

/// Set up the process environment: dotenv and logging
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into());
    let log_dir = std::env::var("LOG_DIR").ok();
    logger::init_logger(&level, log_dir.as_deref())
}
