//! Print API Module

mod handler;

use axum::{Router, routing::post};

use crate::state::ServerState;

pub use handler::{PrintRequest, PrintResponse};

/// Print router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/print", post(handler::print_label))
}
