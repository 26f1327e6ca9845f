//! Static pages

use axum::{Router, response::Html, routing::get};

use crate::state::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

/// GET / - the label form page
async fn index() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}
