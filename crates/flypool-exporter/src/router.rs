//! Axum router wiring.
//!
//! `/metrics` scrapes; `/` and anything unmatched get the landing page.

use axum::{routing::get, Router};

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(transport::http::index))
        .route("/metrics", get(transport::http::metrics))
        .fallback(transport::http::index)
        .with_state(state)
}
