//! HTTP handlers.
//!
//! - `/`: static landing page (also the fallback for unknown paths)
//! - `/metrics`: scrape every account and return exposition text
//!
//! `/metrics` always answers 200; upstream trouble only shows up as `up 0`.

use axum::{extract::State, response::Html};

use crate::app_state::AppState;
use crate::obs::metrics as exposition;
use crate::scrape;

pub const INDEX_HTML: &str = r#"<!doctype html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Flypool Exporter</title>
    </head>
    <body>
        <h1>Flypool Exporter</h1>
        <p><a href="/metrics">Metrics</a></p>
    </body>
</html>"#;

pub async fn index() -> Html<&'static str> {
    tracing::info!("Serving /index");
    Html(INDEX_HTML)
}

pub async fn metrics(State(state): State<AppState>) -> String {
    tracing::info!(accounts = state.accounts().len(), "Serving /metrics");

    let samples = scrape::scrape_all(state.upstream(), state.accounts()).await;
    exposition::render(state.accounts(), &samples)
}
