//! Shared application state for the exporter.
//!
//! Built once before the listener starts and never mutated afterwards; every
//! request gets a cheap clone of the same `Arc`.

use std::sync::Arc;

use crate::config::{AccountConfig, ExporterConfig};
use crate::upstream::UpstreamClient;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    upstream: UpstreamClient,
}

impl AppState {
    pub fn new(cfg: ExporterConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                upstream: UpstreamClient::new(),
            }),
        }
    }

    pub fn accounts(&self) -> &[AccountConfig] {
        self.inner.cfg.accounts()
    }

    pub fn upstream(&self) -> &UpstreamClient {
        &self.inner.upstream
    }
}
