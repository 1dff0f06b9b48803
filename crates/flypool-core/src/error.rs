//! Shared error type across flypool crates.

use thiserror::Error;

/// Stable error classes used as log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Config file could not be read.
    ConfigRead,
    /// Config file is not an array of account objects.
    InvalidConfig,
    /// Upstream request failed before a response arrived.
    Transport,
    /// Upstream answered with a status other than 200.
    UpstreamStatus,
    /// Upstream body could not be read.
    UpstreamBody,
    /// Internal server error.
    Internal,
}

impl ErrorKind {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::ConfigRead => "CONFIG_READ",
            ErrorKind::InvalidConfig => "INVALID_CONFIG",
            ErrorKind::Transport => "TRANSPORT",
            ErrorKind::UpstreamStatus => "UPSTREAM_STATUS",
            ErrorKind::UpstreamBody => "UPSTREAM_BODY",
            ErrorKind::Internal => "INTERNAL",
        }
    }

    /// Fatal errors stop the process; everything else only marks one account down.
    pub fn is_fatal(self) -> bool {
        matches!(
            self,
            ErrorKind::ConfigRead | ErrorKind::InvalidConfig | ErrorKind::Internal
        )
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    #[error("read config failed: {0}")]
    ConfigRead(String),
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("upstream transport: {0}")]
    Transport(String),
    #[error("HTTP returned code {0}")]
    UpstreamStatus(u16),
    #[error("upstream body: {0}")]
    UpstreamBody(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Map the error to its stable class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExporterError::ConfigRead(_) => ErrorKind::ConfigRead,
            ExporterError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            ExporterError::Transport(_) => ErrorKind::Transport,
            ExporterError::UpstreamStatus(_) => ErrorKind::UpstreamStatus,
            ExporterError::UpstreamBody(_) => ErrorKind::UpstreamBody,
            ExporterError::Internal(_) => ErrorKind::Internal,
        }
    }
}
