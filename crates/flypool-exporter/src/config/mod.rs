//! Account list loader (lenient parsing).
//!
//! The file must be a JSON array of objects. Inside each object unknown keys
//! are ignored and wrong-typed values become empty strings.

pub mod schema;

use std::fs;
use std::path::Path;

use flypool_core::error::{ExporterError, Result};
use serde_json::Value;

pub use schema::{AccountConfig, ExporterConfig};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Load `config.json` from the current working directory.
pub fn load() -> Result<ExporterConfig> {
    let dir = std::env::current_dir()
        .map_err(|e| ExporterError::ConfigRead(format!("working directory: {e}")))?;
    load_from_file(dir.join(CONFIG_FILE))
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| ExporterError::ConfigRead(format!("{}: {e}", path.display())))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let root: Value = serde_json::from_str(s)
        .map_err(|e| ExporterError::InvalidConfig(format!("invalid json: {e}")))?;

    let Value::Array(items) = root else {
        return Err(ExporterError::InvalidConfig(
            "top level must be an array of accounts".into(),
        ));
    };

    let mut accounts = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            return Err(ExporterError::InvalidConfig(format!(
                "account #{idx} must be an object"
            )));
        }
        let account: AccountConfig = serde_json::from_value(item)
            .map_err(|e| ExporterError::InvalidConfig(format!("account #{idx}: {e}")))?;
        accounts.push(account);
    }

    Ok(ExporterConfig::new(accounts))
}
