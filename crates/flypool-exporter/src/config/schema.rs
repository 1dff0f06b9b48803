use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One monitored pool account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountConfig {
    /// Pool API base URL, e.g. `https://api.ethermine.org`.
    #[serde(deserialize_with = "string_or_empty")]
    pub api_url: String,
    /// Miner address or account id on that pool.
    #[serde(deserialize_with = "string_or_empty")]
    pub account_id: String,
}

/// Ordered account list, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct ExporterConfig {
    pub accounts: Vec<AccountConfig>,
}

impl ExporterConfig {
    pub fn new(accounts: Vec<AccountConfig>) -> Self {
        Self { accounts }
    }

    pub fn accounts(&self) -> &[AccountConfig] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

// Wrong-typed fields do not reject the file; the entry just fails upstream later.
fn string_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    match Value::deserialize(d)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}
