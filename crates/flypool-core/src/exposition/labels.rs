//! Per-account label set.

/// Build `apiUrl="..",account=".."` for one account.
///
/// Values are copied verbatim; embedded quotes are not escaped.
pub fn account_labels(api_url: &str, account_id: &str) -> String {
    format!("apiUrl=\"{api_url}\",account=\"{account_id}\"")
}
