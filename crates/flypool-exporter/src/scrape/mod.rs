//! Per-request scrape of all configured accounts.
//!
//! Accounts are fetched one after another in config order. A failing account
//! is reported as down with zeroed statistics and never aborts the others.

use flypool_core::stats::MinerStatistics;

use crate::config::AccountConfig;
use crate::upstream::UpstreamClient;

/// Outcome of scraping one account.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountSample {
    pub up: bool,
    pub stats: MinerStatistics,
}

impl AccountSample {
    /// Account is down; every statistic reads zero.
    pub fn down() -> Self {
        Self::default()
    }
}

/// Fetch and decode one account.
pub async fn scrape_account(client: &UpstreamClient, account: &AccountConfig) -> AccountSample {
    let body = match client.fetch(&account.api_url, &account.account_id).await {
        Ok(body) => body,
        Err(e) => {
            tracing::warn!(
                api_url = %account.api_url,
                account = %account.account_id,
                kind = e.kind().as_str(),
                error = %e,
                "upstream fetch failed"
            );
            return AccountSample::down();
        }
    };

    let stats = MinerStatistics::from_body(&body);
    if !stats.is_ok() {
        tracing::warn!(
            api_url = %account.api_url,
            account = %account.account_id,
            status = %stats.status,
            "Received negative status in JSON response"
        );
        tracing::debug!(body = %body, "upstream body");
        return AccountSample::down();
    }

    AccountSample { up: true, stats }
}

/// Scrape every account sequentially, preserving config order.
pub async fn scrape_all(client: &UpstreamClient, accounts: &[AccountConfig]) -> Vec<AccountSample> {
    let mut samples = Vec::with_capacity(accounts.len());
    for account in accounts {
        samples.push(scrape_account(client, account).await);
    }
    samples
}
