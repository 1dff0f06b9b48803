//! Exposition rendering for scraped accounts.
//!
//! Each account renders a fixed block of lines, always in the same order and
//! always with the same `apiUrl`/`account` labels. No TYPE/HELP lines.

use flypool_core::exposition::{
    account_labels, compose_line, decimal_string, fixed_point_shift, integer_string,
};

use crate::config::AccountConfig;
use crate::scrape::AccountSample;

/// Fractional digits for hashrates.
const HASHRATE_PRECISION: usize = 6;
/// Fractional digits for per-minute earnings.
const EARNINGS_PRECISION: usize = 19;
/// Base-unit shift applied to balances.
const BALANCE_SHIFT: usize = 19;

/// Metric names in emission order.
pub const METRIC_NAMES: [&str; 15] = [
    "flypool_up",
    "flypool_time",
    "flypool_lastseen",
    "flypool_hashrate_reported",
    "flypool_hashrate_current",
    "flypool_hashrate_average",
    "flypool_active_workers",
    "flypool_balance_unpaid",
    "flypool_balance_unconfirmed",
    "flypool_shares_valid",
    "flypool_shares_invalid",
    "flypool_shares_stale",
    "flypool_coins_per_min",
    "flypool_usd_per_min",
    "flypool_btc_per_min",
];

/// Lines emitted per account.
pub const LINES_PER_ACCOUNT: usize = METRIC_NAMES.len();

fn balance(base_units: i64) -> String {
    fixed_point_shift(&integer_string(base_units), BALANCE_SHIFT)
}

/// Append one account's block to `out`.
pub fn render_account(account: &AccountConfig, sample: &AccountSample, out: &mut String) {
    let labels = account_labels(&account.api_url, &account.account_id);
    let d = &sample.stats.data;

    let values: [String; LINES_PER_ACCOUNT] = [
        integer_string(i64::from(sample.up)),
        integer_string(d.time),
        integer_string(d.last_seen),
        decimal_string(d.reported_hashrate, HASHRATE_PRECISION),
        decimal_string(d.current_hashrate, HASHRATE_PRECISION),
        decimal_string(d.average_hashrate, HASHRATE_PRECISION),
        integer_string(d.active_workers),
        balance(d.unpaid),
        balance(d.unconfirmed),
        integer_string(d.valid_shares),
        integer_string(d.invalid_shares),
        integer_string(d.stale_shares),
        decimal_string(d.coins_per_min, EARNINGS_PRECISION),
        decimal_string(d.usd_per_min, EARNINGS_PRECISION),
        decimal_string(d.btc_per_min, EARNINGS_PRECISION),
    ];

    for (name, value) in METRIC_NAMES.iter().zip(values.iter()) {
        out.push_str(&compose_line(name, &labels, value));
    }
}

/// Render all accounts in order. `samples` pairs with `accounts` by index.
pub fn render(accounts: &[AccountConfig], samples: &[AccountSample]) -> String {
    let mut out = String::new();
    for (account, sample) in accounts.iter().zip(samples) {
        render_account(account, sample, &mut out);
    }
    out
}
