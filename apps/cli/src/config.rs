//! # Shell Configuration
//!
//! Startup configuration resolved from flags and environment variables.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--base-url`, `--page-size`)
//! 2. Environment variables (`SHOPFRONT_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after startup, so no locking is needed.

use std::path::PathBuf;

use directories::ProjectDirs;
use shopfront_core::Money;

/// Shell configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the mock backend (no trailing slash).
    pub base_url: String,

    /// Products fetched per catalog page.
    pub page_size: u32,

    /// Currency symbol for display. The backend stores whole dong amounts.
    pub currency_symbol: String,
}

impl StoreConfig {
    pub fn new(base_url: &str, page_size: u32) -> Self {
        StoreConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            // A zero page size would fetch empty pages forever.
            page_size: page_size.max(1),
            currency_symbol: "₫".to_string(),
        }
    }

    /// Formats a money amount for display.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = StoreConfig::new(DEFAULT_BASE_URL, 10);
    /// assert_eq!(config.format_money(Money::from_minor(3_900_000)), "₫3,900,000");
    /// ```
    pub fn format_money(&self, amount: Money) -> String {
        format!("{}{}", self.currency_symbol, amount)
    }
}

/// The platform data directory for the session flag and shell history.
///
/// `None` when the platform gives us no home directory; the shell then
/// runs with in-memory state only.
pub fn data_dir() -> Option<PathBuf> {
    ProjectDirs::from("io", "Shopfront", "shopfront").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        let config = StoreConfig::new("https://example.test", 10);
        assert_eq!(config.format_money(Money::from_minor(3_900_000)), "₫3,900,000");
        assert_eq!(config.format_money(Money::zero()), "₫0");
    }

    #[test]
    fn test_page_size_floor() {
        let config = StoreConfig::new("https://example.test", 0);
        assert_eq!(config.page_size, 1);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = StoreConfig::new("https://example.test/", 10);
        assert_eq!(config.base_url, "https://example.test");
    }
}
