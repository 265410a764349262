//! # Point-of-Sale Configuration
//!
//! Configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`KASIR_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use kasir_core::types::TaxRate;
use kasir_core::STANDARD_TAX_RATE_BPS;

/// Point-of-sale configuration.
///
/// Defaults are suitable for development against a local backend;
/// deployments override through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosConfig {
    /// Base URL of the backend REST API.
    pub base_url: String,

    /// Store name shown on screens and receipts.
    pub store_name: String,

    /// Toko id used when no explicit store is selected.
    pub default_toko_id: i64,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    /// Rupiah uses 0: prices are whole units.
    pub currency_decimals: u8,

    /// Flat tax rate in basis points (1000 = 10%).
    pub tax_rate_bps: u32,
}

impl Default for PosConfig {
    fn default() -> Self {
        PosConfig {
            base_url: "http://localhost:8000/api".to_string(),
            store_name: "Kasir Dev Toko".to_string(),
            default_toko_id: 1,
            currency_code: "IDR".to_string(),
            currency_symbol: "Rp".to_string(),
            currency_decimals: 0,
            tax_rate_bps: STANDARD_TAX_RATE_BPS,
        }
    }
}

impl PosConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `KASIR_BASE_URL`: backend base URL
    /// - `KASIR_STORE_NAME`: store display name
    /// - `KASIR_TOKO_ID`: default toko id
    /// - `KASIR_TAX_RATE`: tax percentage (e.g. "10" or "8.25")
    pub fn from_env() -> Self {
        let mut config = PosConfig::default();

        if let Ok(base_url) = std::env::var("KASIR_BASE_URL") {
            config.base_url = base_url;
        }

        if let Ok(store_name) = std::env::var("KASIR_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(toko_id) = std::env::var("KASIR_TOKO_ID") {
            if let Ok(id) = toko_id.parse::<i64>() {
                config.default_toko_id = id;
            }
        }

        if let Ok(tax_rate) = std::env::var("KASIR_TAX_RATE") {
            if let Ok(pct) = tax_rate.parse::<f64>() {
                config.tax_rate_bps = (pct * 100.0).round() as u32;
            }
        }

        config
    }

    /// The configured tax rate.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats a minor-unit amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_pos::state::PosConfig;
    ///
    /// let config = PosConfig::default();
    /// assert_eq!(config.format_currency(49_500), "Rp49500");
    /// ```
    pub fn format_currency(&self, minor: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = minor / divisor;
        let frac = (minor % divisor).abs();

        format!(
            "{}{}{}",
            if minor < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_zero_decimals() {
        let config = PosConfig::default();
        assert_eq!(config.format_currency(49_500), "Rp49500");
        assert_eq!(config.format_currency(0), "Rp0");
        assert_eq!(config.format_currency(-9_500), "-Rp9500");
    }

    #[test]
    fn test_format_currency_two_decimals() {
        let config = PosConfig {
            currency_code: "USD".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            ..PosConfig::default()
        };
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }

    #[test]
    fn test_default_tax_rate() {
        let config = PosConfig::default();
        assert_eq!(config.tax_rate().bps(), 1000);
    }
}
