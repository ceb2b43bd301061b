//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`PHARMACY_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How the "View Data" page prints rows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ViewFormat {
    /// One aligned line per row
    #[default]
    Table,

    /// One JSON object per row
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Explicit database file. `None` means the platform data directory.
    pub database_path: Option<PathBuf>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places shown for prices
    pub currency_decimals: u8,

    /// Reject stock rows and sales that reference missing records
    pub enforce_foreign_keys: bool,

    /// Output format of the "View Data" page
    pub view_format: ViewFormat,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Database: platform data directory
    /// - Currency: $ with 2 decimals
    /// - Foreign keys: not enforced (same as existing pharmacy.db files)
    /// - View: table
    fn default() -> Self {
        ConfigState {
            database_path: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            enforce_foreign_keys: false,
            view_format: ViewFormat::Table,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `PHARMACY_DB_PATH`: database file to open
    /// - `PHARMACY_CURRENCY_SYMBOL`: e.g. "€"
    /// - `PHARMACY_ENFORCE_FOREIGN_KEYS`: "1", "true", "yes" or "on"
    /// - `PHARMACY_VIEW_FORMAT`: "table" or "json"
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unparseable values keep
    /// their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("PHARMACY_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.database_path = Some(PathBuf::from(path));
        }

        if let Some(symbol) = lookup("PHARMACY_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(flag) = lookup("PHARMACY_ENFORCE_FOREIGN_KEYS") {
            config.enforce_foreign_keys = matches!(
                flag.trim().to_ascii_lowercase().as_str(),
                "1" | "true" | "yes" | "on"
            );
        }

        if let Some(format) = lookup("PHARMACY_VIEW_FORMAT") {
            match format.trim().to_ascii_lowercase().as_str() {
                "table" => config.view_format = ViewFormat::Table,
                "json" => config.view_format = ViewFormat::Json,
                other => tracing::warn!(value = other, "Ignoring unknown PHARMACY_VIEW_FORMAT"),
            }
        }

        config
    }

    /// Formats a stored price for display.
    ///
    /// Rounding happens here only; the stored value is untouched.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_price(12.3456), "$12.35");
    /// ```
    pub fn format_price(&self, price: f64) -> String {
        format!(
            "{}{}{:.*}",
            if price < 0.0 { "-" } else { "" },
            self.currency_symbol,
            self.currency_decimals as usize,
            price.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(5.0), "$5.00");
        assert_eq!(config.format_price(12.3456), "$12.35");
        assert_eq!(config.format_price(0.0), "$0.00");
    }

    #[test]
    fn test_format_price_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(-3.5), "-$3.50");
    }

    #[test]
    fn test_format_price_without_decimals() {
        let config = ConfigState {
            currency_symbol: "¥".to_string(),
            currency_decimals: 0,
            ..ConfigState::default()
        };
        assert_eq!(config.format_price(120.0), "¥120");
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ConfigState::from_lookup(lookup_from(&[]));
        assert_eq!(config.database_path, None);
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.enforce_foreign_keys);
        assert_eq!(config.view_format, ViewFormat::Table);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("PHARMACY_DB_PATH", "/tmp/pharmacy.db"),
            ("PHARMACY_CURRENCY_SYMBOL", "€"),
            ("PHARMACY_ENFORCE_FOREIGN_KEYS", "Yes"),
            ("PHARMACY_VIEW_FORMAT", "JSON"),
        ]));
        assert_eq!(config.database_path, Some(PathBuf::from("/tmp/pharmacy.db")));
        assert_eq!(config.format_price(2.25), "€2.25");
        assert!(config.enforce_foreign_keys);
        assert_eq!(config.view_format, ViewFormat::Json);
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = ConfigState::from_lookup(lookup_from(&[
            ("PHARMACY_DB_PATH", "  "),
            ("PHARMACY_ENFORCE_FOREIGN_KEYS", "maybe"),
            ("PHARMACY_VIEW_FORMAT", "xml"),
        ]));
        assert_eq!(config.database_path, None);
        assert!(!config.enforce_foreign_keys);
        assert_eq!(config.view_format, ViewFormat::Table);
    }
}
