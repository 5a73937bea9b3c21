//! # Store Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`POWERZONE_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Gym PowerZone"
//! currency_symbol = "$"
//! currency_decimals = 2
//! checkout_delay_ms = 1000
//! ```
//!
//! ## Thread Safety
//! Read-only after loading; the cart store copies what it needs.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};

/// Default pause before a checkout empties the cart.
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 1000;

/// Most decimal places `validate` accepts.
pub const MAX_CURRENCY_DECIMALS: u8 = 4;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store name shown in the header.
    pub store_name: String,

    /// Currency symbol (for display).
    pub currency_symbol: String,

    /// Number of decimal places for currency.
    pub currency_decimals: u8,

    /// How long the checkout clear keeps the cart busy, in milliseconds.
    pub checkout_delay_ms: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Gym PowerZone".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            checkout_delay_ms: DEFAULT_CHECKOUT_DELAY_MS,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file (if present) and the environment.
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        if self.currency_symbol.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "currency_symbol must not be empty".into(),
            ));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(StoreError::InvalidConfig(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `POWERZONE_*` overrides from any key lookup.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("POWERZONE_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(symbol) = lookup("POWERZONE_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(delay) = lookup("POWERZONE_CHECKOUT_DELAY_MS") {
            match delay.parse::<u64>() {
                Ok(ms) => {
                    debug!(ms, "Overriding checkout delay from environment");
                    self.checkout_delay_ms = ms;
                }
                Err(_) => warn!(value = %delay, "Ignoring non-numeric POWERZONE_CHECKOUT_DELAY_MS"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("mx", "powerzone", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Checkout delay as a `Duration`.
    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Formats a cent amount for display, with thousands separators.
    ///
    /// Always prints `currency_decimals` places, clamped to
    /// [`MAX_CURRENCY_DECIMALS`] for configs built without `validate`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront::state::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(123450), "$1,234.50");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let decimals = self.currency_decimals.min(MAX_CURRENCY_DECIMALS);
        let divisor = 10_i64.pow(u32::from(decimals));
        let whole = (cents / divisor).unsigned_abs();
        let frac = (cents % divisor).unsigned_abs();

        let mut body = group_thousands(whole);
        if decimals > 0 {
            body.push_str(&format!(".{:0width$}", frac, width = usize::from(decimals)));
        }

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            body
        )
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
