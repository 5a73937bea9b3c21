//! # Store Error Type
//!
//! Failures of the session host. Cart mutations themselves never fail;
//! what can go wrong is configuration, the runtime, or a checkout clear.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Source                     Variant                                     │
//! │  ──────                     ───────                                     │
//! │  storefront.toml unreadable ConfigRead                                  │
//! │  storefront.toml malformed  ConfigParse                                 │
//! │  bad values                 InvalidConfig                               │
//! │  checkout tapped twice      ClearInProgress                             │
//! │  clear task cancelled       ClearAborted                                │
//! │  no tokio runtime           NoRuntime                                   │
//! │  catalog / forms            Core (powerzone-core)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use powerzone_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A checkout clear is already pending; the second request is refused.
    #[error("A checkout is already in progress")]
    ClearInProgress,

    /// The clear task ended without emptying the cart.
    #[error("Checkout clear did not complete: {0}")]
    ClearAborted(String),

    /// `clear_cart` needs a tokio runtime to schedule the delayed clear.
    #[error("No async runtime available to schedule checkout")]
    NoRuntime,

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use powerzone_core::ValidationError;

    #[test]
    fn test_messages() {
        assert_eq!(
            StoreError::ClearInProgress.to_string(),
            "A checkout is already in progress"
        );
        assert_eq!(
            StoreError::InvalidConfig("currency_symbol is empty".into()).to_string(),
            "Invalid config: currency_symbol is empty"
        );
    }

    #[test]
    fn test_core_errors_pass_through() {
        let core = CoreError::Validation(ValidationError::Required {
            field: "email".to_string(),
        });
        let err: StoreError = core.into();
        assert_eq!(err.to_string(), "Validation error: email is required");
    }
}
