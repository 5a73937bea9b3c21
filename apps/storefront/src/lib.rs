//! # PowerZone Storefront Library
//!
//! Session host for the Gym PowerZone storefront: the shared cart store,
//! the delayed checkout clear, configuration and logging setup.
//!
//! ## Module Organization
//! ```text
//! storefront/
//! ├── lib.rs          ◄─── You are here (re-exports, tracing setup)
//! ├── main.rs         ◄─── Scripted demo session
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore, snapshots, checkout clear
//! │   └── config.rs   ◄─── StoreConfig (TOML + env)
//! └── error.rs        ◄─── StoreError
//! ```
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  1. init_tracing()                                                      │
//! │  2. StoreConfig::load(..)        storefront.toml + POWERZONE_* env      │
//! │  3. CartStore::new(&config)      one per session, cloned into screens   │
//! │  4. screens call add_to_cart / update_quantity / remove_from_cart       │
//! │  5. header + cart screen react to store.subscribe()                     │
//! │  6. checkout: clear_cart() → loading → empty after the delay            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{StoreError, StoreResult};
pub use state::{CartSnapshot, CartStore, ClearHandle, StoreConfig};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for the storefront crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,powerzone_core=debug,storefront=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
