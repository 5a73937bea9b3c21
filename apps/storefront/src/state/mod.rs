//! # State Module
//!
//! Session state for the storefront.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐        ┌──────────────────────────────┐  │
//! │  │       CartStore          │        │        StoreConfig           │  │
//! │  │                          │        │                              │  │
//! │  │  Arc<Inner>              │ ◄───── │  checkout_delay_ms           │  │
//! │  │   ├ Mutex<Cart>          │        │  currency_symbol / decimals  │  │
//! │  │   ├ clear_pending        │        │  store_name                  │  │
//! │  │   └ watch::Sender        │        │                              │  │
//! │  └──────────────────────────┘        └──────────────────────────────┘  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: clones share one Arc; each operation takes the Mutex     │
//! │  • StoreConfig: read-only after loading                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;

pub use cart::{CartSnapshot, CartStore, ClearHandle};
pub use config::{StoreConfig, DEFAULT_CHECKOUT_DELAY_MS, MAX_CURRENCY_DECIMALS};
