//! # powerzone-core: Pure Storefront Logic for Gym PowerZone
//!
//! This crate holds the logic the storefront screens share: the cart model
//! and its derived totals, integer money, catalog record mapping and the
//! client-side form rules. Nothing here performs I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      PowerZone Storefront                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Mobile / Web client screens                     │   │
//! │  │   Store ──► Cart ──► Header badge ──► Register / Login          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads snapshots, calls operations     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              apps/storefront (CartStore, config)                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ powerzone-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌─────────┐ │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │validation│ │ catalog │ │   │
//! │  │   │ Product │ │  Money  │ │  Cart   │ │  forms   │ │ records │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └─────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalog product as the screens see it
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart line items, quantity invariants, derived totals
//! - [`catalog`] - Mapping of raw API product records
//! - [`display`] - Badge and label helpers for cart views
//! - [`validation`] - Registration, login, reset and contact form rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use powerzone_core::{Cart, Money, Product};
//!
//! let creatine = Product::new("p1", "Creatina", Money::from_cents(1000));
//! let mut cart = Cart::new();
//! cart.add_product(&creatine);
//! cart.add_product(&creatine);
//!
//! assert_eq!(cart.total_items(), 2);
//! assert_eq!(cart.subtotal().cents(), 2000);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod display;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLineItem, CartTotals};
pub use error::{CoreError, CoreResult, FormErrors, ValidationError};
pub use money::Money;
pub use types::Product;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Highest count a cart badge shows before collapsing to `"9+"`.
pub const BADGE_COUNT_CAP: i64 = 9;

/// Upper bound of the star rating shown on product cards.
pub const MAX_RATING: f32 = 5.0;
