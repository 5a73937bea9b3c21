//! # Cart Model
//!
//! The shopping cart as a plain value: line items plus the rules that keep
//! them consistent. Session ownership, delayed checkout and change
//! notifications live in `apps/storefront`.
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Screen Action           Cart Method              Effect                │
//! │  ─────────────           ───────────              ──────                │
//! │                                                                         │
//! │  "Agregar" on card ────► add_product(p) ────────► qty + 1 or append     │
//! │                                                                         │
//! │  "+" / "-" in cart ────► update_quantity(id, n) ─► qty = n, n < 1 drops  │
//! │                                                                         │
//! │  "Eliminar" ───────────► remove_item(id) ───────► line removed          │
//! │                                                                         │
//! │  Checkout completes ───► clear() ───────────────► no lines              │
//! │                                                                         │
//! │  Badge / summary ──────► total_items(), subtotal()  (derived, on read)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per product id
//! - Every line has `quantity >= 1`
//! - Lines keep insertion order; quantity changes never reorder
//! - Totals are computed from the lines, never stored beside them

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Line Item
// =============================================================================

/// One product in the cart with its requested quantity.
///
/// Carries the whole product so the cart screen can render name,
/// description, image and price without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineItem {
    /// Product as it was when first added.
    #[serde(flatten)]
    pub product: Product,

    /// Requested quantity, always at least 1.
    pub quantity: i64,
}

impl CartLineItem {
    /// Creates a line with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLineItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Product identifier of this line.
    #[inline]
    pub fn id(&self) -> &str {
        &self.product.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lines are private so the invariants above can only be changed
/// through the methods below.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity goes up by 1
    /// - Otherwise: a new line with quantity 1 is appended
    ///
    /// Always succeeds. Returns the line's new quantity.
    pub fn add_product(&mut self, product: &Product) -> i64 {
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == product.id) {
            item.quantity = item.quantity.saturating_add(1);
            return item.quantity;
        }

        self.items.push(CartLineItem::from_product(product));
        1
    }

    /// Removes the line for a product.
    ///
    /// Unknown ids are a no-op. Returns whether a line was removed.
    pub fn remove_item(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.id() != product_id);
        self.items.len() != initial_len
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity < 1`: same as [`Cart::remove_item`]
    /// - Unknown id: no-op
    ///
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_item(product_id);
        }

        match self.items.iter_mut().find(|i| i.id() == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Returns the line for a product, if present.
    pub fn get(&self, product_id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id() == product_id)
    }

    /// Number of distinct products.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines (the badge number).
    ///
    /// Saturates at `i64::MAX` like the per-line increments.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |total, i| total.saturating_add(i.quantity))
    }

    /// Sum of `price × quantity` across all lines.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Derived figures for the header badge and the cart summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_items: i64,
    pub subtotal_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            total_items: cart.total_items(),
            subtotal_cents: cart.subtotal().cents(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
