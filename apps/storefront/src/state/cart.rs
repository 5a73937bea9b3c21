//! # Cart Store
//!
//! The session's single shared cart. Every screen holds a clone of the
//! same [`CartStore`]; all of them see the same lines and totals.
//!
//! ## Thread Safety
//! The cart lives behind `Arc<Mutex<_>>`:
//! 1. Screens and background tasks share one cart
//! 2. Each operation is applied atomically, one at a time
//! 3. The snapshot for subscribers is published while the lock is held,
//!    so subscribers observe changes in the order they were made
//!
//! ## Checkout Clear
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Delayed Clear Timeline                               │
//! │                                                                         │
//! │  t = 0        clear_cart()                                              │
//! │               ├── loading = true          (published immediately)       │
//! │               ├── items unchanged                                       │
//! │               └── spawn task ─────────┐                                 │
//! │                                       │  sleep(checkout_delay)          │
//! │  0 < t < d    reads: old items,       │                                 │
//! │               loading = true          │                                 │
//! │                                       ▼                                 │
//! │  t = d        items = [], loading = false   (one published snapshot)    │
//! │                                                                         │
//! │  Task aborted before d: loading = false, items kept (drop guard)        │
//! │  clear_cart() while pending: Err(ClearInProgress)                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Adds made while a clear is pending are accepted and then wiped when
//! the clear lands, same as the checkout screen behaves.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use powerzone_core::{Cart, CartLineItem, CartTotals, Money, Product};
use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::state::StoreConfig;

// =============================================================================
// Snapshot
// =============================================================================

/// Point-in-time view of the cart, as handed to screens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub items: Vec<CartLineItem>,

    /// Badge count, distinct lines and subtotal.
    pub totals: CartTotals,

    /// True while a checkout clear is pending.
    pub loading: bool,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl CartSnapshot {
    fn capture(cart: &Cart, loading: bool) -> Self {
        CartSnapshot {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
            loading,
            updated_at: Utc::now(),
        }
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Debug)]
struct StoreState {
    cart: Cart,
    clear_pending: bool,
}

#[derive(Debug)]
struct Inner {
    session_id: Uuid,
    checkout_delay: Duration,
    state: Mutex<StoreState>,
    snapshot_tx: watch::Sender<CartSnapshot>,
}

impl Inner {
    /// Cart operations never leave the cart half-updated, so a panic in
    /// another holder does not invalidate it.
    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &StoreState) {
        self.snapshot_tx
            .send_replace(CartSnapshot::capture(&state.cart, state.clear_pending));
    }
}

/// Shared cart state for one storefront session.
///
/// Cloning is cheap and every clone refers to the same cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

impl CartStore {
    /// Creates an empty store using the configured checkout delay.
    pub fn new(config: &StoreConfig) -> Self {
        Self::with_checkout_delay(config.checkout_delay())
    }

    pub fn with_checkout_delay(checkout_delay: Duration) -> Self {
        let cart = Cart::new();
        let (snapshot_tx, _) = watch::channel(CartSnapshot::capture(&cart, false));
        let session_id = Uuid::new_v4();

        debug!(%session_id, ?checkout_delay, "Cart store created");

        CartStore {
            inner: Arc::new(Inner {
                session_id,
                checkout_delay,
                state: Mutex::new(StoreState {
                    cart,
                    clear_pending: false,
                }),
                snapshot_tx,
            }),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.inner.session_id
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Adds one unit of `product`. Returns the line's new quantity.
    pub fn add_to_cart(&self, product: &Product) -> i64 {
        let mut state = self.inner.lock();
        let quantity = state.cart.add_product(product);
        self.inner.publish(&state);

        debug!(
            session = %self.inner.session_id,
            product_id = %product.id,
            quantity,
            "Added to cart"
        );
        quantity
    }

    /// Removes the line for `product_id`. Unknown ids are a no-op.
    pub fn remove_from_cart(&self, product_id: &str) -> bool {
        let mut state = self.inner.lock();
        let removed = state.cart.remove_item(product_id);
        if removed {
            self.inner.publish(&state);
            debug!(session = %self.inner.session_id, product_id, "Removed from cart");
        }
        removed
    }

    /// Sets a line's quantity; anything below 1 removes the line.
    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return self.remove_from_cart(product_id);
        }

        let mut state = self.inner.lock();
        let changed = state.cart.update_quantity(product_id, quantity);
        if changed {
            self.inner.publish(&state);
            debug!(
                session = %self.inner.session_id,
                product_id,
                quantity,
                "Quantity updated"
            );
        }
        changed
    }

    /// Starts a checkout: marks the cart busy now and empties it after
    /// the checkout delay.
    ///
    /// Returns as soon as the clear is scheduled. Dropping the returned
    /// handle does not cancel the clear.
    ///
    /// ## Errors
    /// - [`StoreError::NoRuntime`] outside a tokio runtime
    /// - [`StoreError::ClearInProgress`] if a clear is already pending
    pub fn clear_cart(&self) -> StoreResult<ClearHandle> {
        let runtime = Handle::try_current().map_err(|_| StoreError::NoRuntime)?;

        {
            let mut state = self.inner.lock();
            if state.clear_pending {
                warn!(session = %self.inner.session_id, "Checkout requested while one is pending");
                return Err(StoreError::ClearInProgress);
            }
            state.clear_pending = true;
            self.inner.publish(&state);
        }

        let delay = self.inner.checkout_delay;
        info!(
            session = %self.inner.session_id,
            delay_ms = delay.as_millis() as u64,
            "Checkout started"
        );

        let pending = PendingClear {
            inner: Arc::clone(&self.inner),
            completed: false,
        };
        let join = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            pending.complete();
        });

        Ok(ClearHandle { join })
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    pub fn snapshot(&self) -> CartSnapshot {
        let state = self.inner.lock();
        CartSnapshot::capture(&state.cart, state.clear_pending)
    }

    pub fn items(&self) -> Vec<CartLineItem> {
        self.with_cart(|cart| cart.items().to_vec())
    }

    /// Sum of quantities (the header badge number).
    pub fn total_items(&self) -> i64 {
        self.with_cart(Cart::total_items)
    }

    pub fn subtotal(&self) -> Money {
        self.with_cart(Cart::subtotal)
    }

    pub fn totals(&self) -> CartTotals {
        self.with_cart(|cart| CartTotals::from(cart))
    }

    pub fn is_loading(&self) -> bool {
        self.inner.lock().clear_pending
    }

    /// Receiver that sees a fresh snapshot after every change.
    pub fn subscribe(&self) -> watch::Receiver<CartSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let lines = store.with_cart(|cart| cart.item_count());
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let state = self.inner.lock();
        f(&state.cart)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(&StoreConfig::default())
    }
}

// =============================================================================
// Pending Clear
// =============================================================================

/// Owned by the clear task. Whatever way the task ends, the loading flag
/// goes back to false.
struct PendingClear {
    inner: Arc<Inner>,
    completed: bool,
}

impl PendingClear {
    fn complete(mut self) {
        let cleared = {
            let mut state = self.inner.lock();
            let cleared = state.cart.total_items();
            state.cart.clear();
            state.clear_pending = false;
            self.inner.publish(&state);
            cleared
        };
        self.completed = true;

        info!(session = %self.inner.session_id, cleared, "Checkout complete, cart emptied");
    }
}

impl Drop for PendingClear {
    fn drop(&mut self) {
        if self.completed {
            return;
        }

        let mut state = self.inner.lock();
        state.clear_pending = false;
        self.inner.publish(&state);

        warn!(session = %self.inner.session_id, "Checkout clear cancelled, cart kept");
    }
}

/// Handle to a scheduled checkout clear.
#[derive(Debug)]
pub struct ClearHandle {
    join: JoinHandle<()>,
}

impl ClearHandle {
    /// Waits until the cart has been emptied.
    pub async fn wait(self) -> StoreResult<()> {
        self.join
            .await
            .map_err(|e| StoreError::ClearAborted(e.to_string()))
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Cancels the clear. The cart keeps its lines and stops loading.
    pub fn abort(&self) {
        self.join.abort();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
