//! # PowerZone Storefront Demo
//!
//! Drives one scripted shopping session against the cart store and prints
//! the final snapshot as JSON.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  demo/catalog.json ──► parse_catalog ──► products                       │
//! │                                              │                          │
//! │  header task ◄── store.subscribe() ◄── CartStore ◄── scripted screens   │
//! │  (badge + subtotal log)                      │                          │
//! │                                              ▼                          │
//! │                                   clear_cart() ── delay ──► empty       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Set `POWERZONE_CONFIG` to point at a `storefront.toml`.

use std::path::PathBuf;

use powerzone_core::catalog::parse_catalog;
use powerzone_core::display::{badge_label, subtotal_label};
use storefront::{init_tracing, CartStore, StoreConfig};
use tracing::{info, warn};

const DEMO_CATALOG: &str = include_str!("../demo/catalog.json");

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = std::env::var("POWERZONE_CONFIG").ok().map(PathBuf::from);
    let config = StoreConfig::load(config_path)?;
    info!(store = %config.store_name, delay_ms = config.checkout_delay_ms, "Configuration loaded");

    let products = parse_catalog(DEMO_CATALOG)?;
    info!(count = products.len(), "Catalog loaded");

    let store = CartStore::new(&config);
    info!(session = %store.session_id(), "Session started");

    // Header badge and cart summary follow every change.
    let mut rx = store.subscribe();
    let header_config = config.clone();
    let header = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let snap = rx.borrow_and_update().clone();
            let badge = badge_label(snap.totals.total_items).unwrap_or_default();
            info!(
                badge = %badge,
                summary = %subtotal_label(snap.totals.total_items),
                subtotal = %header_config.format_currency(snap.totals.subtotal_cents),
                loading = snap.loading,
                "Cart changed"
            );
        }
    });

    let [whey, creatine, shaker, gloves] = products.as_slice() else {
        warn!("Demo catalog does not have four products, nothing to do");
        return Ok(());
    };

    store.add_to_cart(whey);
    store.add_to_cart(creatine);
    store.add_to_cart(whey);
    store.add_to_cart(shaker);
    for _ in 0..8 {
        store.add_to_cart(gloves);
    }
    store.update_quantity(&gloves.id, 7);
    store.remove_from_cart(&shaker.id);
    store.update_quantity(&creatine.id, 0);

    info!(
        total_items = store.total_items(),
        subtotal = %config.format_currency(store.subtotal().cents()),
        "Proceeding to checkout"
    );

    let checkout = store.clear_cart()?;
    checkout.wait().await?;

    println!("{}", serde_json::to_string_pretty(&store.snapshot())?);

    // Last handle gone: the header task sees the channel close and exits.
    drop(store);
    header.await?;
    Ok(())
}
