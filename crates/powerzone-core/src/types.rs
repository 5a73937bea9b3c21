//! # Domain Types
//!
//! The catalog product as the storefront screens consume it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Product                                        │
//! │  ─────────────────────────────────────────────────────────────────────  │
//! │  id            "17"               identifier assigned by the API        │
//! │  name          "Creatina 300g"                                          │
//! │  description   "Monohidratada"                                          │
//! │  price_cents   59990              $599.90                               │
//! │  image_url     "https://…/17.png" loaded by the client                  │
//! │  rating        4.5                0.0 - 5.0 stars                       │
//! │  reviews       12                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product listed in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Identifier assigned by the catalog API. Unique per product.
    pub id: String,

    /// Display name shown on the card and in the cart.
    pub name: String,

    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,

    /// Unit price in cents. Never negative.
    pub price_cents: i64,

    /// Image reference; loading it is the client's job.
    #[serde(default)]
    pub image_url: String,

    /// Average rating, 0 to 5 stars.
    #[serde(default)]
    pub rating: f32,

    /// Number of reviews behind the rating.
    #[serde(default)]
    pub reviews: u32,
}

impl Product {
    /// Creates a product with an empty description, image and rating.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price_cents: price.cents(),
            image_url: String::new(),
            rating: 0.0,
            reviews: 0,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image reference.
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Sets rating and review count.
    pub fn with_rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = rating;
        self.reviews = reviews;
        self
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
