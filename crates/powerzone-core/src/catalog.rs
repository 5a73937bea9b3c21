//! # Catalog Records
//!
//! The products endpoint answers with Spanish field names and decimal text
//! prices. This module turns that payload into [`Product`] values.
//!
//! ```text
//! API record                                Product
//! ──────────                                ───────
//! id_producto      17 | "17"        ──►     id          "17"
//! nombre_producto  "Creatina 300g"  ──►     name
//! descripcion      "Monohidratada"  ──►     description
//! imagen_url       "https://…"      ──►     image_url
//! precio           "599.90" | 599.9 ──►     price_cents 59990
//!                                           rating 0, reviews 0
//! ```
//!
//! Fetching the payload is the API client's job; this module only maps it.

use serde::Deserialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_product;

/// Identifier as sent by the API: numeric or text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Price as sent by the API: decimal text or a JSON number.
///
/// Numbers are kept as their JSON text so no float rounding happens
/// before the amount is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RecordPrice {
    Number(serde_json::Number),
    Text(String),
}

impl RecordPrice {
    fn to_money(&self) -> Result<Money, crate::ValidationError> {
        match self {
            RecordPrice::Number(n) => Money::parse_decimal(&n.to_string()),
            RecordPrice::Text(s) => Money::parse_decimal(s),
        }
    }
}

/// One product as returned by the catalog endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogRecord {
    pub id_producto: RecordId,
    pub nombre_producto: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(default)]
    pub imagen_url: Option<String>,
    pub precio: RecordPrice,
}

impl TryFrom<CatalogRecord> for Product {
    type Error = CoreError;

    fn try_from(record: CatalogRecord) -> Result<Self, Self::Error> {
        let record_id = record.id_producto.to_string();
        let rejected = |source| CoreError::InvalidRecord {
            record_id: record_id.clone(),
            source,
        };

        let price = record.precio.to_money().map_err(rejected)?;

        let product = Product::new(record_id.clone(), record.nombre_producto, price)
            .with_description(record.descripcion.unwrap_or_default())
            .with_image(record.imagen_url.unwrap_or_default());

        validate_product(&product).map_err(rejected)?;
        Ok(product)
    }
}

/// Parses a full catalog response body.
///
/// The first bad record fails the whole payload; the store screen then
/// shows its "could not load products" message.
pub fn parse_catalog(body: &str) -> CoreResult<Vec<Product>> {
    let records: Vec<CatalogRecord> = serde_json::from_str(body)?;
    records.into_iter().map(Product::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_text_and_numeric_fields() {
        let body = r#"[
            {"id_producto": 17, "nombre_producto": "Creatina 300g",
             "descripcion": "Monohidratada", "imagen_url": "https://cdn/17.png",
             "precio": "599.90"},
            {"id_producto": "A-2", "nombre_producto": "Shaker", "precio": 120.5}
        ]"#;

        let products = parse_catalog(body).unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, "17");
        assert_eq!(products[0].price_cents, 59990);
        assert_eq!(products[0].image_url, "https://cdn/17.png");
        assert_eq!(products[0].rating, 0.0);
        assert_eq!(products[1].id, "A-2");
        assert_eq!(products[1].price_cents, 12050);
        assert!(products[1].description.is_empty());
    }

    #[test]
    fn test_bad_price_names_the_record() {
        let body = r#"[{"id_producto": 9, "nombre_producto": "Banda", "precio": "gratis"}]"#;

        match parse_catalog(body) {
            Err(CoreError::InvalidRecord { record_id, source }) => {
                assert_eq!(record_id, "9");
                assert_eq!(source.field(), "price");
            }
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_price_rejected() {
        let body = r#"[{"id_producto": 3, "nombre_producto": "Pesa", "precio": "-1.00"}]"#;
        assert!(matches!(
            parse_catalog(body),
            Err(CoreError::InvalidRecord { .. })
        ));
    }

    #[test]
    fn test_malformed_payload() {
        assert!(matches!(
            parse_catalog(r#"{"productos": []}"#),
            Err(CoreError::MalformedCatalog(_))
        ));
        assert!(parse_catalog("[]").unwrap().is_empty());
    }
}
