//! Product type.

use crate::error::CatalogError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Currency every catalog price is quoted in.
pub const CATALOG_CURRENCY: Currency = Currency::USD;

/// Multiplier turning a deal fraction into a displayed percentage.
pub const PERCENT_SCALE: f64 = 100.0;

/// Number of name characters shown on a grid card.
pub const CARD_NAME_CHARS: usize = 9;

/// An art-supply product, as published by the catalog source.
///
/// Products are immutable once fetched; favorites keep full snapshots of
/// them. Field names on the wire are camelCase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub art_name: String,
    /// Manufacturer; also the brand filter vocabulary.
    pub brand: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// List price in [`CATALOG_CURRENCY`].
    pub price: f64,
    /// Fraction taken off the list price, in `[0, 1)`.
    #[serde(default)]
    pub limited_time_deal: f64,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Whether the product can be used on glass.
    #[serde(default)]
    pub glass_surface: bool,
}

impl Product {
    /// Create a product with no deal, image or description.
    pub fn new(
        id: impl Into<ProductId>,
        art_name: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            art_name: art_name.into(),
            brand: brand.into(),
            image: String::new(),
            price,
            limited_time_deal: 0.0,
            description: String::new(),
            glass_surface: false,
        }
    }

    /// Set the limited-time deal fraction.
    pub fn with_deal(mut self, deal: f64) -> Self {
        self.limited_time_deal = deal;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// List price as money.
    pub fn list_price(&self) -> Money {
        Money::from_decimal(self.price, CATALOG_CURRENCY)
    }

    /// Price after the limited-time deal. Always derived, never stored.
    ///
    /// The deal is taken off the decimal price and the result is rounded
    /// once, to the cent.
    pub fn discounted_price(&self) -> Money {
        let discounted = self.price - self.price * self.limited_time_deal;
        Money::from_decimal(discounted, CATALOG_CURRENCY)
    }

    /// Check if the product currently has a deal.
    pub fn is_on_sale(&self) -> bool {
        self.limited_time_deal > 0.0
    }

    /// Deal as a whole-number percentage (e.g. `0.15` becomes `15`).
    pub fn deal_percent(&self) -> u32 {
        (self.limited_time_deal * PERCENT_SCALE).round() as u32
    }

    /// Name truncated for grid cards.
    pub fn short_name(&self) -> String {
        self.art_name.chars().take(CARD_NAME_CHARS).collect()
    }

    /// Reject records the rest of the system cannot reason about.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CatalogError::Validation("product id is empty".to_string()));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(CatalogError::Validation(format!(
                "product {} has invalid price {}",
                self.id, self.price
            )));
        }
        if !(0.0..1.0).contains(&self.limited_time_deal) {
            return Err(CatalogError::Validation(format!(
                "product {} has deal {} outside [0, 1)",
                self.id, self.limited_time_deal
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let product = Product::new("1", "Oil Pastel Set", "Pentel", 12.5);
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.brand, "Pentel");
        assert!(!product.is_on_sale());
        assert!(product.validate().is_ok());
    }

    #[test]
    fn test_discounted_price() {
        let product = Product::new("1", "Gouache", "Winsor", 20.0).with_deal(0.25);
        assert!(product.is_on_sale());
        assert_eq!(product.deal_percent(), 25);
        assert_eq!(product.discounted_price().amount_cents, 1500);
        assert_eq!(product.list_price().amount_cents, 2000);
    }

    #[test]
    fn test_discounted_price_rounds_once() {
        let product = Product::new("1", "Nib", "Zebra", 0.125).with_deal(0.5);
        assert_eq!(product.discounted_price().amount_cents, 6);

        let product = Product::new("2", "Sketchbook", "Canson", 12.99).with_deal(0.15);
        assert_eq!(product.discounted_price().amount_cents, 1104);
        assert_eq!(product.discounted_price().to_string(), "$11.04");
    }

    #[test]
    fn test_short_name() {
        let product = Product::new("1", "Watercolor Pencils", "Faber", 3.0);
        assert_eq!(product.short_name(), "Watercolo");
        assert_eq!(product.short_name().chars().count(), CARD_NAME_CHARS);
    }

    #[test]
    fn test_validate_rejects_bad_deal() {
        let product = Product::new("1", "Pen", "A", 1.0).with_deal(1.0);
        assert!(matches!(
            product.validate(),
            Err(CatalogError::Validation(_))
        ));

        let product = Product::new("1", "Pen", "A", -1.0);
        assert!(product.validate().is_err());
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": "3",
            "artName": "Acrylic Paint",
            "brand": "Arteza",
            "image": "https://example.com/a.png",
            "price": 35.5,
            "limitedTimeDeal": 0.1,
            "description": "Twelve colours",
            "glassSurface": true,
            "createdAt": "ignored"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.art_name, "Acrylic Paint");
        assert!(product.glass_surface);
        assert!((product.limited_time_deal - 0.1).abs() < f64::EPSILON);

        let out = serde_json::to_value(&product).unwrap();
        assert_eq!(out["artName"], "Acrylic Paint");
        assert_eq!(out["limitedTimeDeal"], 0.1);
    }
}
