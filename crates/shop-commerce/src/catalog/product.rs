//! Product type.

use crate::catalog::Availability;
use crate::ids::{PriceId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable product as listed by the commerce API.
///
/// Each product surfaces exactly one price. The price id, not the product id,
/// identifies what is being bought.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog product identifier.
    pub product_id: ProductId,
    /// Price identifier (unit of purchase).
    pub price_id: PriceId,
    /// Product name.
    pub name: String,
    /// Marketing name shown instead of `name` when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Long description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Product image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Feature bullet points.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub features: Vec<String>,
    /// Unit price.
    pub price: Money,
    /// Stock count, `None` when inventory is not tracked.
    #[serde(default)]
    pub inventory: Option<u64>,
    /// Whether the product is sold out.
    #[serde(default)]
    pub sold_out: bool,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(
        product_id: impl Into<ProductId>,
        price_id: impl Into<PriceId>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            price_id: price_id.into(),
            name: name.into(),
            display_name: None,
            description: None,
            image_url: None,
            features: Vec::new(),
            price,
            inventory: None,
            sold_out: false,
        }
    }

    /// Name to show to shoppers.
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.name)
    }

    /// Whether the product can be added to the cart.
    pub fn is_purchasable(&self) -> bool {
        !self.sold_out && !self.price_id.is_blank()
    }

    /// Stock availability.
    pub fn availability(&self) -> Availability {
        Availability::from_count(self.inventory)
    }

    /// Set the display name.
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the tracked stock count.
    pub fn with_inventory(mut self, count: u64) -> Self {
        self.inventory = Some(count);
        self
    }

    /// Mark the product as sold out.
    pub fn sold_out(mut self) -> Self {
        self.sold_out = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn mug() -> Product {
        Product::new("prod_mug", "price_mug", "Mug", Money::new(1200, Currency::USD))
    }

    #[test]
    fn test_title_prefers_display_name() {
        assert_eq!(mug().title(), "Mug");
        assert_eq!(mug().with_display_name("Coffee Mug").title(), "Coffee Mug");
        assert_eq!(mug().with_display_name("").title(), "Mug");
    }

    #[test]
    fn test_purchasable() {
        assert!(mug().is_purchasable());
        assert!(!mug().sold_out().is_purchasable());

        let mut blank = mug();
        blank.price_id = PriceId::new("");
        assert!(!blank.is_purchasable());
    }

    #[test]
    fn test_availability() {
        assert_eq!(mug().availability(), Availability::Untracked);
        assert_eq!(mug().with_inventory(3).availability(), Availability::InStock(3));
        assert_eq!(mug().with_inventory(0).availability(), Availability::OutOfStock);
    }
}
