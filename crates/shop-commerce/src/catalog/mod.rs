//! Product catalog module.
//!
//! The catalog is an immutable snapshot of what the commerce API listed on the
//! last load. It is replaced wholesale on reload, never merged.

mod inventory;
mod product;

pub use inventory::Availability;
pub use product::Product;

use crate::ids::PriceId;
use serde::{Deserialize, Serialize};

/// Products in the order the API returned them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Wrap a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Find a product by price id.
    pub fn get(&self, price_id: &PriceId) -> Option<&Product> {
        self.products.iter().find(|p| &p.price_id == price_id)
    }

    /// All products, in API order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Iterate over products.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the API listed no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
