//! Stock availability.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock availability derived from the API's nullable inventory count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    /// Inventory is not tracked for this product.
    Untracked,
    /// Tracked and in stock.
    InStock(u64),
    /// Tracked and at zero.
    OutOfStock,
}

impl Availability {
    /// Build from a nullable count.
    pub fn from_count(count: Option<u64>) -> Self {
        match count {
            None => Availability::Untracked,
            Some(0) => Availability::OutOfStock,
            Some(n) => Availability::InStock(n),
        }
    }

    /// Whether inventory is tracked at all.
    pub fn is_tracked(&self) -> bool {
        !matches!(self, Availability::Untracked)
    }

    /// Short label for listings, `None` when untracked.
    pub fn stock_label(&self) -> Option<String> {
        match self {
            Availability::Untracked => None,
            Availability::InStock(n) => Some(format!("{n} in stock")),
            Availability::OutOfStock => Some("0 in stock".to_string()),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Untracked => f.write_str("available"),
            Availability::InStock(n) => write!(f, "{n} available"),
            Availability::OutOfStock => f.write_str("Out of stock"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Availability::Untracked.stock_label(), None);
        assert_eq!(Availability::InStock(4).stock_label().as_deref(), Some("4 in stock"));
        assert_eq!(Availability::OutOfStock.to_string(), "Out of stock");
        assert_eq!(Availability::InStock(2).to_string(), "2 available");
    }

    #[test]
    fn test_tracked() {
        assert!(!Availability::Untracked.is_tracked());
        assert!(Availability::OutOfStock.is_tracked());
    }
}
