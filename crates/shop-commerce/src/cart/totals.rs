//! Derived cart totals.

use crate::ids::PriceId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals derived from a cart's current lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Sum of quantities.
    pub item_count: u64,
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LineTotal>,
}

impl CartTotals {
    /// Whether there is nothing to pay for.
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}

/// Total for a single cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineTotal {
    /// Price id of the line.
    pub price_id: PriceId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// `unit_price * quantity`.
    pub total: Money,
}
