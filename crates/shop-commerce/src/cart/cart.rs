//! Cart and cart line types.

use crate::cart::{CartTotals, LineTotal};
use crate::catalog::Product;
use crate::checkout::CheckoutItem;
use crate::error::CommerceError;
use crate::ids::PriceId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Lines keep insertion order. There is at most one line per price id and
/// every line has a quantity of at least one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cart in the given currency.
    pub fn with_currency(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// If a line with the same price id exists its quantity goes up by one and
    /// its product snapshot is replaced with `product`; the line keeps its
    /// position. Otherwise a new line with quantity one is appended.
    ///
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> u32 {
        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|line| line.product.price_id == product.price_id)
        {
            existing.quantity = existing.quantity.saturating_add(1);
            existing.product = product.clone();
            return existing.quantity;
        }

        self.lines.push(CartLine::new(product.clone()));
        1
    }

    /// Remove the line for a price id.
    ///
    /// Returns whether a line was removed.
    pub fn remove(&mut self, price_id: &PriceId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|line| &line.product.price_id != price_id);
        self.lines.len() < len_before
    }

    /// Change a line's quantity by `delta`.
    ///
    /// The result is clamped at zero and a line that reaches zero is removed.
    /// Returns the new quantity (zero meaning removed), or `None` if there is
    /// no line for `price_id`.
    pub fn adjust_quantity(&mut self, price_id: &PriceId, delta: i64) -> Option<u32> {
        let index = self
            .lines
            .iter()
            .position(|line| &line.product.price_id == price_id)?;

        let current = i64::from(self.lines[index].quantity);
        let next = current.saturating_add(delta).clamp(0, i64::from(u32::MAX)) as u32;

        if next == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = next;
        }
        Some(next)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a price id.
    pub fn get(&self, price_id: &PriceId) -> Option<&CartLine> {
        self.lines.iter().find(|line| &line.product.price_id == price_id)
    }

    /// Cart currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Compute totals from the current lines.
    ///
    /// Nothing is cached; every call derives from the lines as they are now.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                line.total().map(|total| LineTotal {
                    price_id: line.product.price_id.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    total,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(line) = lines.iter().find(|l| l.total.currency != self.currency) {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line.total.currency.code().to_string(),
            });
        }

        let subtotal = Money::try_sum(lines.iter().map(|l| &l.total), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartTotals {
            subtotal,
            item_count: self.item_count(),
            lines,
        })
    }

    /// Normalized `{price id, quantity}` pairs for a checkout request.
    ///
    /// Carries no product metadata and keeps cart order.
    pub fn checkout_items(&self) -> Vec<CheckoutItem> {
        self.lines
            .iter()
            .map(|line| CheckoutItem {
                price_id: line.product.price_id.clone(),
                quantity: line.quantity,
            })
            .collect()
    }
}

/// One product/price in the cart with its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Latest product snapshot added for this price id.
    pub product: Product,
    /// Quantity, always at least one.
    pub quantity: u32,
}

impl CartLine {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Price id of this line.
    pub fn price_id(&self) -> &PriceId {
        &self.product.price_id
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(i64::from(self.quantity))
            .ok_or(CommerceError::Overflow)
    }
}
