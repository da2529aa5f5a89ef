//! Shopping cart module.
//!
//! Contains the cart reducer and the totals derived from it.

mod cart;
mod totals;

pub use cart::{Cart, CartLine};
pub use totals::{CartTotals, LineTotal};
