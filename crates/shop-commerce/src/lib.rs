//! Catalog, cart and checkout domain types for the storefront.
//!
//! This crate holds the client-side commerce logic. Everything in here is
//! synchronous and free of I/O:
//!
//! - **Catalog**: products as returned by the hosted commerce API
//! - **Cart**: line items merged by price id, derived totals
//! - **Checkout**: the normalized checkout request, the submission state
//!   machine and the return-trip signal
//!
//! # Example
//!
//! ```rust
//! use shop_commerce::prelude::*;
//!
//! let mug = Product::new("prod_mug", "price_mug", "Mug", Money::new(1200, Currency::USD));
//!
//! let mut cart = Cart::new();
//! cart.add(&mug);
//! cart.add(&mug);
//!
//! let totals = cart.totals().unwrap();
//! assert_eq!(totals.item_count, 2);
//! assert_eq!(totals.subtotal.display(), "$24.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money, PriceUnits};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money, PriceUnits};

    // Catalog
    pub use crate::catalog::{Availability, Catalog, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals, LineTotal};

    // Checkout
    pub use crate::checkout::{
        CheckoutItem, CheckoutRequest, CheckoutSession, CheckoutState, ReturnSignal,
    };
}
