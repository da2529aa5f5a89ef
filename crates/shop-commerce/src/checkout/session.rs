//! Checkout-session request and response types.

use crate::cart::Cart;
use crate::checkout::ReturnSignal;
use crate::ids::PriceId;
use serde::{Deserialize, Serialize};
use url::Url;

/// One `{priceId, quantity}` pair sent to the checkout API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutItem {
    /// Price being bought.
    pub price_id: PriceId,
    /// Quantity, at least one.
    pub quantity: u32,
}

/// Body of a cart checkout call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    /// Items in cart order.
    pub items: Vec<CheckoutItem>,
    /// Where the hosted checkout sends the shopper after paying.
    pub success_url: Url,
    /// Where the hosted checkout sends the shopper after canceling.
    pub cancel_url: Url,
}

impl CheckoutRequest {
    /// Build the request for a cart, returning to `origin`.
    ///
    /// Returns `None` for an empty cart.
    pub fn for_cart(cart: &Cart, origin: &Url) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        Some(Self {
            items: cart.checkout_items(),
            success_url: ReturnSignal::Success.return_url(origin),
            cancel_url: ReturnSignal::Canceled.return_url(origin),
        })
    }

    /// Sum of quantities in the request.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }
}

/// Response of a cart checkout call.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutSession {
    /// Hosted checkout page to redirect to, when the API returned one.
    #[serde(default)]
    pub url: Option<String>,
}
