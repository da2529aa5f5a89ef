//! Checkout module.
//!
//! Contains the normalized checkout request, the submission state machine and
//! the return-trip signal the hosted checkout sends back.

mod session;
mod signal;
mod state;

pub use session::{CheckoutItem, CheckoutRequest, CheckoutSession};
pub use signal::{ReturnSignal, CANCELED_PARAM, SUCCESS_PARAM};
pub use state::CheckoutState;
