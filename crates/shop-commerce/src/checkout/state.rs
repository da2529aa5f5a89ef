//! Checkout submission state machine.
//!
//! ```text
//! Idle ──begin──▶ Submitting ──complete(Some(url))──▶ Redirected
//!   ▲                 │
//!   └─complete(None)──┤
//!   └──────fail───────┘
//! ```

use crate::CommerceError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Where a checkout submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum CheckoutState {
    /// Nothing in flight; the checkout control is enabled.
    #[default]
    Idle,
    /// A checkout-session call is in flight.
    Submitting,
    /// The page is navigating to the hosted checkout. Terminal.
    Redirected {
        /// Hosted checkout URL.
        url: Url,
    },
}

impl CheckoutState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutState::Idle => "idle",
            CheckoutState::Submitting => "submitting",
            CheckoutState::Redirected { .. } => "redirected",
        }
    }

    /// Whether a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        matches!(self, CheckoutState::Submitting)
    }

    /// Whether control has left for the hosted checkout.
    pub fn is_redirected(&self) -> bool {
        matches!(self, CheckoutState::Redirected { .. })
    }

    /// Enter `Submitting`. Only allowed from `Idle`.
    pub fn begin(&mut self) -> Result<(), CommerceError> {
        match self {
            CheckoutState::Idle => {
                *self = CheckoutState::Submitting;
                Ok(())
            }
            other => Err(transition_error(other, "submitting")),
        }
    }

    /// Finish a submission the API accepted.
    ///
    /// With a redirect URL the state becomes `Redirected`; without one it goes
    /// back to `Idle`.
    pub fn complete(&mut self, redirect: Option<Url>) -> Result<(), CommerceError> {
        if !self.is_submitting() {
            let to = if redirect.is_some() { "redirected" } else { "idle" };
            return Err(transition_error(self, to));
        }
        *self = match redirect {
            Some(url) => CheckoutState::Redirected { url },
            None => CheckoutState::Idle,
        };
        Ok(())
    }

    /// Finish a submission that failed; back to `Idle`.
    pub fn fail(&mut self) -> Result<(), CommerceError> {
        if !self.is_submitting() {
            return Err(transition_error(self, "idle"));
        }
        *self = CheckoutState::Idle;
        Ok(())
    }
}

fn transition_error(from: &CheckoutState, to: &str) -> CommerceError {
    CommerceError::InvalidCheckoutTransition {
        from: from.as_str().to_string(),
        to: to.to_string(),
    }
}
