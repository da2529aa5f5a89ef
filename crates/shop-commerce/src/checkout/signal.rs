//! Return-trip signal from the hosted checkout.
//!
//! The hosted checkout redirects back to the storefront with either
//! `?success=true` or `?canceled=true`. The signal is read once on load and
//! then stripped from the address so a refresh does not replay it.

use serde::{Deserialize, Serialize};
use url::Url;

/// Query parameter set on a successful payment.
pub const SUCCESS_PARAM: &str = "success";

/// Query parameter set on a canceled payment.
pub const CANCELED_PARAM: &str = "canceled";

/// Outcome reported by the hosted checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnSignal {
    /// Payment went through.
    Success,
    /// Shopper backed out of the hosted checkout.
    Canceled,
}

impl ReturnSignal {
    /// Read the signal from a page URL.
    ///
    /// Only the literal value `true` counts. If both flags are present the
    /// success flag wins.
    pub fn from_url(url: &Url) -> Option<Self> {
        let mut success = false;
        let mut canceled = false;
        for (key, value) in url.query_pairs() {
            if value != "true" {
                continue;
            }
            match key.as_ref() {
                SUCCESS_PARAM => success = true,
                CANCELED_PARAM => canceled = true,
                _ => {}
            }
        }

        if success {
            Some(ReturnSignal::Success)
        } else if canceled {
            Some(ReturnSignal::Canceled)
        } else {
            None
        }
    }

    /// Query parameter carrying this signal.
    pub fn param(&self) -> &'static str {
        match self {
            ReturnSignal::Success => SUCCESS_PARAM,
            ReturnSignal::Canceled => CANCELED_PARAM,
        }
    }

    /// URL the hosted checkout should send the shopper back to.
    ///
    /// Points at the origin of `page` with this signal as the only query.
    pub fn return_url(&self, page: &Url) -> Url {
        let mut url = page.clone();
        url.set_path("/");
        url.set_fragment(None);
        url.set_query(Some(&format!("{}=true", self.param())));
        url
    }

    /// The address to show once the signal has been consumed.
    ///
    /// Keeps the path and drops the query string and fragment.
    pub fn strip(url: &Url) -> Url {
        let mut url = url.clone();
        url.set_query(None);
        url.set_fragment(None);
        url
    }
}
