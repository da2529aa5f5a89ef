//! The page the storefront runs in.

use std::fmt;

use url::Url;

/// Blocking notices shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The shopper came back from a completed payment.
    PaymentSucceeded,
    /// The shopper came back from a canceled payment.
    PaymentCanceled,
    /// Creating the checkout session failed.
    CheckoutFailed(String),
}

impl Notice {
    /// Text of the notice.
    pub fn message(&self) -> String {
        match self {
            Notice::PaymentSucceeded => "Payment successful! Thank you for your order.".to_string(),
            Notice::PaymentCanceled => "Payment was canceled.".to_string(),
            Notice::CheckoutFailed(reason) => format!("Checkout failed: {}", reason),
        }
    }

    /// Whether the notice reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, Notice::CheckoutFailed(_))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Host environment of the storefront.
///
/// A browser page, a terminal, or a test double.
pub trait Browser {
    /// Current page address.
    fn location(&self) -> Url;

    /// Leave the page for `url` (full navigation).
    fn navigate(&mut self, url: &Url);

    /// Rewrite the visible address without navigating.
    fn replace_location(&mut self, url: Url);

    /// Show a blocking notice.
    fn notify(&mut self, notice: &Notice);
}

/// In-memory browser that records what happened to it.
#[derive(Debug, Clone)]
pub struct MemoryBrowser {
    location: Url,
    navigations: Vec<Url>,
    notices: Vec<Notice>,
}

impl MemoryBrowser {
    /// Start at the given address.
    pub fn new(location: Url) -> Self {
        Self {
            location,
            navigations: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Full navigations performed, oldest first.
    pub fn navigations(&self) -> &[Url] {
        &self.navigations
    }

    /// Notices shown, oldest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl Browser for MemoryBrowser {
    fn location(&self) -> Url {
        self.location.clone()
    }

    fn navigate(&mut self, url: &Url) {
        self.navigations.push(url.clone());
        self.location = url.clone();
    }

    fn replace_location(&mut self, url: Url) {
        self.location = url;
    }

    fn notify(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}
