//! Error types for the storefront controller.

use shop_data::FetchError;
use thiserror::Error;

/// Fallback shown when a catalog load fails without any text.
pub const CATALOG_LOAD_FALLBACK: &str = "Failed to load products";

/// Fallback shown when a checkout fails without any text.
pub const CHECKOUT_FALLBACK: &str = "Unknown error";

/// Errors that can occur in the storefront.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The product list could not be loaded.
    #[error("Catalog load failed: {0}")]
    CatalogLoad(String),

    /// The checkout session could not be created.
    #[error("Checkout failed: {0}")]
    Checkout(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Wrap a fetch failure from the catalog endpoint.
    pub fn catalog(err: FetchError) -> Self {
        StoreError::CatalogLoad(err.user_message())
    }

    /// Wrap a fetch failure from the checkout endpoint.
    pub fn checkout(err: FetchError) -> Self {
        StoreError::Checkout(err.user_message())
    }

    /// The message carried by the error, without its kind prefix.
    pub fn message(&self) -> &str {
        match self {
            StoreError::CatalogLoad(msg) | StoreError::Checkout(msg) | StoreError::Config(msg) => {
                msg
            }
        }
    }

    /// Text for the catalog's failed state.
    pub fn catalog_message(&self) -> String {
        non_blank_or(self.message(), CATALOG_LOAD_FALLBACK)
    }

    /// Text for the checkout failure notice.
    pub fn checkout_message(&self) -> String {
        non_blank_or(self.message(), CHECKOUT_FALLBACK)
    }
}

fn non_blank_or(message: &str, fallback: &str) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for StoreError {
    fn from(err: toml::ser::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}

impl From<url::ParseError> for StoreError {
    fn from(err: url::ParseError) -> Self {
        StoreError::Config(format!("invalid URL: {}", err))
    }
}
