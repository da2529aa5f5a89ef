//! Catalog loading state.

use shop_commerce::catalog::Catalog;

use crate::StoreError;

/// Where the catalog load stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// The product list is being fetched.
    #[default]
    Loading,
    /// Products are available. The catalog may be empty.
    Ready(Catalog),
    /// The load failed. Stays failed until reloaded.
    Failed(String),
}

impl CatalogState {
    /// Build the state a finished load ends in.
    pub fn from_result(result: Result<Catalog, StoreError>) -> Self {
        match result {
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(err) => CatalogState::Failed(err.catalog_message()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }

    /// The loaded catalog, if ready.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// The failure message, if failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_commerce::prelude::*;

    #[test]
    fn test_starts_loading() {
        let state = CatalogState::default();
        assert!(state.is_loading());
        assert!(state.catalog().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_ready_from_ok() {
        let product = Product::new("p", "price_1", "Mug", Money::new(1200, Currency::USD));
        let state = CatalogState::from_result(Ok(Catalog::new(vec![product])));
        assert!(state.is_ready());
        assert_eq!(state.catalog().map(Catalog::len), Some(1));
    }

    #[test]
    fn test_failed_keeps_message() {
        let state = CatalogState::from_result(Err(StoreError::CatalogLoad("HTTP 503: down".into())));
        assert_eq!(state.error(), Some("HTTP 503: down"));
    }

    #[test]
    fn test_failed_without_text_uses_fallback() {
        let state = CatalogState::from_result(Err(StoreError::CatalogLoad(String::new())));
        assert_eq!(state, CatalogState::Failed("Failed to load products".into()));
    }
}
