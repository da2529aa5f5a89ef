//! Prelude for convenient imports.
//!
//! ```rust,ignore
//! use shop_core::prelude::*;
//! ```

// Domain types
pub use shop_commerce::prelude::*;

// Storefront types
pub use crate::{
    AppState, Browser, CatalogApi, CatalogState, CheckoutApi, CommerceApi, HttpCommerceApi,
    MemoryBrowser, Notice, StoreConfig, StoreError, Storefront,
};
