//! Storefront controller.
//!
//! Ties the cart engine to the commerce API and to the page it runs in:
//!
//! - **Catalog loading**: a `Loading` / `Ready` / `Failed` state filled from
//!   [`CatalogApi`]
//! - **Cart actions**: add, remove and adjust on the one cart owned by
//!   [`Storefront`]
//! - **Checkout handoff**: the cart goes to [`CheckoutApi`] and the page is
//!   sent to the hosted checkout through [`Browser`]
//! - **Return trip**: the `success` / `canceled` flag on the address is
//!   consumed once
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shop_core::prelude::*;
//!
//! # async fn run() -> Result<(), StoreError> {
//! let config = StoreConfig::load("shop.toml")?;
//! let api = HttpCommerceApi::from_config(&config)?;
//! let browser = MemoryBrowser::new(config.origin()?);
//!
//! let mut store = Storefront::new(api, browser);
//! store.resume_from_redirect();
//! store.load_catalog().await;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod browser;
pub mod config;
pub mod prelude;
mod app;
mod catalog;
mod error;

pub use api::{CatalogApi, CheckoutApi, CommerceApi, HttpCommerceApi};
pub use app::*;
pub use browser::{Browser, MemoryBrowser, Notice};
pub use catalog::CatalogState;
pub use config::StoreConfig;
pub use error::*;
