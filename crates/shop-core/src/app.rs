//! The storefront controller.

use shop_commerce::prelude::*;
use tracing::{debug, info, warn};
use url::Url;

use crate::api::CommerceApi;
use crate::browser::{Browser, Notice};
use crate::catalog::CatalogState;
use crate::StoreError;

/// Everything the rendering layer reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    /// Catalog load state.
    pub catalog: CatalogState,
    /// The shopping cart.
    pub cart: Cart,
    /// Checkout submission state.
    pub checkout: CheckoutState,
    /// Whether the cart panel is shown.
    pub cart_open: bool,
    /// Product shown in the detail view.
    pub selected: Option<PriceId>,
}

/// Storefront controller.
///
/// Owns the single [`AppState`] and applies every shopper action to it.
/// Talks to the commerce API through `A` and to the page through `B`.
///
/// # Example
///
/// ```rust,ignore
/// let mut store = Storefront::new(api, browser);
/// store.resume_from_redirect();
/// store.load_catalog().await;
///
/// if let Some(product) = store.catalog().and_then(|c| c.products().first()).cloned() {
///     store.add_to_cart(&product);
/// }
/// store.checkout().await;
/// ```
#[derive(Debug)]
pub struct Storefront<A, B> {
    api: A,
    browser: B,
    state: AppState,
    resumed: bool,
}

impl<A: CommerceApi, B: Browser> Storefront<A, B> {
    /// Create a controller with an empty cart and a loading catalog.
    pub fn new(api: A, browser: B) -> Self {
        Self {
            api,
            browser,
            state: AppState::default(),
            resumed: false,
        }
    }

    /// Price new carts in the given currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        if self.state.cart.is_empty() {
            self.state.cart = Cart::with_currency(currency);
        }
        self
    }

    /// Current state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The host page.
    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// The commerce API.
    pub fn api(&self) -> &A {
        &self.api
    }

    // === Catalog ===

    /// Mark the catalog as loading.
    pub fn begin_load(&mut self) {
        info!("loading catalog");
        self.state.catalog = CatalogState::Loading;
    }

    /// Record the outcome of a catalog load.
    pub fn finish_load(&mut self, result: Result<Catalog, StoreError>) -> &CatalogState {
        match &result {
            Ok(catalog) => info!(products = catalog.len(), "catalog loaded"),
            Err(err) => info!(error = %err, "catalog load failed"),
        }
        self.state.catalog = CatalogState::from_result(result);
        &self.state.catalog
    }

    /// Fetch the catalog and replace the current one.
    pub async fn load_catalog(&mut self) -> &CatalogState {
        self.begin_load();
        let result = self.api.list_products().await;
        self.finish_load(result)
    }

    pub fn catalog_state(&self) -> &CatalogState {
        &self.state.catalog
    }

    /// The loaded catalog, if ready.
    pub fn catalog(&self) -> Option<&Catalog> {
        self.state.catalog.catalog()
    }

    // === Cart ===

    /// Add one unit of a product and reveal the cart.
    ///
    /// Sold-out products and products without a price id are refused.
    pub fn add_to_cart(&mut self, product: &Product) -> bool {
        if product.price_id.is_blank() {
            info!(product_id = %product.product_id, "refusing product without a price id");
            return false;
        }
        if product.sold_out {
            info!(price_id = %product.price_id, "refusing sold-out product");
            return false;
        }

        let quantity = self.state.cart.add(product);
        self.state.cart_open = true;
        debug!(price_id = %product.price_id, quantity, "added to cart");
        true
    }

    /// Add one unit of a catalog product by price id.
    pub fn add_price(&mut self, price_id: &PriceId) -> bool {
        let product = match self.catalog().and_then(|c| c.get(price_id)) {
            Some(product) => product.clone(),
            None => {
                info!(price_id = %price_id, "price not in catalog");
                return false;
            }
        };
        self.add_to_cart(&product)
    }

    /// Remove a line. Returns whether one was removed.
    pub fn remove_from_cart(&mut self, price_id: &PriceId) -> bool {
        let removed = self.state.cart.remove(price_id);
        if removed {
            debug!(price_id = %price_id, "removed from cart");
        }
        removed
    }

    /// Change a line's quantity; a line that reaches zero is removed.
    pub fn adjust_quantity(&mut self, price_id: &PriceId, delta: i64) -> Option<u32> {
        let quantity = self.state.cart.adjust_quantity(price_id, delta);
        if let Some(quantity) = quantity {
            debug!(price_id = %price_id, delta, quantity, "quantity adjusted");
        }
        quantity
    }

    pub fn cart(&self) -> &Cart {
        &self.state.cart
    }

    /// Totals derived from the current cart.
    pub fn totals(&self) -> Result<CartTotals, CommerceError> {
        self.state.cart.totals()
    }

    pub fn open_cart(&mut self) {
        self.state.cart_open = true;
    }

    pub fn close_cart(&mut self) {
        self.state.cart_open = false;
    }

    pub fn is_cart_open(&self) -> bool {
        self.state.cart_open
    }

    // === Product detail ===

    /// Show a catalog product in the detail view.
    pub fn select_product(&mut self, price_id: &PriceId) -> Option<&Product> {
        let found = self.catalog().and_then(|c| c.get(price_id)).is_some();
        self.state.selected = found.then(|| price_id.clone());
        self.selected_product()
    }

    pub fn clear_selection(&mut self) {
        self.state.selected = None;
    }

    /// Product currently in the detail view.
    pub fn selected_product(&self) -> Option<&Product> {
        let price_id = self.state.selected.as_ref()?;
        self.catalog()?.get(price_id)
    }

    // === Checkout ===

    /// Whether a checkout call is in flight.
    pub fn is_checking_out(&self) -> bool {
        self.state.checkout.is_submitting()
    }

    pub fn checkout_state(&self) -> &CheckoutState {
        &self.state.checkout
    }

    /// Start a checkout.
    ///
    /// Returns the request to send, or `None` when the cart is empty or a
    /// checkout is already in flight. In both cases nothing changes.
    pub fn begin_checkout(&mut self) -> Option<CheckoutRequest> {
        if self.state.cart.is_empty() {
            debug!("checkout with empty cart ignored");
            return None;
        }

        let origin = self.browser.location();
        let request = CheckoutRequest::for_cart(&self.state.cart, &origin)?;

        if let Err(err) = self.state.checkout.begin() {
            warn!(error = %err, "checkout already in progress");
            return None;
        }

        info!(
            lines = request.items.len(),
            item_count = request.item_count(),
            "submitting checkout"
        );
        Some(request)
    }

    /// Record the outcome of a checkout call.
    ///
    /// A session URL sends the page to the hosted checkout; a blank or missing
    /// URL returns to idle quietly. A failure shows a notice and leaves the
    /// cart as it was.
    pub fn finish_checkout(&mut self, result: Result<CheckoutSession, StoreError>) -> &CheckoutState {
        if !self.state.checkout.is_submitting() {
            warn!(state = self.state.checkout.as_str(), "no checkout in flight");
            return &self.state.checkout;
        }

        let page = self.browser.location();
        let redirect = result.and_then(|session| {
            match session.url.filter(|raw| !raw.trim().is_empty()) {
                // Relative addresses resolve against the page, as a browser would.
                Some(raw) => page
                    .join(raw.trim())
                    .map(Some)
                    .map_err(|e| StoreError::Checkout(format!("invalid checkout URL: {}", e))),
                None => Ok(None),
            }
        });

        match redirect {
            Ok(Some(url)) => {
                info!(url = %url, "redirecting to hosted checkout");
                self.browser.navigate(&url);
                self.transition(|state| state.complete(Some(url)));
            }
            Ok(None) => {
                warn!("checkout session returned no URL");
                self.transition(|state| state.complete(None));
            }
            Err(err) => {
                info!(error = %err, "checkout failed");
                self.browser.notify(&Notice::CheckoutFailed(err.checkout_message()));
                self.transition(CheckoutState::fail);
            }
        }
        &self.state.checkout
    }

    /// Submit the cart to the hosted checkout.
    ///
    /// Does nothing for an empty cart or while another checkout is in flight.
    pub async fn checkout(&mut self) -> &CheckoutState {
        if let Some(request) = self.begin_checkout() {
            let result = self.api.create_checkout_session(&request).await;
            return self.finish_checkout(result);
        }
        &self.state.checkout
    }

    fn transition(&mut self, apply: impl FnOnce(&mut CheckoutState) -> Result<(), CommerceError>) {
        if let Err(err) = apply(&mut self.state.checkout) {
            warn!(error = %err, "checkout state unchanged");
        }
    }

    // === Return trip ===

    /// Consume the return-trip signal on the current address.
    ///
    /// Success clears the cart; cancel leaves it. Either way the shopper is
    /// told and the query string is removed from the address. Only the first
    /// call does anything.
    pub fn resume_from_redirect(&mut self) -> Option<ReturnSignal> {
        if self.resumed {
            return None;
        }
        self.resumed = true;

        let location = self.browser.location();
        let signal = ReturnSignal::from_url(&location)?;

        match signal {
            ReturnSignal::Success => {
                info!(lines = self.state.cart.len(), "payment succeeded, clearing cart");
                self.state.cart.clear();
                self.browser.notify(&Notice::PaymentSucceeded);
            }
            ReturnSignal::Canceled => {
                info!("payment canceled");
                self.browser.notify(&Notice::PaymentCanceled);
            }
        }
        self.browser.replace_location(ReturnSignal::strip(&location));
        Some(signal)
    }
}
