//! End-to-end storefront flows against an in-memory commerce API.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use shop_core::prelude::*;
use url::Url;

/// Commerce API double that records checkout requests.
struct FakeApi {
    catalog: Result<Vec<Product>, StoreError>,
    session: Result<CheckoutSession, StoreError>,
    catalog_calls: AtomicUsize,
    requests: Mutex<Vec<CheckoutRequest>>,
}

impl FakeApi {
    fn new(products: Vec<Product>) -> Self {
        Self {
            catalog: Ok(products),
            session: Ok(CheckoutSession {
                url: Some("https://pay.example.com/c/cs_test_1".to_string()),
            }),
            catalog_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing_catalog(mut self, err: StoreError) -> Self {
        self.catalog = Err(err);
        self
    }

    fn session(mut self, session: Result<CheckoutSession, StoreError>) -> Self {
        self.session = session;
        self
    }

    fn requests(&self) -> Vec<CheckoutRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogApi for FakeApi {
    async fn list_products(&self) -> Result<Catalog, StoreError> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        self.catalog.clone().map(Catalog::new)
    }
}

#[async_trait]
impl CheckoutApi for FakeApi {
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, StoreError> {
        self.requests.lock().unwrap().push(request.clone());
        self.session.clone()
    }
}

fn product(price_id: &str, cents: i64) -> Product {
    Product::new(
        format!("prod_{}", price_id),
        price_id,
        format!("Item {}", price_id),
        Money::new(cents, Currency::USD),
    )
}

fn products() -> Vec<Product> {
    vec![product("price_a", 1000), product("price_b", 500), product("price_c", 250)]
}

fn storefront(api: FakeApi, at: &str) -> Storefront<FakeApi, MemoryBrowser> {
    Storefront::new(api, MemoryBrowser::new(Url::parse(at).unwrap()))
}

fn id(s: &str) -> PriceId {
    PriceId::new(s)
}

#[tokio::test]
async fn test_catalog_loads_ready() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/");
    assert!(store.catalog_state().is_loading());

    let state = store.load_catalog().await;
    assert_eq!(state.catalog().map(Catalog::len), Some(3));
    assert_eq!(store.api().catalog_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_catalog_failure_is_terminal_until_reload() {
    let api = FakeApi::new(Vec::new())
        .failing_catalog(StoreError::CatalogLoad("HTTP 503: maintenance".into()));
    let mut store = storefront(api, "http://localhost:5173/");

    store.load_catalog().await;
    assert_eq!(store.catalog_state().error(), Some("HTTP 503: maintenance"));
    assert_eq!(store.api().catalog_calls.load(Ordering::SeqCst), 1);

    store.load_catalog().await;
    assert_eq!(store.api().catalog_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_catalog_is_ready() {
    let mut store = storefront(FakeApi::new(Vec::new()), "http://localhost:5173/");
    let state = store.load_catalog().await;
    assert!(state.is_ready());
    assert!(state.catalog().unwrap().is_empty());
}

#[tokio::test]
async fn test_totals_of_two_lines() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/");
    store.load_catalog().await;

    store.add_price(&id("price_a"));
    store.add_price(&id("price_a"));
    store.add_price(&id("price_b"));

    let totals = store.totals().unwrap();
    assert_eq!(totals.subtotal.amount_cents, 2500);
    assert_eq!(totals.item_count, 3);
}

#[tokio::test]
async fn test_checkout_empty_cart_makes_no_call() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/");
    let before = store.state().clone();

    let state = store.checkout().await;
    assert_eq!(state, &CheckoutState::Idle);
    assert!(store.api().requests().is_empty());
    assert_eq!(store.state(), &before);
}

#[tokio::test]
async fn test_checkout_sends_items_in_cart_order() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/shop");
    store.load_catalog().await;

    store.add_price(&id("price_c"));
    store.add_price(&id("price_a"));
    store.add_price(&id("price_b"));
    store.add_price(&id("price_c"));
    store.remove_from_cart(&id("price_a"));

    let state = store.checkout().await.clone();

    let requests = store.api().requests();
    assert_eq!(requests.len(), 1);
    let sent: Vec<(&str, u32)> = requests[0]
        .items
        .iter()
        .map(|i| (i.price_id.as_str(), i.quantity))
        .collect();
    assert_eq!(sent, [("price_c", 2), ("price_b", 1)]);
    assert_eq!(requests[0].success_url.as_str(), "http://localhost:5173/?success=true");
    assert_eq!(requests[0].cancel_url.as_str(), "http://localhost:5173/?canceled=true");

    let hosted = Url::parse("https://pay.example.com/c/cs_test_1").unwrap();
    assert_eq!(state, CheckoutState::Redirected { url: hosted.clone() });
    assert_eq!(store.browser().navigations(), &[hosted]);
}

#[tokio::test]
async fn test_checkout_failure_keeps_cart() {
    let api = FakeApi::new(products()).session(Err(StoreError::Checkout("Card declined".into())));
    let mut store = storefront(api, "http://localhost:5173/");
    store.load_catalog().await;
    store.add_price(&id("price_a"));
    let cart_before = store.cart().clone();

    let state = store.checkout().await;
    assert_eq!(state, &CheckoutState::Idle);
    assert!(!store.is_checking_out());
    assert_eq!(store.cart(), &cart_before);
    assert_eq!(
        store.browser().notices(),
        &[Notice::CheckoutFailed("Card declined".into())]
    );
    assert_eq!(
        store.browser().notices()[0].message(),
        "Checkout failed: Card declined"
    );
}

#[tokio::test]
async fn test_checkout_failure_without_message() {
    let api = FakeApi::new(products()).session(Err(StoreError::Checkout(String::new())));
    let mut store = storefront(api, "http://localhost:5173/");
    store.load_catalog().await;
    store.add_price(&id("price_a"));

    store.checkout().await;
    assert_eq!(
        store.browser().notices()[0].message(),
        "Checkout failed: Unknown error"
    );
}

#[tokio::test]
async fn test_checkout_without_url_stays_on_page() {
    let api = FakeApi::new(products()).session(Ok(CheckoutSession { url: None }));
    let mut store = storefront(api, "http://localhost:5173/");
    store.load_catalog().await;
    store.add_price(&id("price_a"));

    assert_eq!(store.checkout().await, &CheckoutState::Idle);
    assert!(store.browser().navigations().is_empty());
    assert_eq!(store.cart().len(), 1);
}

#[tokio::test]
async fn test_no_second_submission_while_in_flight() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/");
    store.load_catalog().await;
    store.add_price(&id("price_a"));

    let request = store.begin_checkout().unwrap();
    assert!(store.is_checking_out());

    // A second click while the first call is pending.
    assert_eq!(store.checkout().await, &CheckoutState::Submitting);
    assert!(store.api().requests().is_empty());

    let result = store.api().create_checkout_session(&request).await;
    assert!(store.finish_checkout(result).is_redirected());
    assert_eq!(store.api().requests().len(), 1);
}

#[tokio::test]
async fn test_success_return_clears_cart() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/?success=true");
    store.load_catalog().await;
    store.add_price(&id("price_a"));
    store.add_price(&id("price_b"));

    assert_eq!(store.resume_from_redirect(), Some(ReturnSignal::Success));
    assert!(store.cart().is_empty());
    assert_eq!(store.browser().location().as_str(), "http://localhost:5173/");
    assert!(store.browser().navigations().is_empty());
    assert_eq!(store.browser().notices(), &[Notice::PaymentSucceeded]);
}

#[tokio::test]
async fn test_cancel_return_keeps_cart() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/?canceled=true");
    store.load_catalog().await;
    store.add_price(&id("price_a"));
    let cart_before = store.cart().clone();

    assert_eq!(store.resume_from_redirect(), Some(ReturnSignal::Canceled));
    assert_eq!(store.cart(), &cart_before);
    assert_eq!(store.browser().location().as_str(), "http://localhost:5173/");
    assert_eq!(store.browser().notices(), &[Notice::PaymentCanceled]);
}

#[tokio::test]
async fn test_adjust_to_zero_removes_line() {
    let mut store = storefront(FakeApi::new(products()), "http://localhost:5173/");
    store.load_catalog().await;
    store.add_price(&id("price_a"));

    assert_eq!(store.adjust_quantity(&id("price_a"), -1), Some(0));
    assert!(store.cart().is_empty());

    let before = store.cart().clone();
    assert_eq!(store.adjust_quantity(&id("price_zz"), 3), None);
    assert_eq!(store.cart(), &before);
}
