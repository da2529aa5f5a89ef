//! Commerce API seams and their HTTP implementation.

use async_trait::async_trait;
use serde::Deserialize;
use shop_commerce::prelude::*;
use shop_data::{FetchClient, FetchError};
use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::StoreError;

/// Catalog listing path.
pub const PRODUCTS_PATH: &str = "/v1/products";

/// Cart checkout path.
pub const CART_CHECKOUT_PATH: &str = "/v1/products/cart-checkout";

/// Source of the product catalog.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch every available product.
    async fn list_products(&self) -> Result<Catalog, StoreError>;
}

/// Creator of hosted checkout sessions.
#[async_trait]
pub trait CheckoutApi: Send + Sync {
    /// Create a checkout session for the given items.
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, StoreError>;
}

/// Both halves of the commerce API.
pub trait CommerceApi: CatalogApi + CheckoutApi {}

impl<T: CatalogApi + CheckoutApi> CommerceApi for T {}

/// A product as it appears on the wire.
///
/// Prices arrive as plain numbers whose unit depends on the API; they are
/// turned into [`Money`] by [`ApiProduct::into_product`].
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub product_id: ProductId,
    pub price_id: PriceId,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    pub price: f64,
    #[serde(default)]
    pub inventory: Option<u64>,
    #[serde(default)]
    pub sold_out: Option<bool>,
}

impl ApiProduct {
    /// Convert into a domain product.
    pub fn into_product(
        self,
        units: PriceUnits,
        currency: Currency,
    ) -> Result<Product, CommerceError> {
        let price = Money::from_api_price(self.price, units, currency)?;
        Ok(Product {
            product_id: self.product_id,
            price_id: self.price_id,
            name: self.name,
            display_name: self.display_name,
            description: self.description,
            image_url: self.image_url,
            features: self.features.unwrap_or_default(),
            price,
            inventory: self.inventory,
            sold_out: self.sold_out.unwrap_or(false),
        })
    }
}

/// Body of the catalog listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductList {
    #[serde(default)]
    pub products: Option<Vec<ApiProduct>>,
}

impl ProductList {
    /// Convert into a catalog. A missing product list is an empty catalog.
    pub fn into_catalog(self, units: PriceUnits, currency: Currency) -> Result<Catalog, CommerceError> {
        self.products
            .unwrap_or_default()
            .into_iter()
            .map(|p| p.into_product(units, currency))
            .collect::<Result<Vec<_>, _>>()
            .map(Catalog::new)
    }
}

/// Commerce API over HTTP, authenticated with a publishable key.
#[derive(Debug, Clone)]
pub struct HttpCommerceApi {
    client: FetchClient,
    publishable_key: String,
    price_units: PriceUnits,
    currency: Currency,
}

impl HttpCommerceApi {
    /// Create a client from store configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let base_url = config.api.base_url()?;
        let client = FetchClient::with_timeouts(config.api.timeouts())
            .map_err(|e| StoreError::Config(e.to_string()))?
            .with_base_url(base_url.as_str())
            .with_default_header("Accept", "application/json");

        Ok(Self {
            client,
            publishable_key: config.api.publishable_key()?,
            price_units: config.api.price_units,
            currency: config.api.currency()?,
        })
    }

    async fn fetch_products(&self) -> Result<ProductList, FetchError> {
        self.client
            .get(PRODUCTS_PATH)
            .bearer_auth(&self.publishable_key)
            .send()
            .await?
            .error_for_status()?
            .json()
    }

    async fn post_checkout(&self, request: &CheckoutRequest) -> Result<CheckoutSession, FetchError> {
        self.client
            .post(CART_CHECKOUT_PATH)
            .bearer_auth(&self.publishable_key)
            .json(request)?
            .send()
            .await?
            .error_for_status()?
            .json()
    }
}

fn decode_catalog(list: ProductList, units: PriceUnits, currency: Currency) -> Result<Catalog, StoreError> {
    list.into_catalog(units, currency)
        .map_err(|e| StoreError::CatalogLoad(e.to_string()))
}

#[async_trait]
impl CatalogApi for HttpCommerceApi {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Catalog, StoreError> {
        let list = self.fetch_products().await.map_err(StoreError::catalog)?;
        let catalog = decode_catalog(list, self.price_units, self.currency)?;
        debug!(products = catalog.len(), "catalog decoded");
        Ok(catalog)
    }
}

#[async_trait]
impl CheckoutApi for HttpCommerceApi {
    #[instrument(skip_all, fields(items = request.items.len()))]
    async fn create_checkout_session(
        &self,
        request: &CheckoutRequest,
    ) -> Result<CheckoutSession, StoreError> {
        self.post_checkout(request).await.map_err(StoreError::checkout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str, units: PriceUnits) -> Result<Catalog, CommerceError> {
        serde_json::from_str::<ProductList>(json)
            .unwrap()
            .into_catalog(units, Currency::USD)
    }

    #[test]
    fn test_decode_full_product() {
        let catalog = decode(
            r#"{"products": [{
                "productId": "prod_1",
                "priceId": "price_1",
                "name": "Mug",
                "displayName": "Stoneware Mug",
                "description": "Holds coffee",
                "imageUrl": "https://cdn.example.com/mug.png",
                "features": ["Dishwasher safe"],
                "price": 12.5,
                "inventory": 3,
                "soldOut": false
            }]}"#,
            PriceUnits::Major,
        )
        .unwrap();

        let mug = catalog.get(&PriceId::new("price_1")).unwrap();
        assert_eq!(mug.title(), "Stoneware Mug");
        assert_eq!(mug.price.amount_cents, 1250);
        assert_eq!(mug.features, vec!["Dishwasher safe".to_string()]);
        assert_eq!(mug.availability(), Availability::InStock(3));
    }

    #[test]
    fn test_decode_minimal_product() {
        let catalog = decode(
            r#"{"products": [{"productId": "p", "priceId": "pr", "name": "Tee", "price": 2000, "inventory": null}]}"#,
            PriceUnits::Minor,
        )
        .unwrap();

        let tee = &catalog.products()[0];
        assert_eq!(tee.price.amount_cents, 2000);
        assert!(tee.features.is_empty());
        assert!(!tee.sold_out);
        assert_eq!(tee.availability(), Availability::Untracked);
    }

    #[test]
    fn test_missing_products_is_empty() {
        assert!(decode("{}", PriceUnits::Major).unwrap().is_empty());
        assert!(decode(r#"{"products": null}"#, PriceUnits::Major)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_decode_keeps_api_order() {
        let catalog = decode(
            r#"{"products": [
                {"productId": "a", "priceId": "pa", "name": "A", "price": 1},
                {"productId": "b", "priceId": "pb", "name": "B", "price": 2}
            ]}"#,
            PriceUnits::Major,
        )
        .unwrap();
        let ids: Vec<_> = catalog.iter().map(|p| p.price_id.as_str()).collect();
        assert_eq!(ids, ["pa", "pb"]);
    }

    #[test]
    fn test_unrepresentable_price_is_catalog_error() {
        let list: ProductList = serde_json::from_str(
            r#"{"products": [{"productId": "p", "priceId": "pr", "name": "Yacht", "price": 1e300}]}"#,
        )
        .unwrap();

        let err = decode_catalog(list, PriceUnits::Major, Currency::USD).unwrap_err();
        assert!(matches!(err, StoreError::CatalogLoad(_)));
    }

    #[test]
    fn test_session_without_url() {
        let session: CheckoutSession = serde_json::from_str("{}").unwrap();
        assert!(session.url.is_none());
    }

    #[test]
    fn test_from_config_rejects_bad_base_url() {
        let mut config = StoreConfig::default();
        config.api.base_url = "not a url".into();
        config.api.publishable_key = Some("pk_test_ok".into());

        let err = HttpCommerceApi::from_config(&config).unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }
}
