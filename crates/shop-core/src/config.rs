//! Storefront configuration.
//!
//! Read from a `shop.toml` file:
//!
//! ```toml
//! [store]
//! name = "Your Store"
//!
//! [api]
//! base_url = "https://api.example.com"
//! price_units = "major"
//! currency = "USD"
//!
//! [page]
//! origin = "http://localhost:5173"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use shop_commerce::{Currency, PriceUnits};
use shop_data::TimeoutConfig;
use url::Url;

use crate::StoreError;

/// Environment variable holding the publishable key.
pub const PUBLISHABLE_KEY_ENV: &str = "SHOP_PUBLISHABLE_KEY";

/// Key baked in at build time, if any.
const BUILD_PUBLISHABLE_KEY: Option<&str> = option_env!("SHOP_PUBLISHABLE_KEY");

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Branding shown by the rendering layer.
    #[serde(default)]
    pub store: StoreBranding,

    /// Commerce API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Page settings.
    #[serde(default)]
    pub page: PageConfig,
}

impl StoreConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse config from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, StoreError> {
        Ok(toml::from_str(content)?)
    }

    /// Render config as TOML text.
    pub fn to_toml_string(&self) -> Result<String, StoreError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save config to a TOML file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), StoreError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_toml_string()?).map_err(|e| {
            StoreError::Config(format!("failed to write {}: {}", path.display(), e))
        })
    }

    /// The page origin, parsed.
    pub fn origin(&self) -> Result<Url, StoreError> {
        Ok(Url::parse(&self.page.origin)?)
    }

    /// Check the config for problems. An empty list means it is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.store.name.trim().is_empty() {
            problems.push("store.name is empty".to_string());
        }
        if let Err(e) = self.api.base_url() {
            problems.push(format!("api.base_url: {}", e.message()));
        }
        if Currency::from_code(&self.api.currency).is_none() {
            problems.push(format!("api.currency: unsupported code {:?}", self.api.currency));
        }
        if let Err(e) = self.origin() {
            problems.push(format!("page.origin: {}", e.message()));
        }
        if let Err(e) = self.api.publishable_key() {
            problems.push(format!("api.publishable_key: {}", e.message()));
        }
        if self.api.timeout_secs == Some(0) {
            problems.push("api.timeout_secs must be greater than zero".to_string());
        }

        problems
    }
}

/// Store branding content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreBranding {
    /// Store name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// One-line tagline.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Longer description for the landing section.
    #[serde(default = "default_description")]
    pub description: String,

    /// Logo path or URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

fn default_store_name() -> String {
    "Your Store".to_string()
}

fn default_tagline() -> String {
    "Quality products, simple shopping".to_string()
}

fn default_description() -> String {
    "Curated items for people who appreciate good things.".to_string()
}

impl Default for StoreBranding {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
            description: default_description(),
            logo: None,
        }
    }
}

/// Commerce API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Publishable key. The environment takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publishable_key: Option<String>,

    /// Units the API reports prices in.
    #[serde(default)]
    pub price_units: PriceUnits,

    /// ISO currency code of catalog prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Total request timeout. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "https://api.example.com".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            publishable_key: None,
            price_units: PriceUnits::default(),
            currency: default_currency(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// The base URL, parsed.
    pub fn base_url(&self) -> Result<Url, StoreError> {
        Ok(Url::parse(&self.base_url)?)
    }

    /// The configured currency.
    pub fn currency(&self) -> Result<Currency, StoreError> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| StoreError::Config(format!("unsupported currency {:?}", self.currency)))
    }

    /// Request timeouts.
    pub fn timeouts(&self) -> TimeoutConfig {
        TimeoutConfig::from_secs(self.timeout_secs)
    }

    /// Resolve the publishable key: environment, then file, then build time.
    pub fn publishable_key(&self) -> Result<String, StoreError> {
        resolve_publishable_key(
            std::env::var(PUBLISHABLE_KEY_ENV).ok(),
            self.publishable_key.as_deref(),
            BUILD_PUBLISHABLE_KEY,
        )
    }
}

fn resolve_publishable_key(
    env: Option<String>,
    file: Option<&str>,
    baked: Option<&str>,
) -> Result<String, StoreError> {
    let key = env
        .filter(|k| !k.trim().is_empty())
        .or_else(|| file.filter(|k| !k.trim().is_empty()).map(str::to_string))
        .or_else(|| baked.filter(|k| !k.trim().is_empty()).map(str::to_string))
        .ok_or_else(|| {
            StoreError::Config(format!(
                "no publishable key; set {} or api.publishable_key",
                PUBLISHABLE_KEY_ENV
            ))
        })?;

    let key = key.trim().to_string();
    if key.starts_with("sk_") {
        return Err(StoreError::Config(
            "secret keys are not accepted; use a publishable key".to_string(),
        ));
    }
    Ok(key)
}

/// Page settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Origin the hosted checkout returns to.
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_origin() -> String {
    "http://localhost:5173".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.store.name, "Your Store");
        assert_eq!(config.api.price_units, PriceUnits::Major);
        assert_eq!(config.api.currency().unwrap(), Currency::USD);
        assert!(!config.api.timeouts().is_bounded());
        assert_eq!(config.origin().unwrap().as_str(), "http://localhost:5173/");
    }

    #[test]
    fn test_parse_partial_file() {
        let config = StoreConfig::from_toml_str(
            r#"
            [store]
            name = "Kiln & Co"

            [api]
            base_url = "https://commerce.test"
            price_units = "minor"
            currency = "EUR"
            timeout_secs = 15
            "#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Kiln & Co");
        assert_eq!(config.store.tagline, "Quality products, simple shopping");
        assert_eq!(config.api.price_units, PriceUnits::Minor);
        assert_eq!(config.api.currency().unwrap(), Currency::EUR);
        assert!(config.api.timeouts().is_bounded());
        assert_eq!(config.page, PageConfig::default());
    }

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut config = StoreConfig::default();
        config.store.logo = Some("/logo.png".into());
        config.api.timeout_secs = Some(30);

        let text = config.to_toml_string().unwrap();
        assert_eq!(StoreConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = StoreConfig::from_toml_str("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_unknown_currency() {
        let mut config = StoreConfig::default();
        config.api.currency = "XYZ".into();
        assert!(config.api.currency().is_err());
        assert!(config
            .validate()
            .iter()
            .any(|p| p.starts_with("api.currency")));
    }

    #[test]
    fn test_key_precedence() {
        let key = resolve_publishable_key(Some("pk_env".into()), Some("pk_file"), Some("pk_build"));
        assert_eq!(key.unwrap(), "pk_env");

        let key = resolve_publishable_key(None, Some("pk_file"), Some("pk_build"));
        assert_eq!(key.unwrap(), "pk_file");

        let key = resolve_publishable_key(Some("  ".into()), None, Some("pk_build"));
        assert_eq!(key.unwrap(), "pk_build");
    }

    #[test]
    fn test_missing_key() {
        let err = resolve_publishable_key(None, None, None).unwrap_err();
        assert!(err.message().contains(PUBLISHABLE_KEY_ENV));
    }

    #[test]
    fn test_secret_key_rejected() {
        let err = resolve_publishable_key(None, Some("sk_live_abc"), None).unwrap_err();
        assert!(matches!(err, StoreError::Config(_)));
    }

    #[test]
    fn test_validate_reports_bad_urls() {
        let mut config = StoreConfig::default();
        config.api.base_url = "not a url".into();
        config.page.origin = "".into();
        config.api.timeout_secs = Some(0);

        let problems = config.validate();
        assert!(problems.iter().any(|p| p.starts_with("api.base_url")));
        assert!(problems.iter().any(|p| p.starts_with("page.origin")));
        assert!(problems.iter().any(|p| p.contains("timeout_secs")));
    }
}
