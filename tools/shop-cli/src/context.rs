//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shop_core::{HttpCommerceApi, StoreConfig, Storefront};
use url::Url;

use crate::browser::TerminalBrowser;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 2] = ["shop.toml", ".shop.toml"];

/// Storefront driven from the terminal.
pub type TerminalStore = Storefront<HttpCommerceApi, TerminalBrowser>;

/// Execution context for CLI commands.
pub struct Context {
    /// Store configuration.
    pub config: StoreConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config_path = match config_path {
            Some(path) => Some(PathBuf::from(path)),
            // Try to find config in current directory or parent directories
            None => find_config(&cwd),
        };

        let config = match &config_path {
            Some(path) => StoreConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => StoreConfig::default(),
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Commerce API client from the configuration.
    pub fn api(&self) -> Result<HttpCommerceApi> {
        HttpCommerceApi::from_config(&self.config).context("Failed to set up the commerce API")
    }

    /// A storefront whose page sits at `location`, or at the configured
    /// origin when none is given.
    pub fn storefront(&self, location: Option<&str>) -> Result<TerminalStore> {
        let location = match location {
            Some(raw) => Url::parse(raw).with_context(|| format!("Invalid page URL: {}", raw))?,
            None => self.config.origin().context("Invalid page.origin")?,
        };
        let currency = self.config.api.currency()?;
        let browser = TerminalBrowser::new(location, self.output.clone());

        Ok(Storefront::new(self.api()?, browser).with_currency(currency))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.is_file() {
                return Some(config_path);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}
