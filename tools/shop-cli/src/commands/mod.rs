//! CLI command implementations.

pub mod browse;
pub mod checkout;
pub mod config;
pub mod products;
pub mod resume;

use anyhow::{anyhow, bail, Result};
use clap::{Args, Subcommand};
use shop_commerce::PriceId;

use crate::context::{Context, TerminalStore};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Hide sold-out products.
    #[arg(long)]
    pub available: bool,
}

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Page address to open (default: page.origin).
    #[arg(long)]
    pub at: Option<String>,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Item to buy, as PRICE_ID or PRICE_ID:QUANTITY. Repeatable.
    #[arg(short, long = "item", required = true)]
    pub items: Vec<String>,
}

/// Arguments for the resume command.
#[derive(Args)]
pub struct ResumeArgs {
    /// Address the hosted checkout returned to.
    pub url: String,

    /// Do not load the catalog afterwards.
    #[arg(long)]
    pub no_catalog: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Load the catalog with a spinner, failing the command if it cannot load.
pub(crate) async fn load_catalog(store: &mut TerminalStore, ctx: &Context) -> Result<()> {
    let spinner = ctx.output.spinner("Loading products...");
    let state = store.load_catalog().await;
    spinner.finish_and_clear();

    if let Some(message) = state.error() {
        bail!("{}", message);
    }
    Ok(())
}

/// Parse `PRICE_ID` or `PRICE_ID:QUANTITY`.
pub(crate) fn parse_item(raw: &str) -> Result<(PriceId, u32)> {
    let (id, quantity) = match raw.rsplit_once(':') {
        Some((id, qty)) => {
            let qty: u32 = qty
                .parse()
                .map_err(|_| anyhow!("Invalid quantity in {:?}", raw))?;
            (id, qty)
        }
        None => (raw, 1),
    };

    let price_id = PriceId::new(id.trim());
    if price_id.is_blank() {
        bail!("Missing price id in {:?}", raw);
    }
    if quantity == 0 {
        bail!("Quantity must be at least 1 in {:?}", raw);
    }
    Ok((price_id, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_default_quantity() {
        let (id, qty) = parse_item("price_123").unwrap();
        assert_eq!(id.as_str(), "price_123");
        assert_eq!(qty, 1);
    }

    #[test]
    fn test_parse_item_with_quantity() {
        let (id, qty) = parse_item("price_123:4").unwrap();
        assert_eq!(id.as_str(), "price_123");
        assert_eq!(qty, 4);
    }

    #[test]
    fn test_parse_item_rejects_bad_input() {
        assert!(parse_item("price_123:0").is_err());
        assert!(parse_item("price_123:-1").is_err());
        assert!(parse_item("price_123:two").is_err());
        assert!(parse_item(":3").is_err());
    }
}
