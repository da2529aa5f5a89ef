//! List the catalog.

use anyhow::Result;
use shop_commerce::catalog::Catalog;

use super::{load_catalog, ProductsArgs};
use crate::context::Context;
use crate::view;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(None)?;
    load_catalog(&mut store, ctx).await?;

    let Some(catalog) = store.catalog() else {
        return Ok(());
    };

    ctx.output.header(&ctx.config.store.name);
    ctx.output.debug(&ctx.config.store.tagline);

    if args.available {
        let available: Catalog = catalog
            .iter()
            .filter(|p| p.is_purchasable())
            .cloned()
            .collect::<Vec<_>>()
            .into();
        view::catalog(&ctx.output, &available);
    } else {
        view::catalog(&ctx.output, catalog);
    }

    Ok(())
}
