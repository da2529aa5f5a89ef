//! One-shot checkout from the command line.

use anyhow::{bail, Result};
use shop_commerce::checkout::CheckoutState;

use super::{load_catalog, parse_item, CheckoutArgs};
use crate::context::Context;
use crate::view;

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let items = args
        .items
        .iter()
        .map(|raw| parse_item(raw))
        .collect::<Result<Vec<_>>>()?;

    let mut store = ctx.storefront(None)?;
    load_catalog(&mut store, ctx).await?;

    for (price_id, quantity) in &items {
        if !store.add_price(price_id) {
            match store.catalog().and_then(|c| c.get(price_id)) {
                Some(product) => bail!("{} is sold out", product.title()),
                None => bail!("No product with price id {}", price_id),
            }
        }
        if *quantity > 1 {
            store.adjust_quantity(price_id, i64::from(*quantity) - 1);
        }
    }

    let totals = store.totals()?;
    view::cart(&ctx.output, store.cart(), &totals);

    let spinner = ctx.output.spinner("Creating checkout session...");
    let state = store.checkout().await.clone();
    spinner.finish_and_clear();

    match state {
        CheckoutState::Redirected { url } => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "url": url }));
            }
            Ok(())
        }
        _ => match store.browser().last_notice() {
            // The failure notice has already been printed.
            Some(notice) if notice.is_error() => bail!("No checkout session was created"),
            _ => {
                ctx.output.warn("The checkout service did not return a checkout URL");
                Ok(())
            }
        },
    }
}
