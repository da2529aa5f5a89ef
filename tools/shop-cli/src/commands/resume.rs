//! Open the store at the address the hosted checkout returned to.

use anyhow::Result;
use shop_core::Browser;

use super::{load_catalog, ResumeArgs};
use crate::context::Context;
use crate::view;

/// Run the resume command.
pub async fn run(args: ResumeArgs, ctx: &Context) -> Result<()> {
    let mut store = ctx.storefront(Some(&args.url))?;

    let signal = store.resume_from_redirect();
    let address = store.browser().location();

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "signal": signal.map(|s| s.param()),
            "notice": store.browser().last_notice().map(|n| n.message()),
            "address": address,
        }));
    } else {
        if signal.is_none() {
            ctx.output.info("No checkout result on this address");
        }
        ctx.output.kv("address", address.as_str());
    }

    if !args.no_catalog {
        load_catalog(&mut store, ctx).await?;
        if let Some(catalog) = store.catalog() {
            view::catalog(&ctx.output, catalog);
        }
    }

    Ok(())
}
