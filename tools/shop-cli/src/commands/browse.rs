//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Input, Select};
use shop_commerce::prelude::*;

use super::{load_catalog, BrowseArgs};
use crate::context::{Context, TerminalStore};
use crate::view;

const MENU: [&str; 7] = [
    "Add a product",
    "View cart",
    "Change a quantity",
    "Remove a product",
    "Product details",
    "Checkout",
    "Quit",
];

/// Run the browse command.
pub async fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("browse is interactive; run it without --json");
    }

    let mut store = ctx.storefront(args.at.as_deref())?;
    store.resume_from_redirect();
    load_catalog(&mut store, ctx).await?;

    ctx.output.header(&ctx.config.store.name);
    ctx.output.info(&ctx.config.store.tagline);
    if let Some(catalog) = store.catalog() {
        view::catalog(&ctx.output, catalog);
    }

    loop {
        let choice = Select::new()
            .with_prompt(format!("Cart: {} items", store.cart().item_count()))
            .items(&MENU)
            .default(0)
            .interact()?;

        match choice {
            0 => add_product(&mut store, ctx)?,
            1 => show_cart(&mut store, ctx)?,
            2 => change_quantity(&mut store)?,
            3 => remove_product(&mut store)?,
            4 => show_details(&mut store, ctx)?,
            5 => {
                store.checkout().await;
                if store.checkout_state().is_redirected() {
                    return Ok(());
                }
            }
            _ => return Ok(()),
        }
    }
}

fn pick_product(store: &TerminalStore, prompt: &str) -> Result<Option<PriceId>> {
    let Some(catalog) = store.catalog().filter(|c| !c.is_empty()) else {
        return Ok(None);
    };
    let labels: Vec<String> = catalog.iter().map(view::product_label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(index.map(|i| catalog.products()[i].price_id.clone()))
}

fn pick_line(store: &TerminalStore, prompt: &str) -> Result<Option<PriceId>> {
    if store.cart().is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = store.cart().lines().iter().map(view::line_label).collect();
    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(index.map(|i| store.cart().lines()[i].price_id().clone()))
}

fn add_product(store: &mut TerminalStore, ctx: &Context) -> Result<()> {
    let Some(price_id) = pick_product(store, "Add which product?")? else {
        ctx.output.info("No products available yet");
        return Ok(());
    };
    if store.add_price(&price_id) {
        show_cart(store, ctx)?;
    } else {
        ctx.output.warn("That product is sold out");
    }
    Ok(())
}

fn show_cart(store: &mut TerminalStore, ctx: &Context) -> Result<()> {
    store.open_cart();
    let totals = store.totals()?;
    view::cart(&ctx.output, store.cart(), &totals);
    store.close_cart();
    Ok(())
}

fn change_quantity(store: &mut TerminalStore) -> Result<()> {
    let Some(price_id) = pick_line(store, "Change which line?")? else {
        return Ok(());
    };
    let delta: i64 = Input::new()
        .with_prompt("Change by (e.g. 1 or -1)")
        .default(1)
        .interact_text()?;
    store.adjust_quantity(&price_id, delta);
    Ok(())
}

fn remove_product(store: &mut TerminalStore) -> Result<()> {
    if let Some(price_id) = pick_line(store, "Remove which line?")? {
        store.remove_from_cart(&price_id);
    }
    Ok(())
}

fn show_details(store: &mut TerminalStore, ctx: &Context) -> Result<()> {
    let Some(price_id) = pick_product(store, "Show which product?")? else {
        return Ok(());
    };
    if let Some(product) = store.select_product(&price_id) {
        view::product(&ctx.output, product);
    }
    store.clear_selection();
    Ok(())
}
