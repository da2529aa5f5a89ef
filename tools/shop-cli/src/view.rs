//! Terminal rendering of the catalog and cart.

use serde::Serialize;
use shop_commerce::prelude::*;

use crate::output::{availability_badge, truncate, Output};

const COLUMNS: [usize; 4] = [24, 28, 10, 14];

/// Print the catalog as a table.
pub fn catalog(output: &Output, catalog: &Catalog) {
    if output.is_json() {
        output.json(&catalog.products());
        return;
    }
    if catalog.is_empty() {
        output.info("No products available yet");
        return;
    }

    output.table_row(&["PRICE ID", "PRODUCT", "PRICE", "STOCK"], &COLUMNS);
    for product in catalog {
        let price = product.price.display();
        let badge = availability_badge(product.availability(), product.sold_out);
        output.table_row(
            &[
                product.price_id.as_str(),
                &truncate(product.title(), COLUMNS[1]),
                &price,
                &badge,
            ],
            &COLUMNS,
        );
    }
}

/// Print one product's details.
pub fn product(output: &Output, product: &Product) {
    if output.is_json() {
        output.json(product);
        return;
    }

    output.header(product.title());
    output.kv("price", &product.price.display());
    output.kv("price id", product.price_id.as_str());
    if let Some(label) = product.availability().stock_label() {
        output.kv("stock", &label);
    }
    if product.sold_out {
        output.kv("status", "Sold out");
    }
    if let Some(description) = &product.description {
        output.kv("about", description);
    }
    if let Some(image) = &product.image_url {
        output.kv("image", image);
    }
    for feature in &product.features {
        output.list_item(feature);
    }
}

#[derive(Serialize)]
struct CartView<'a> {
    lines: &'a [LineTotal],
    subtotal: &'a Money,
    item_count: u64,
}

/// Print the cart with line totals and subtotal.
pub fn cart(output: &Output, cart: &Cart, totals: &CartTotals) {
    if output.is_json() {
        output.json(&CartView {
            lines: &totals.lines,
            subtotal: &totals.subtotal,
            item_count: totals.item_count,
        });
        return;
    }
    if cart.is_empty() {
        output.info("Your cart is empty");
        return;
    }

    output.header(&format!("Cart ({} items)", totals.item_count));
    for (line, total) in cart.lines().iter().zip(&totals.lines) {
        output.table_row(
            &[
                &truncate(line.product.title(), COLUMNS[1]),
                &format!("× {}", line.quantity),
                &total.total.display(),
            ],
            &[COLUMNS[1], 6, COLUMNS[3]],
        );
    }
    output.kv("subtotal", &totals.subtotal.display());
}

/// One-line summary of a cart line, for menus.
pub fn line_label(line: &CartLine) -> String {
    format!("{} × {}", line.product.title(), line.quantity)
}

/// One-line summary of a product, for menus.
pub fn product_label(product: &Product) -> String {
    let mut label = format!("{} ({})", product.title(), product.price.display());
    if product.sold_out {
        label.push_str(" - sold out");
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let mug = Product::new("p", "price_mug", "Mug", Money::new(1250, Currency::USD))
            .with_display_name("Stoneware Mug");
        assert_eq!(product_label(&mug), "Stoneware Mug ($12.50)");
        assert_eq!(product_label(&mug.clone().sold_out()), "Stoneware Mug ($12.50) - sold out");

        let mut cart = Cart::new();
        cart.add(&mug);
        cart.add(&mug);
        assert_eq!(line_label(&cart.lines()[0]), "Stoneware Mug × 2");
    }
}
