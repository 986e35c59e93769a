//! Plain-text rendering of the [`ViewState`].

use crate::app::{Phase, ViewState};
use comfy_table::{Table, presets::ASCII_MARKDOWN};
use marketplace_gateway::{Product, units::format_price};
use std::fmt::Write;

/// Renders the account line followed by either the loading indicator or the product table.
pub fn render(state: &ViewState) -> String {
    let mut out = String::new();
    let _ = match state.account {
        Some(account) => writeln!(out, "Account: {account}"),
        None => writeln!(out, "Account: not connected"),
    };

    if state.loading {
        out.push_str("Loading...\n");
    } else if state.products.is_empty() {
        out.push_str("No products listed.\n");
    } else {
        let _ = writeln!(out, "{}", products_table(&state.products));
    }

    if state.phase == Phase::Unavailable {
        out.push_str("Marketplace unavailable.\n");
    }
    out
}

/// Whether create and purchase actions are offered.
///
/// Actions stay available after a failed load; they fail and are logged without a bound
/// contract.
pub fn accepts_actions(state: &ViewState) -> bool {
    !state.loading
}

/// Renders products as a table, one row per product.
pub fn products_table(products: &[Product]) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN);
    table.set_header(["#", "Name", "Price", "Owner", "Status"]);
    for product in products {
        table.add_row([
            product.id.to_string(),
            product.name.clone(),
            format!("{} ETH", format_price(product.price)),
            product.owner.to_string(),
            status(product).to_string(),
        ]);
    }
    table
}

/// One-line description of a product, for selection prompts.
pub fn product_label(product: &Product) -> String {
    format!(
        "#{} {} ({} ETH, {})",
        product.id,
        product.name,
        format_price(product.price),
        status(product).to_lowercase()
    )
}

fn status(product: &Product) -> &'static str {
    if product.purchased { "Purchased" } else { "For sale" }
}
