use super::build_app;
use crate::{
    notify::ShellNotifier,
    view::{accepts_actions, render},
};
use alloy_primitives::U256;
use eyre::{Result, eyre};
use marketplace_config::Config;
use marketplace_gateway::units::format_price;
use marketplace_wallets::WalletOpts;

pub async fn run(
    config: &Config,
    wallet: &WalletOpts,
    id: u64,
    price: Option<&str>,
) -> Result<()> {
    let mut app = build_app(config, wallet, ShellNotifier::default()).await?;
    app.init().await;
    let state = app.state();
    if !accepts_actions(&state) {
        sh_print!("{}", render(&state))?;
        return Ok(());
    }

    let price = match price {
        Some(price) => price.to_string(),
        None => state
            .products
            .iter()
            .find(|product| product.id == U256::from(id))
            .map(|product| format_price(product.price))
            .ok_or_else(|| eyre!("product #{id} is not listed"))?,
    };
    if let Some(tx_hash) = app.purchase_product(id, &price).await {
        sh_println!("Product #{id} purchased in transaction {tx_hash}")?;
    }
    Ok(())
}
