use super::build_app;
use crate::{
    notify::ShellNotifier,
    view::{accepts_actions, render},
};
use eyre::{Result, WrapErr};
use marketplace_config::Config;
use marketplace_gateway::units::parse_price;
use marketplace_wallets::WalletOpts;

pub async fn run(config: &Config, wallet: &WalletOpts, name: &str, price: &str) -> Result<()> {
    let price = parse_price(price).wrap_err_with(|| format!("invalid price {price:?}"))?;

    let mut app = build_app(config, wallet, ShellNotifier::default()).await?;
    app.init().await;
    if !accepts_actions(&app.state()) {
        sh_print!("{}", render(&app.state()))?;
        return Ok(());
    }

    if let Some(tx_hash) = app.create_product(name, price).await {
        sh_println!("Product listed in transaction {tx_hash}")?;
    }
    Ok(())
}
