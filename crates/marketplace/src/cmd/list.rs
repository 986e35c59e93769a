use super::build_app;
use crate::{notify::ShellNotifier, view::render};
use eyre::Result;
use marketplace_config::Config;
use marketplace_wallets::WalletOpts;

pub async fn run(config: &Config, wallet: &WalletOpts) -> Result<()> {
    let mut app = build_app(config, wallet, ShellNotifier::default()).await?;
    app.init().await;
    sh_print!("{}", render(&app.state()))?;
    Ok(())
}
