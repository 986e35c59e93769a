//! Subcommands.

use crate::{app::App, notify::ShellNotifier};
use eyre::Result;
use marketplace_config::Config;
use marketplace_gateway::{Artifact, ContractConnector};
use marketplace_wallets::{InjectedProvider, WalletOpts, detect};

pub mod create;
pub mod interactive;
pub mod list;
pub mod purchase;

/// The client as wired for the command line.
pub type CliApp = App<InjectedProvider, ContractConnector, ShellNotifier>;

/// Loads the artifact, detects the wallet and builds an uninitialized client.
pub async fn build_app(
    config: &Config,
    wallet: &WalletOpts,
    notifier: ShellNotifier,
) -> Result<CliApp> {
    let artifact = Artifact::load(&config.artifact)?;
    let local = wallet.local_signer()?;
    let wallet = detect(config.rpc_url(), local, config.sender).await?;
    let connector = ContractConnector::new(config.confirmations, config.transaction_timeout());
    Ok(App::new(wallet, connector, notifier, artifact, config.network_id))
}
