use clap::Parser;
use eyre::Result;
use marketplace_common::shell::{ColorChoice, Shell, Verbosity};
use marketplace_config::{
    Config,
    figment::{
        self, Metadata, Profile, Provider,
        value::{Dict, Map, Value},
    },
};
use marketplace_wallets::WalletOpts;
use std::path::PathBuf;

/// Global shell options.
#[derive(Clone, Copy, Debug, Default, Parser)]
pub struct ShellOpts {
    /// Use verbose output.
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Do not print anything but errors.
    #[arg(long, short, global = true, alias = "silent", conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output coloring.
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,
}

impl ShellOpts {
    pub fn shell(self) -> Shell {
        let verbosity = if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Shell::new_with(self.color.unwrap_or_default(), verbosity)
    }

    pub fn set_global_shell(self) {
        self.shell().set();
    }
}

/// Connection and transaction options, merged on top of the loaded [`Config`].
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Marketplace options")]
pub struct MarketplaceOpts {
    /// The wallet provider endpoint.
    #[arg(long = "rpc-url", short = 'r', env = "ETH_RPC_URL", value_name = "URL")]
    pub rpc_url: Option<String>,

    /// Path to the contract artifact holding the ABI and deployment addresses.
    #[arg(long, value_name = "PATH")]
    pub artifact: Option<PathBuf>,

    /// The network id the wallet is expected to be connected to.
    #[arg(long, value_name = "CHAIN_ID")]
    pub network_id: Option<u64>,

    /// Number of confirmations to wait for after submitting a transaction.
    #[arg(long, value_name = "N")]
    pub confirmations: Option<u64>,

    /// Seconds to wait for a transaction receipt.
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub wallet: WalletOpts,
}

impl MarketplaceOpts {
    /// Loads the config with these options merged on top.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::try_from(Config::figment().merge(self.clone()))?)
    }

    fn dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(url) = &self.rpc_url {
            dict.insert("eth_rpc_url".to_string(), Value::from(url.clone()));
        }
        if let Some(artifact) = &self.artifact {
            dict.insert("artifact".to_string(), Value::from(artifact.display().to_string()));
        }
        if let Some(network_id) = self.network_id {
            dict.insert("network_id".to_string(), Value::from(network_id));
        }
        if let Some(confirmations) = self.confirmations {
            dict.insert("confirmations".to_string(), Value::from(confirmations));
        }
        if let Some(timeout) = self.timeout {
            dict.insert("transaction_timeout".to_string(), Value::from(timeout));
        }
        if let Some(from) = self.wallet.from {
            dict.insert("sender".to_string(), Value::from(from.to_string()));
        }
        dict
    }
}

impl Provider for MarketplaceOpts {
    fn metadata(&self) -> Metadata {
        Metadata::named("command line arguments")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        Ok(Map::from([(Profile::Default, self.dict())]))
    }
}
