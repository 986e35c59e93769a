//! # marketplace-config
//!
//! Layered configuration for the marketplace client.
//!
//! Values are resolved, from lowest to highest precedence, from:
//! 1. [`Config::default()`]
//! 2. `marketplace.toml` in the working directory, or the file named by `MARKETPLACE_CONFIG`
//! 3. `ETH_RPC_URL` and `MARKETPLACE_*` environment variables
//! 4. whatever the caller merges on top of [`Config::figment()`], usually CLI flags

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, ChainId};
use figment::{
    Error, Figment, Metadata, Profile, Provider,
    providers::{Env, Format, Serialized, Toml},
    value::{Dict, Map},
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

mod error;
pub use error::ExtractConfigError;

pub use figment;

/// Marketplace client configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The network the client expects the wallet to be connected to.
    pub network_id: ChainId,
    /// The wallet provider endpoint. No endpoint means no wallet is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth_rpc_url: Option<String>,
    /// Path to the contract artifact holding the ABI and the per-network deployments.
    pub artifact: PathBuf,
    /// The account to act as, when the wallet authorizes more than one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<Address>,
    /// Number of confirmations to wait for after submitting a transaction.
    pub confirmations: u64,
    /// Seconds to wait for a transaction receipt.
    pub transaction_timeout: u64,
}

impl Config {
    /// The default config file name.
    pub const FILE_NAME: &'static str = "marketplace.toml";

    /// Environment variable that overrides the config file location.
    pub const CONFIG_ENV: &'static str = "MARKETPLACE_CONFIG";

    /// Prefix of the environment variables read into the config.
    pub const ENV_PREFIX: &'static str = "MARKETPLACE_";

    /// Default artifact location, relative to the working directory.
    pub const DEFAULT_ARTIFACT: &'static str = "abis/Marketplace.json";

    /// Returns the default figment: defaults, config file and environment.
    pub fn figment() -> Figment {
        let file = Env::var_or(Self::CONFIG_ENV, Self::FILE_NAME);
        Figment::from(Self::default())
            .merge(Toml::file(file))
            .merge(Env::raw().only(&["ETH_RPC_URL"]))
            .merge(Env::prefixed(Self::ENV_PREFIX).ignore(&["CONFIG"]))
    }

    /// Loads the config from the default figment.
    pub fn load() -> Result<Self, ExtractConfigError> {
        Self::try_from(Self::figment())
    }

    /// Attempts to extract a `Config` from `provider`.
    pub fn try_from<T: Provider>(provider: T) -> Result<Self, ExtractConfigError> {
        let figment = Figment::from(provider);
        trace!(metadata = ?figment.metadata().collect::<Vec<_>>(), "extracting config");
        figment.extract().map_err(ExtractConfigError::new)
    }

    /// Returns the receipt timeout as a [`Duration`].
    pub fn transaction_timeout(&self) -> Duration {
        Duration::from_secs(self.transaction_timeout)
    }

    /// Returns the configured wallet endpoint, ignoring blank values.
    pub fn rpc_url(&self) -> Option<&str> {
        self.eth_rpc_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network_id: 1,
            eth_rpc_url: None,
            artifact: PathBuf::from(Self::DEFAULT_ARTIFACT),
            sender: None,
            confirmations: 1,
            transaction_timeout: 120,
        }
    }
}

impl Provider for Config {
    fn metadata(&self) -> Metadata {
        Metadata::named("Marketplace Config")
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Serialized::defaults(self).data()
    }
}
