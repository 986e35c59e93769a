//! # marketplace-wallets
//!
//! The bridge between the marketplace client and the user's wallet.
//!
//! A wallet is reached through an EIP-1193 style JSON-RPC endpoint: the client asks it to
//! authorize accounts (`eth_requestAccounts`), reads the connected chain and submits
//! transactions through it. Transactions are either signed by the endpoint itself
//! (`eth_sendTransaction`) or, when a private key is supplied, signed locally.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, ChainId};
use async_trait::async_trait;

pub mod error;
pub use error::{PrivateKeyError, WalletError};

mod injected;
pub use injected::{InjectedProvider, WalletSession, detect, select_account};

mod opts;
pub use opts::WalletOpts;

pub mod utils;

/// A transaction signer bound to a single account.
pub trait BoundSigner: Send + Sync {
    /// The account this signer acts for.
    fn address(&self) -> Address;
}

/// A wallet provider the client can request account access from.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// The signer handed out once an account is authorized.
    type Signer: BoundSigner;

    /// Requests account authorization, returning the authorized accounts.
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError>;

    /// Returns a signer bound to the active account.
    async fn signer(&self) -> Result<Self::Signer, WalletError>;

    /// Returns the chain id of the network the wallet is connected to.
    async fn chain_id(&self) -> Result<ChainId, WalletError>;
}
