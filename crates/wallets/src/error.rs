use alloy_primitives::{Address, hex::FromHexError};
use alloy_transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum PrivateKeyError {
    #[error("Failed to create wallet from private key. Private key is invalid hex: {0}")]
    InvalidHex(#[from] FromHexError),
    #[error(
        "Failed to create wallet from private key. Invalid private key. But env var {0} exists. Is the `$` anchor missing?"
    )]
    ExistsAsEnvVar(String),
    #[error("Failed to create wallet from private key: {0}")]
    Invalid(String),
}

#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    #[error("the wallet did not authorize any account")]
    NoAccounts,
    #[error("account {0} is not authorized by the wallet")]
    UnauthorizedSender(Address),
    #[error("account authorization was refused")]
    Authorization(#[source] TransportError),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    PrivateKey(#[from] PrivateKeyError),
    #[error("failed to read private key: {0}")]
    Prompt(#[from] dialoguer::Error),
}
