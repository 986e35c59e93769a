use alloy_primitives::{TxHash, U256};
use alloy_provider::PendingTransactionError;
use std::path::PathBuf;

/// Errors returned by [`MarketplaceApi`](crate::MarketplaceApi) operations.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error(transparent)]
    Contract(#[from] alloy_contract::Error),
    #[error(transparent)]
    Pending(#[from] PendingTransactionError),
    #[error("transaction {0} reverted")]
    Reverted(TxHash),
    #[error("product count {0} does not fit in 64 bits")]
    CountOutOfRange(U256),
}

/// Errors raised while loading a contract artifact.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to read artifact {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("artifact ABI has no `{0}` function")]
    MissingFunction(&'static str),
}
