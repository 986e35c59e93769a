use crate::{WalletError, utils::create_private_key_signer};
use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use clap::Parser;

/// Options selecting the account and how transactions are signed.
///
/// Without a private key the wallet endpoint signs with its own accounts.
#[derive(Clone, Debug, Default, Parser)]
#[command(next_help_heading = "Wallet options")]
pub struct WalletOpts {
    /// The account to act as.
    ///
    /// Must be one of the accounts authorized by the wallet.
    #[arg(long, short, env = "ETH_FROM", value_name = "ADDRESS")]
    pub from: Option<Address>,

    /// Open an interactive prompt to enter your private key.
    #[arg(long, short, conflicts_with = "private_key")]
    pub interactive: bool,

    /// Sign locally with the provided private key.
    #[arg(long, env = "ETH_PRIVATE_KEY", value_name = "RAW_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: Option<String>,
}

impl WalletOpts {
    /// Returns the local signer, if one was requested.
    pub fn local_signer(&self) -> Result<Option<PrivateKeySigner>, WalletError> {
        if self.interactive {
            let private_key =
                dialoguer::Password::new().with_prompt("Enter private key").interact()?;
            return Ok(Some(create_private_key_signer(&private_key)?));
        }
        Ok(self.private_key.as_deref().map(create_private_key_signer).transpose()?)
    }
}
