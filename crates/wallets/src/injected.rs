use crate::{BoundSigner, WalletError, WalletProvider};
use alloy_network::EthereumWallet;
use alloy_primitives::{Address, ChainId};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_signer_local::PrivateKeySigner;
use alloy_transport::TransportError;
use async_trait::async_trait;
use std::fmt;

/// JSON-RPC error code for methods the endpoint does not implement.
const METHOD_NOT_FOUND: i64 = -32601;

/// Detects the wallet provider.
///
/// A wallet is present when an endpoint is configured. Returns `Ok(None)` otherwise, leaving
/// it to the caller to tell the user.
pub async fn detect(
    url: Option<&str>,
    local: Option<PrivateKeySigner>,
    sender: Option<Address>,
) -> Result<Option<InjectedProvider>, WalletError> {
    let Some(url) = url else {
        debug!("no wallet endpoint configured");
        return Ok(None);
    };
    InjectedProvider::connect(url, local, sender).await.map(Some)
}

/// Picks the active account out of the authorized ones.
///
/// The requested `sender` must be authorized; without one the first account is used.
pub fn select_account(
    accounts: &[Address],
    sender: Option<Address>,
) -> Result<Address, WalletError> {
    match sender {
        Some(sender) if accounts.contains(&sender) => Ok(sender),
        Some(sender) => Err(WalletError::UnauthorizedSender(sender)),
        None => accounts.first().copied().ok_or(WalletError::NoAccounts),
    }
}

/// A wallet reached through a JSON-RPC endpoint.
#[derive(Clone)]
pub struct InjectedProvider {
    url: String,
    provider: DynProvider,
    local: Option<PrivateKeySigner>,
    sender: Option<Address>,
}

impl fmt::Debug for InjectedProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InjectedProvider")
            .field("url", &self.url)
            .field("local", &self.local.as_ref().map(|signer| signer.address()))
            .field("sender", &self.sender)
            .finish()
    }
}

impl InjectedProvider {
    /// Connects to the wallet endpoint at `url`.
    ///
    /// With a `local` signer, transactions are signed locally and the signer's address is the
    /// only authorized account.
    pub async fn connect(
        url: &str,
        local: Option<PrivateKeySigner>,
        sender: Option<Address>,
    ) -> Result<Self, WalletError> {
        let provider = match &local {
            Some(signer) => ProviderBuilder::new()
                .wallet(EthereumWallet::from(signer.clone()))
                .connect(url)
                .await?
                .erased(),
            None => ProviderBuilder::new().connect(url).await?.erased(),
        };
        debug!(%url, local = local.is_some(), "connected wallet endpoint");
        Ok(Self { url: url.to_string(), provider, local, sender })
    }

    /// The endpoint URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The underlying provider.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }

    async fn endpoint_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let res: Result<Vec<Address>, TransportError> =
            self.provider.raw_request("eth_requestAccounts".into(), ()).await;
        match res {
            Ok(accounts) => Ok(accounts),
            Err(err) if err.as_error_resp().is_some_and(|resp| resp.code == METHOD_NOT_FOUND) => {
                debug!("eth_requestAccounts not supported, falling back to eth_accounts");
                Ok(self.provider.get_accounts().await?)
            }
            Err(err) => Err(WalletError::Authorization(err)),
        }
    }
}

#[async_trait]
impl WalletProvider for InjectedProvider {
    type Signer = WalletSession;

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        let accounts = match &self.local {
            Some(signer) => vec![signer.address()],
            None => self.endpoint_accounts().await?,
        };
        trace!(?accounts, "authorized accounts");
        Ok(accounts)
    }

    async fn signer(&self) -> Result<WalletSession, WalletError> {
        let accounts = self.request_accounts().await?;
        let account = select_account(&accounts, self.sender)?;
        Ok(WalletSession { account, provider: self.provider.clone() })
    }

    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        Ok(self.provider.get_chain_id().await?)
    }
}

/// A signer bound to one account: the provider transactions are sent through, plus the
/// account they are sent from.
#[derive(Clone)]
pub struct WalletSession {
    account: Address,
    provider: DynProvider,
}

impl fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSession").field("account", &self.account).finish_non_exhaustive()
    }
}

impl WalletSession {
    pub fn account(&self) -> Address {
        self.account
    }

    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

impl BoundSigner for WalletSession {
    fn address(&self) -> Address {
        self.account
    }
}
