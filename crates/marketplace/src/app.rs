//! Client state machine.
//!
//! [`App`] owns the wallet, the contract gateway and the observable [`ViewState`]. Every
//! change to the state is published on a [`watch`] channel; views render whatever the
//! channel holds.

use crate::notify::Notifier;
use alloy_primitives::{Address, ChainId, TxHash, U256};
use eyre::{Result, WrapErr, eyre};
use marketplace_common::errors::display_chain;
use marketplace_gateway::{Artifact, GatewayConnector, MarketplaceApi, Product, units::parse_price};
use marketplace_wallets::{BoundSigner, WalletProvider};
use tokio::sync::watch;

/// Shown when no wallet provider is available.
pub const NO_WALLET_ALERT: &str = "No Ethereum browser detected. Please try Metamask!";

/// Shown when the connected network has no known deployment.
pub const NO_DEPLOYMENT_ALERT: &str = "Marketplace contract not detected on this network!";

/// Lifecycle of the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Uninitialized,
    /// Connecting to the wallet and reading the catalog.
    Connecting,
    /// The catalog has been read; the client accepts actions.
    Loaded,
    /// No wallet, or no deployment on the connected network. Terminal.
    Unavailable,
}

/// Everything a view needs to render the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub phase: Phase,
    /// The active account, once authorized.
    pub account: Option<Address>,
    pub product_count: u64,
    /// Products in id order, `1..=product_count`.
    pub products: Vec<Product>,
    /// Whether a load or a transaction is in flight.
    pub loading: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            phase: Phase::default(),
            account: None,
            product_count: 0,
            products: Vec::new(),
            loading: true,
        }
    }
}

/// The marketplace client.
pub struct App<W, C, N>
where
    W: WalletProvider,
    C: GatewayConnector<W::Signer>,
{
    wallet: Option<W>,
    connector: C,
    notifier: N,
    artifact: Artifact,
    network_id: ChainId,
    gateway: Option<C::Gateway>,
    state: watch::Sender<ViewState>,
}

impl<W, C, N> App<W, C, N>
where
    W: WalletProvider,
    C: GatewayConnector<W::Signer>,
    N: Notifier,
{
    /// Creates a client. `wallet` is `None` when no wallet provider was detected.
    ///
    /// `network_id` is the network the wallet is expected to be on; the deployment is still
    /// looked up by the chain the wallet reports.
    pub fn new(
        wallet: Option<W>,
        connector: C,
        notifier: N,
        artifact: Artifact,
        network_id: ChainId,
    ) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { wallet, connector, notifier, artifact, network_id, gateway: None, state }
    }

    /// Subscribes to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// The bound contract gateway, once loaded.
    pub fn gateway(&self) -> Option<&C::Gateway> {
        self.gateway.as_ref()
    }

    /// Connects the wallet and loads the catalog.
    ///
    /// Failures are logged; loading is cleared and the client stays in
    /// [`Phase::Connecting`].
    pub async fn init(&mut self) {
        self.state.send_modify(|state| state.phase = Phase::Connecting);
        if let Err(err) = self.try_init().await {
            error!(err = %display_chain(err.as_ref()), "initialization error");
            self.state.send_modify(|state| state.loading = false);
        }
    }

    async fn try_init(&mut self) -> Result<()> {
        if self.connect_wallet().await?.is_none() {
            return Ok(());
        }
        self.load_blockchain_data().await.wrap_err("error loading blockchain data")
    }

    /// Requests account access from the wallet.
    ///
    /// Returns `Ok(None)` and alerts the user when there is no wallet.
    pub async fn connect_wallet(&mut self) -> Result<Option<Address>> {
        let Some(wallet) = &self.wallet else {
            self.unavailable(NO_WALLET_ALERT);
            return Ok(None);
        };
        let accounts = wallet.request_accounts().await.wrap_err("error loading web3")?;
        debug!(count = accounts.len(), "wallet authorized accounts");
        let account = wallet.signer().await?.address();
        self.state.send_modify(|state| state.account = Some(account));
        Ok(Some(account))
    }

    /// Binds the contract deployed on the wallet's network and reads every product.
    ///
    /// Products are read sequentially by id; the first failing read aborts the load and
    /// leaves the product list untouched.
    pub async fn load_blockchain_data(&mut self) -> Result<()> {
        let Some(wallet) = &self.wallet else {
            self.unavailable(NO_WALLET_ALERT);
            return Ok(());
        };
        let signer = wallet.signer().await?;
        let chain_id = wallet.chain_id().await?;

        let account = signer.address();
        self.state.send_modify(|state| state.account = Some(account));

        if chain_id != self.network_id {
            warn!(chain_id, expected = self.network_id, "wallet is connected to another network");
        }
        let Some(address) = self.artifact.deployment(chain_id) else {
            debug!(chain_id, known = ?self.artifact.chains().collect::<Vec<_>>(), "no deployment");
            self.unavailable(NO_DEPLOYMENT_ALERT);
            return Ok(());
        };

        debug!(%address, chain_id, %account, "binding marketplace contract");
        let gateway = &*self.gateway.insert(self.connector.connect(address, &signer));

        let count = gateway.product_count().await?;
        self.state.send_modify(|state| state.product_count = count);

        let mut products = Vec::new();
        for id in 1..=count {
            products.push(gateway.product(id).await?);
        }
        debug!(count, "loaded products");

        self.state.send_modify(move |state| {
            state.products = products;
            state.phase = Phase::Loaded;
            state.loading = false;
        });
        Ok(())
    }

    /// Re-reads the catalog.
    pub async fn refresh(&mut self) {
        self.state.send_modify(|state| state.loading = true);
        if let Err(err) = self.load_blockchain_data().await {
            error!(err = %display_chain(err.as_ref()), "error refreshing products");
            self.state.send_modify(|state| state.loading = false);
        }
    }

    /// Lists a product priced in the smallest currency unit.
    ///
    /// Returns the transaction hash once confirmed. Failures are logged and yield `None`;
    /// the catalog is not re-read either way.
    pub async fn create_product(&mut self, name: &str, price: U256) -> Option<TxHash> {
        self.state.send_modify(|state| state.loading = true);
        let result = self.submit_create(name, price).await;
        self.state.send_modify(|state| state.loading = false);
        result
            .inspect_err(|err| {
                error!(err = %display_chain(err.as_ref()), "error creating product")
            })
            .ok()
    }

    /// Buys product `id`, paying `price` given as a decimal amount of the native currency.
    ///
    /// Behaves like [`Self::create_product`] on failure.
    pub async fn purchase_product(&mut self, id: u64, price: &str) -> Option<TxHash> {
        self.state.send_modify(|state| state.loading = true);
        let result = self.submit_purchase(id, price).await;
        self.state.send_modify(|state| state.loading = false);
        result
            .inspect_err(|err| {
                error!(err = %display_chain(err.as_ref()), "error purchasing product")
            })
            .ok()
    }

    async fn submit_create(&self, name: &str, price: U256) -> Result<TxHash> {
        let tx_hash = self.loaded_gateway()?.create_product(name, price).await?;
        info!(%tx_hash, %name, %price, "product listed");
        Ok(tx_hash)
    }

    async fn submit_purchase(&self, id: u64, price: &str) -> Result<TxHash> {
        let value = parse_price(price).wrap_err_with(|| format!("invalid price {price:?}"))?;
        let tx_hash = self.loaded_gateway()?.purchase_product(id, value).await?;
        info!(%tx_hash, id, %value, "product purchased");
        Ok(tx_hash)
    }

    fn loaded_gateway(&self) -> Result<&C::Gateway> {
        self.gateway.as_ref().ok_or_else(|| eyre!("marketplace contract is not loaded"))
    }

    fn unavailable(&self, alert: &str) {
        self.notifier.alert(alert);
        self.state.send_modify(|state| state.phase = Phase::Unavailable);
    }
}
