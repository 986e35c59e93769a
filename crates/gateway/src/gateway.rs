use crate::{
    GatewayConnector, GatewayError, MarketplaceApi, Product,
    abi::Marketplace::{self, MarketplaceInstance},
};
use alloy_network::{Ethereum, Network};
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::{DynProvider, PendingTransactionBuilder};
use async_trait::async_trait;
use marketplace_wallets::WalletSession;
use std::time::Duration;

type Receipt = <Ethereum as Network>::ReceiptResponse;

/// Default time to wait for a transaction receipt.
pub const DEFAULT_RECEIPT_TIMEOUT: Duration = Duration::from_secs(120);

/// [`MarketplaceApi`] backed by an alloy provider.
///
/// Transactions are sent from a fixed account; whether they are signed locally or by the
/// wallet endpoint is decided by the provider.
#[derive(Clone, Debug)]
pub struct ContractGateway {
    instance: MarketplaceInstance<DynProvider>,
    from: Address,
    confirmations: u64,
    timeout: Duration,
}

impl ContractGateway {
    /// Binds the contract at `address`, sending transactions from `from`.
    pub fn new(address: Address, provider: DynProvider, from: Address) -> Self {
        Self {
            instance: Marketplace::new(address, provider),
            from,
            confirmations: 1,
            timeout: DEFAULT_RECEIPT_TIMEOUT,
        }
    }

    /// Sets the number of confirmations to wait for.
    pub fn with_confirmations(mut self, confirmations: u64) -> Self {
        self.confirmations = confirmations;
        self
    }

    /// Sets the time to wait for a receipt.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The account transactions are sent from.
    pub fn from(&self) -> Address {
        self.from
    }

    async fn confirm(
        &self,
        pending: PendingTransactionBuilder<Ethereum>,
    ) -> Result<TxHash, GatewayError> {
        let tx_hash = *pending.tx_hash();
        debug!(%tx_hash, confirmations = self.confirmations, "waiting for receipt");
        let receipt = pending
            .with_required_confirmations(self.confirmations)
            .with_timeout(Some(self.timeout))
            .get_receipt()
            .await?;
        settle(tx_hash, &receipt)
    }
}

/// Fails reverted transactions and logs the marketplace events a successful one emitted.
fn settle(tx_hash: TxHash, receipt: &Receipt) -> Result<TxHash, GatewayError> {
    if !receipt.status() {
        return Err(GatewayError::Reverted(tx_hash));
    }
    for log in receipt.inner.logs() {
        if let Ok(event) = log.log_decode::<Marketplace::ProductCreated>() {
            let Marketplace::ProductCreated { id, name, price, owner, .. } = event.inner.data;
            info!(%tx_hash, %id, %name, %price, %owner, "product created");
        } else if let Ok(event) = log.log_decode::<Marketplace::ProductPurchased>() {
            let Marketplace::ProductPurchased { id, name, price, owner, .. } = event.inner.data;
            info!(%tx_hash, %id, %name, %price, %owner, "product purchased");
        }
    }
    Ok(tx_hash)
}

#[async_trait]
impl MarketplaceApi for ContractGateway {
    fn address(&self) -> Address {
        *self.instance.address()
    }

    async fn product_count(&self) -> Result<u64, GatewayError> {
        let count = self.instance.productCount().call().await?;
        u64::try_from(count).map_err(|_| GatewayError::CountOutOfRange(count))
    }

    async fn product(&self, id: u64) -> Result<Product, GatewayError> {
        trace!(id, "reading product");
        let product = self.instance.products(U256::from(id)).call().await?;
        Ok(product.into())
    }

    async fn create_product(&self, name: &str, price: U256) -> Result<TxHash, GatewayError> {
        debug!(%name, %price, from = %self.from, "creating product");
        let pending =
            self.instance.createProduct(name.to_string(), price).from(self.from).send().await?;
        self.confirm(pending).await
    }

    async fn purchase_product(&self, id: u64, value: U256) -> Result<TxHash, GatewayError> {
        debug!(id, %value, from = %self.from, "purchasing product");
        let pending = self
            .instance
            .purchaseProduct(U256::from(id))
            .from(self.from)
            .value(value)
            .send()
            .await?;
        self.confirm(pending).await
    }
}

/// Connects [`ContractGateway`]s to [`WalletSession`]s.
#[derive(Clone, Debug)]
pub struct ContractConnector {
    confirmations: u64,
    timeout: Duration,
}

impl Default for ContractConnector {
    fn default() -> Self {
        Self { confirmations: 1, timeout: DEFAULT_RECEIPT_TIMEOUT }
    }
}

impl ContractConnector {
    pub fn new(confirmations: u64, timeout: Duration) -> Self {
        Self { confirmations, timeout }
    }
}

impl GatewayConnector<WalletSession> for ContractConnector {
    type Gateway = ContractGateway;

    fn connect(&self, address: Address, signer: &WalletSession) -> ContractGateway {
        ContractGateway::new(address, signer.provider().clone(), signer.account())
            .with_confirmations(self.confirmations)
            .with_timeout(self.timeout)
    }
}
