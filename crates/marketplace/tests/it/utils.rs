//! In-memory wallet, contract and notifier doubles.

use alloy_primitives::{Address, ChainId, TxHash, U256, address};
use alloy_transport::TransportErrorKind;
use async_trait::async_trait;
use marketplace::{App, Notifier, ViewState};
use marketplace_gateway::{Artifact, GatewayConnector, GatewayError, MarketplaceApi, Product};
use marketplace_wallets::{BoundSigner, WalletError, WalletProvider, select_account};
use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};
use tokio::sync::watch;

pub const ALICE: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
pub const BOB: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

pub type TestApp = App<MockWallet, MockConnector, RecordingNotifier>;

fn rpc_error(msg: &str) -> GatewayError {
    GatewayError::Contract(TransportErrorKind::custom_str(msg).into())
}

/// The repository's artifact, with the address table replaced by `networks`.
pub fn artifact(networks: &[(ChainId, Address)]) -> Artifact {
    let mut artifact =
        Artifact::load(concat!(env!("CARGO_MANIFEST_DIR"), "/../../abis/Marketplace.json"))
            .unwrap();
    artifact.networks = networks
        .iter()
        .map(|&(chain_id, address)| {
            (chain_id, marketplace_gateway::Deployment { address, transaction_hash: None })
        })
        .collect::<BTreeMap<_, _>>();
    artifact
}

pub fn product(id: u64, name: &str, price: u128) -> Product {
    Product {
        id: U256::from(id),
        name: name.to_string(),
        price: U256::from(price),
        owner: BOB,
        purchased: false,
    }
}

#[derive(Clone, Debug)]
pub struct MockSigner(pub Address);

impl BoundSigner for MockSigner {
    fn address(&self) -> Address {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct MockWallet {
    pub accounts: Vec<Address>,
    pub chain_id: ChainId,
    pub reject: bool,
}

impl MockWallet {
    pub fn on(chain_id: ChainId) -> Self {
        Self { accounts: vec![ALICE, BOB], chain_id, reject: false }
    }
}

#[async_trait]
impl WalletProvider for MockWallet {
    type Signer = MockSigner;

    async fn request_accounts(&self) -> Result<Vec<Address>, WalletError> {
        if self.reject {
            return Err(WalletError::Authorization(TransportErrorKind::custom_str(
                "User rejected the request.",
            )));
        }
        Ok(self.accounts.clone())
    }

    async fn signer(&self) -> Result<MockSigner, WalletError> {
        let accounts = self.request_accounts().await?;
        Ok(MockSigner(select_account(&accounts, None)?))
    }

    async fn chain_id(&self) -> Result<ChainId, WalletError> {
        Ok(self.chain_id)
    }
}

/// A call made on a [`MockGateway`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    ProductCount,
    Product(u64),
    CreateProduct(String, U256),
    PurchaseProduct(u64, U256),
}

/// Contract state shared by every gateway a [`MockConnector`] hands out.
#[derive(Debug, Default)]
pub struct Ledger {
    pub products: Vec<Product>,
    /// Reading this product id fails.
    pub fail_read: Option<u64>,
    /// Every transaction fails.
    pub fail_writes: bool,
    pub calls: Vec<Call>,
    /// `loading` as observed while each transaction was in flight.
    pub loading_seen: Vec<bool>,
}

#[derive(Clone, Debug, Default)]
pub struct MockConnector {
    pub ledger: Arc<Mutex<Ledger>>,
    pub observer: Arc<Mutex<Option<watch::Receiver<ViewState>>>>,
    /// `(contract, account)` pairs gateways were bound to.
    pub bound: Arc<Mutex<Vec<(Address, Address)>>>,
}

impl MockConnector {
    pub fn with_products(products: Vec<Product>) -> Self {
        let connector = Self::default();
        connector.ledger.lock().unwrap().products = products;
        connector
    }

    pub fn calls(&self) -> Vec<Call> {
        self.ledger.lock().unwrap().calls.clone()
    }

    /// Lets gateways observe the state of `app` while transactions are in flight.
    pub fn observe(&self, app: &TestApp) {
        *self.observer.lock().unwrap() = Some(app.subscribe());
    }
}

impl GatewayConnector<MockSigner> for MockConnector {
    type Gateway = MockGateway;

    fn connect(&self, address: Address, signer: &MockSigner) -> MockGateway {
        self.bound.lock().unwrap().push((address, signer.0));
        MockGateway {
            address,
            ledger: self.ledger.clone(),
            observer: self.observer.clone(),
        }
    }
}

#[derive(Debug)]
pub struct MockGateway {
    address: Address,
    ledger: Arc<Mutex<Ledger>>,
    observer: Arc<Mutex<Option<watch::Receiver<ViewState>>>>,
}

impl MockGateway {
    fn record_loading(&self, ledger: &mut Ledger) {
        if let Some(observer) = &*self.observer.lock().unwrap() {
            ledger.loading_seen.push(observer.borrow().loading);
        }
    }
}

#[async_trait]
impl MarketplaceApi for MockGateway {
    fn address(&self) -> Address {
        self.address
    }

    async fn product_count(&self) -> Result<u64, GatewayError> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.calls.push(Call::ProductCount);
        Ok(ledger.products.len() as u64)
    }

    async fn product(&self, id: u64) -> Result<Product, GatewayError> {
        let mut ledger = self.ledger.lock().unwrap();
        ledger.calls.push(Call::Product(id));
        if ledger.fail_read == Some(id) {
            return Err(rpc_error("connection reset"));
        }
        let index = usize::try_from(id).unwrap().checked_sub(1);
        index
            .and_then(|index| ledger.products.get(index))
            .cloned()
            .ok_or_else(|| rpc_error("execution reverted"))
    }

    async fn create_product(&self, name: &str, price: U256) -> Result<TxHash, GatewayError> {
        let mut ledger = self.ledger.lock().unwrap();
        self.record_loading(&mut ledger);
        ledger.calls.push(Call::CreateProduct(name.to_string(), price));
        if ledger.fail_writes {
            return Err(rpc_error("User denied transaction signature."));
        }
        let id = ledger.products.len() as u64 + 1;
        ledger.products.push(Product {
            id: U256::from(id),
            name: name.to_string(),
            price,
            owner: ALICE,
            purchased: false,
        });
        Ok(TxHash::with_last_byte(id as u8))
    }

    async fn purchase_product(&self, id: u64, value: U256) -> Result<TxHash, GatewayError> {
        let mut ledger = self.ledger.lock().unwrap();
        self.record_loading(&mut ledger);
        ledger.calls.push(Call::PurchaseProduct(id, value));
        if ledger.fail_writes {
            return Err(rpc_error("execution reverted"));
        }
        Ok(TxHash::with_last_byte(0xff))
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingNotifier(Arc<Mutex<Vec<String>>>);

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}
