//! # marketplace-gateway
//!
//! Typed access to a deployed Marketplace contract.
//!
//! [`MarketplaceApi`] is the call surface the client uses: reading the product count, reading
//! a product by its 1-based id, and submitting `createProduct` / `purchaseProduct`
//! transactions. [`ContractGateway`] implements it on top of an alloy provider.

#![cfg_attr(not(test), warn(unused_crate_dependencies))]

#[macro_use]
extern crate tracing;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

pub mod abi;
pub mod artifact;
pub mod units;

mod error;
pub use error::{ArtifactError, GatewayError};

mod gateway;
pub use gateway::{ContractConnector, ContractGateway};

mod product;
pub use product::Product;

pub use artifact::{Artifact, Deployment};

/// Operations exposed by a deployed Marketplace contract.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// The address of the contract this gateway is bound to.
    fn address(&self) -> Address;

    /// Reads the number of listed products.
    async fn product_count(&self) -> Result<u64, GatewayError>;

    /// Reads the product with the given 1-based id.
    async fn product(&self, id: u64) -> Result<Product, GatewayError>;

    /// Lists a new product and waits for the transaction to be confirmed.
    async fn create_product(&self, name: &str, price: U256) -> Result<TxHash, GatewayError>;

    /// Buys a product, paying `value` in the smallest currency unit, and waits for the
    /// transaction to be confirmed.
    async fn purchase_product(&self, id: u64, value: U256) -> Result<TxHash, GatewayError>;
}

/// Builds gateways bound to a contract address and a signer of type `S`.
pub trait GatewayConnector<S>: Send + Sync {
    type Gateway: MarketplaceApi;

    /// Binds the contract at `address` to `signer`.
    fn connect(&self, address: Address, signer: &S) -> Self::Gateway;
}
