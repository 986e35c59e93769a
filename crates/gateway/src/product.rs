use crate::abi::Marketplace;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// A product listed on the marketplace, as returned by `products(uint256)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: U256,
    pub name: String,
    /// Price in the smallest unit of the native currency.
    pub price: U256,
    pub owner: Address,
    pub purchased: bool,
}

impl From<Marketplace::productsReturn> for Product {
    fn from(ret: Marketplace::productsReturn) -> Self {
        let Marketplace::productsReturn { id, name, price, owner, purchased } = ret;
        Self { id, name, price, owner, purchased }
    }
}
