//! Contract artifacts: the ABI plus the address table of known deployments.

use crate::ArtifactError;
use alloy_json_abi::JsonAbi;
use alloy_primitives::{Address, ChainId, TxHash};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::Path};

/// A compiled contract artifact in the Truffle layout:
///
/// ```json
/// {
///   "contractName": "Marketplace",
///   "abi": [ ... ],
///   "networks": { "5777": { "address": "0x..." } }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    /// Deployments keyed by chain id.
    #[serde(default)]
    pub networks: BTreeMap<ChainId, Deployment>,
}

/// A deployment of the contract on one network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<TxHash>,
}

impl Artifact {
    /// Functions the client calls; an artifact whose ABI lacks one is rejected.
    pub const REQUIRED_FUNCTIONS: [&'static str; 4] =
        ["productCount", "products", "createProduct", "purchaseProduct"];

    /// Reads and validates the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ArtifactError::Io { path: path.to_path_buf(), source })?;
        let artifact = Self::from_json(&json)?;
        let chains = artifact.chains().collect::<Vec<_>>();
        debug!(path = %path.display(), ?chains, "loaded artifact");
        Ok(artifact)
    }

    /// Parses and validates an artifact from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, ArtifactError> {
        let artifact: Self = serde_json::from_str(json)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Checks that the ABI exposes every function in [`Self::REQUIRED_FUNCTIONS`].
    pub fn validate(&self) -> Result<(), ArtifactError> {
        match Self::REQUIRED_FUNCTIONS.into_iter().find(|name| self.abi.function(name).is_none()) {
            Some(missing) => Err(ArtifactError::MissingFunction(missing)),
            None => Ok(()),
        }
    }

    /// Returns the contract address deployed on `chain_id`, if any.
    pub fn deployment(&self, chain_id: ChainId) -> Option<Address> {
        self.networks.get(&chain_id).map(|deployment| deployment.address)
    }

    /// Chain ids with a known deployment.
    pub fn chains(&self) -> impl Iterator<Item = ChainId> + '_ {
        self.networks.keys().copied()
    }
}
