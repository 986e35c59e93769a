use crate::error::PrivateKeyError;
use alloy_primitives::{B256, hex::FromHex};
use alloy_signer_local::PrivateKeySigner;

fn ensure_pk_not_env(pk: &str) -> Result<(), PrivateKeyError> {
    if !pk.starts_with("0x") && std::env::var(pk).is_ok() {
        return Err(PrivateKeyError::ExistsAsEnvVar(pk.to_string()));
    }
    Ok(())
}

/// Validates and sanitizes a raw private key, returning the local signer for it.
pub fn create_private_key_signer(private_key: &str) -> Result<PrivateKeySigner, PrivateKeyError> {
    let private_key = private_key.trim();
    let bytes = match B256::from_hex(private_key) {
        Ok(bytes) => bytes,
        Err(err) => {
            ensure_pk_not_env(private_key)?;
            return Err(err.into());
        }
    };
    PrivateKeySigner::from_bytes(&bytes).map_err(|err| match ensure_pk_not_env(private_key) {
        Err(env_err) => env_err,
        Ok(()) => PrivateKeyError::Invalid(err.to_string()),
    })
}
