use std::time::Duration;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::signature::Signature;
use tracing::debug;

use crate::error::ClientError;

/// Confirmation status lookups for submitted transactions
#[async_trait]
pub trait Confirmer: Send + Sync {
    /// Whether `signature` has reached the configured commitment
    async fn confirm(&self, signature: &Signature) -> Result<bool, ClientError>;
}

#[async_trait]
impl Confirmer for RpcClient {
    async fn confirm(&self, signature: &Signature) -> Result<bool, ClientError> {
        self.confirm_transaction(signature)
            .await
            .map_err(ClientError::Network)
    }
}

/// Polls `confirmer` until `signature` is confirmed or `attempts` run out
///
/// # Returns
///
/// `true` once confirmed, `false` if every attempt reported it as unconfirmed
pub async fn wait_for_confirmation(
    confirmer: &dyn Confirmer,
    signature: &Signature,
    attempts: usize,
    interval: Duration,
) -> Result<bool, ClientError> {
    for attempt in 1..=attempts {
        if confirmer.confirm(signature).await? {
            debug!(%signature, attempt, "Transaction confirmed");
            return Ok(true);
        }

        if attempt < attempts {
            tokio::time::sleep(interval).await;
        }
    }

    Ok(false)
}
