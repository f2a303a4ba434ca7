use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

use crate::error::ClientError;

/// Read and submit access to a Solana cluster
#[async_trait]
pub trait Network: Send + Sync {
    /// Minimum balance that keeps an account of `data_len` bytes exempt from rent
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ClientError>;

    /// Most recent blockhash, used as the validity window of a new transaction
    async fn get_latest_blockhash(&self) -> Result<Hash, ClientError>;

    /// Submits a fully signed transaction without waiting for confirmation
    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError>;
}

#[async_trait]
impl Network for RpcClient {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ClientError> {
        RpcClient::get_minimum_balance_for_rent_exemption(self, data_len)
            .await
            .map_err(ClientError::Network)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ClientError> {
        RpcClient::get_latest_blockhash(self)
            .await
            .map_err(ClientError::Network)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError> {
        RpcClient::send_transaction(self, transaction)
            .await
            .map_err(ClientError::Network)
    }
}
