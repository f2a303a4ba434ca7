use std::sync::Arc;

use async_trait::async_trait;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    transaction::Transaction,
};

use super::Network;
use crate::error::ClientError;

/// The owner's wallet
///
/// A wallet pays for and authorizes every launch phase. It receives transactions that already
/// carry a fee payer, a recent blockhash and any additional signatures, adds the owner's
/// signature and submits them.
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Public key of the connected account, `None` when no wallet is connected
    fn pubkey(&self) -> Option<Pubkey>;

    /// Signs `transaction` as the owner and submits it through `network`
    async fn send_transaction(
        &self,
        transaction: Transaction,
        network: &dyn Network,
    ) -> Result<Signature, ClientError>;
}

/// Wallet backed by a keypair held in memory
#[derive(Clone)]
pub struct KeypairWallet {
    keypair: Arc<Keypair>,
}

impl KeypairWallet {
    pub fn new(keypair: Arc<Keypair>) -> Self {
        Self { keypair }
    }
}

#[async_trait]
impl Wallet for KeypairWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        Some(self.keypair.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        network: &dyn Network,
    ) -> Result<Signature, ClientError> {
        let recent_blockhash = transaction.message.recent_blockhash;
        let signers: &[&Keypair] = &[self.keypair.as_ref()];
        transaction
            .try_partial_sign(signers, recent_blockhash)
            .map_err(|err| ClientError::Wallet(err.to_string()))?;

        network.send_transaction(&transaction).await
    }
}
