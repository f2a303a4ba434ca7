use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use solana_client::client_error::ClientErrorKind;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
use token_launchpad::{
    capabilities::{Confirmer, KeypairWallet, Network, Wallet},
    common::types::PriorityFee,
    error::ClientError,
    Launchpad,
};

pub const RENT_PER_BYTE: u64 = 6_960;

pub fn network_error(message: &str) -> ClientError {
    ClientError::Network(ClientErrorKind::Custom(message.to_string()).into())
}

/// In-memory network that records every call and submitted transaction
#[derive(Default)]
pub struct FakeNetwork {
    pub rent_queries: Mutex<Vec<usize>>,
    pub blockhash_calls: AtomicUsize,
    pub submitted: Mutex<Vec<Transaction>>,
    /// Zero based index of the submission that fails
    pub fail_submission: Option<usize>,
    pub fail_rent: bool,
    submissions: AtomicUsize,
}

impl FakeNetwork {
    pub fn failing_submission(index: usize) -> Self {
        Self {
            fail_submission: Some(index),
            ..Default::default()
        }
    }

    pub fn failing_rent() -> Self {
        Self {
            fail_rent: true,
            ..Default::default()
        }
    }

    pub fn total_calls(&self) -> usize {
        self.rent_queries.lock().unwrap().len()
            + self.blockhash_calls.load(Ordering::SeqCst)
            + self.submissions.load(Ordering::SeqCst)
    }

    pub fn submitted(&self) -> Vec<Transaction> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl Network for FakeNetwork {
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ClientError> {
        self.rent_queries.lock().unwrap().push(data_len);
        if self.fail_rent {
            return Err(network_error("rent unavailable"));
        }
        Ok(data_len as u64 * RENT_PER_BYTE)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, ClientError> {
        self.blockhash_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Hash::new_unique())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError> {
        let index = self.submissions.fetch_add(1, Ordering::SeqCst);
        if self.fail_submission == Some(index) {
            return Err(network_error("node unavailable"));
        }

        self.submitted.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

/// Wallet that is not connected
pub struct DisconnectedWallet;

#[async_trait]
impl Wallet for DisconnectedWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        None
    }

    async fn send_transaction(
        &self,
        _transaction: Transaction,
        _network: &dyn Network,
    ) -> Result<Signature, ClientError> {
        Err(ClientError::NoWallet)
    }
}

/// Confirms a signature after a fixed number of lookups
pub struct SlowConfirmer {
    pub confirm_after: usize,
    pub lookups: AtomicUsize,
}

#[async_trait]
impl Confirmer for SlowConfirmer {
    async fn confirm(&self, _signature: &Signature) -> Result<bool, ClientError> {
        let lookups = self.lookups.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(lookups >= self.confirm_after)
    }
}

pub struct FakeContext {
    pub owner: Arc<Keypair>,
    pub network: Arc<FakeNetwork>,
    pub launchpad: Launchpad,
}

impl FakeContext {
    pub fn new(network: FakeNetwork) -> Self {
        Self::with_priority_fee(network, PriorityFee::default())
    }

    pub fn with_priority_fee(network: FakeNetwork, priority_fee: PriorityFee) -> Self {
        let owner = Arc::new(Keypair::new());
        let network = Arc::new(network);
        let launchpad = Launchpad::with_capabilities(
            Arc::new(KeypairWallet::new(owner.clone())),
            network.clone(),
            priority_fee,
        );

        Self {
            owner,
            network,
            launchpad,
        }
    }
}
