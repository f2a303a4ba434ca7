use std::{fs, sync::Arc};

use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{read_keypair_file, Keypair},
};
use solana_client::nonblocking::rpc_client::RpcClient;
use token_launchpad::{
    capabilities::KeypairWallet,
    common::types::{Cluster, PriorityFee},
    Launchpad,
};

/// Set to run the tests that need a local validator
pub const LOCALNET_ENV: &str = "LAUNCHPAD_LOCALNET_TESTS";

// Load the default keypair, generating it on first use
fn load_default_keypair() -> Result<Keypair, String> {
    let home_path = dirs::home_dir().ok_or("Could not determine home directory")?;
    let default_keypair_path = home_path.join(".config/solana/id.json");

    if !default_keypair_path.exists() {
        let keypair = Keypair::new();

        if let Some(parent) = default_keypair_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }

        // Same JSON byte array format as the Solana CLI
        let json = format!("{:?}", keypair.to_bytes().to_vec());
        fs::write(&default_keypair_path, json).map_err(|e| {
            format!(
                "Failed to write keypair to {}: {}",
                default_keypair_path.display(),
                e
            )
        })?;

        return Ok(keypair);
    }

    read_keypair_file(&default_keypair_path).map_err(|e| {
        format!(
            "Failed to read keypair from {}: {}",
            default_keypair_path.display(),
            e
        )
    })
}

pub struct LocalnetContext {
    pub owner: Arc<Keypair>,
    pub rpc: Arc<RpcClient>,
    pub launchpad: Launchpad,
}

impl LocalnetContext {
    /// Returns `None` unless localnet tests were requested
    pub fn from_env() -> Option<Self> {
        std::env::var(LOCALNET_ENV).ok()?;

        let owner = Arc::new(load_default_keypair().expect("Failed to load default keypair"));
        let cluster = Cluster::localnet(CommitmentConfig::confirmed(), PriorityFee::default());

        let rpc = Arc::new(RpcClient::new_with_commitment(
            cluster.rpc_url.clone(),
            cluster.commitment,
        ));
        let launchpad = Launchpad::with_capabilities(
            Arc::new(KeypairWallet::new(owner.clone())),
            rpc.clone(),
            cluster.priority_fee,
        );

        Some(Self {
            owner,
            rpc,
            launchpad,
        })
    }
}
