//! Common types for the token launchpad SDK
//!
//! This module provides the types shared across the SDK, including:
//!
//! - Cluster and priority fee configuration for talking to Solana
//! - The token launch inputs, both raw form values and validated intent
//! - The launch saga state and the receipt of a completed launch

use std::fmt;

use serde::{Deserialize, Serialize};
use solana_sdk::{commitment_config::CommitmentConfig, pubkey::Pubkey, signature::Signature};

use crate::{accounts::AccountSizing, constants, error::ClientError};

/// Configuration for priority fee compute unit parameters
///
/// When set, compute budget instructions are prepended to every launch phase.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityFee {
    /// Maximum compute units that can be consumed by the transaction
    pub unit_limit: Option<u32>,
    /// Price in micro-lamports per compute unit
    pub unit_price: Option<u64>,
}

impl PriorityFee {
    pub fn new(unit_limit: Option<u32>, unit_price: Option<u64>) -> Self {
        PriorityFee {
            unit_limit,
            unit_price,
        }
    }
}

/// Configuration for connecting to a Solana cluster
///
/// # Fields
///
/// * `rpc_url` - HTTP endpoint of the cluster's JSON RPC
/// * `commitment` - Commitment level used for blockhash and rent queries
/// * `priority_fee` - Priority fee applied to each launch phase
#[derive(Debug, Clone)]
pub struct Cluster {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub priority_fee: PriorityFee,
}

impl Cluster {
    /// Creates a new cluster configuration with a custom RPC endpoint
    pub fn new(
        rpc_url: impl Into<String>,
        commitment: CommitmentConfig,
        priority_fee: PriorityFee,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            commitment,
            priority_fee,
        }
    }

    /// Solana mainnet-beta
    pub fn mainnet(commitment: CommitmentConfig, priority_fee: PriorityFee) -> Self {
        Self::new("https://api.mainnet-beta.solana.com", commitment, priority_fee)
    }

    /// Solana devnet
    pub fn devnet(commitment: CommitmentConfig, priority_fee: PriorityFee) -> Self {
        Self::new("https://api.devnet.solana.com", commitment, priority_fee)
    }

    /// Solana testnet
    pub fn testnet(commitment: CommitmentConfig, priority_fee: PriorityFee) -> Self {
        Self::new("https://api.testnet.solana.com", commitment, priority_fee)
    }

    /// A local validator on its default port
    pub fn localnet(commitment: CommitmentConfig, priority_fee: PriorityFee) -> Self {
        Self::new("http://localhost:8899", commitment, priority_fee)
    }
}

/// Validated inputs for a single token launch
///
/// # Fields
///
/// * `name` - Name of the token
/// * `symbol` - Symbol/ticker of the token
/// * `uri` - Off-chain metadata URI (image, description, etc.)
/// * `decimals` - Number of decimals of the mint
/// * `initial_supply` - Amount minted to the owner, already expressed in base units
/// * `additional_metadata` - Extra key/value attributes written after the metadata, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenIntent {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub decimals: u8,
    pub initial_supply: u64,
    #[serde(default)]
    pub additional_metadata: Vec<(String, String)>,
}

impl TokenIntent {
    pub fn new(
        name: impl Into<String>,
        symbol: impl Into<String>,
        uri: impl Into<String>,
        decimals: u8,
        initial_supply: u64,
    ) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            uri: uri.into(),
            decimals,
            initial_supply,
            additional_metadata: Vec::new(),
        }
    }

    /// Appends an extra metadata attribute
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_metadata.push((key.into(), value.into()));
        self
    }
}

fn default_decimals() -> u8 {
    constants::DEFAULT_DECIMALS
}

/// Raw values collected by a launch form
///
/// The initial supply arrives as text and is parsed as a base-unit amount. It is never scaled
/// by `decimals`; use [`crate::utils::to_base_units`] when the form collects whole tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenForm {
    pub name: String,
    pub symbol: String,
    #[serde(alias = "image")]
    pub uri: String,
    pub initial_supply: String,
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    #[serde(default)]
    pub additional_metadata: Vec<(String, String)>,
}

impl TokenForm {
    /// Parses form values from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ClientError> {
        serde_json::from_str(json)
            .map_err(|err| ClientError::Construction(format!("Invalid token form: {}", err)))
    }
}

impl TryFrom<TokenForm> for TokenIntent {
    type Error = ClientError;

    fn try_from(form: TokenForm) -> Result<Self, Self::Error> {
        let supply = form.initial_supply.trim();
        let initial_supply = supply.parse::<u64>().map_err(|err| {
            ClientError::Construction(format!("Invalid initial supply {:?}: {}", supply, err))
        })?;

        Ok(Self {
            name: form.name,
            symbol: form.symbol,
            uri: form.uri,
            decimals: form.decimals,
            initial_supply,
            additional_metadata: form.additional_metadata,
        })
    }
}

/// Progress of a launch through its three dependent submissions
///
/// No compensation exists between states: a failure after `Created` leaves a mint without a
/// holding account, a failure after `AccountCreated` leaves an empty holding account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LaunchState {
    /// Mint account created, extended and initialized with metadata
    Created,
    /// Owner's associated token account created
    AccountCreated,
    /// Initial supply minted to the associated token account
    Minted,
}

impl fmt::Display for LaunchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "mint creation"),
            Self::AccountCreated => write!(f, "associated account creation"),
            Self::Minted => write!(f, "initial mint"),
        }
    }
}

/// Receipt of a fully submitted token launch
///
/// Signatures are submission identifiers only; none of them has been confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenLaunch {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub associated_account: Pubkey,
    pub sizing: AccountSizing,
    pub create_mint_signature: Signature,
    pub create_account_signature: Signature,
    pub mint_to_signature: Signature,
}

impl TokenLaunch {
    /// Signatures in submission order
    pub fn signatures(&self) -> [Signature; 3] {
        [
            self.create_mint_signature,
            self.create_account_signature,
            self.mint_to_signature,
        ]
    }
}
