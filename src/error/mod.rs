//! Error types for the token launchpad SDK.
//!
//! This module defines the `ClientError` enum, which covers every way a token launch can fail:
//! a missing wallet, metadata that cannot be encoded, instructions that cannot be built, RPC
//! failures, wallet signing failures, and launches that stopped after the mint already existed.
//!
//! # Error Types
//!
//! - `NoWallet`: No wallet is connected, so nothing can be signed or paid for.
//! - `Encoding`: The token metadata cannot be represented in the on-chain metadata format.
//! - `Construction`: An instruction or transaction could not be assembled from the given inputs.
//! - `Network`: An error occurred while talking to the Solana RPC node.
//! - `Wallet`: The wallet failed to sign a transaction.
//! - `Incomplete`: A later phase failed after the mint account was already submitted.

use solana_sdk::{program_error::ProgramError, pubkey::Pubkey};

use crate::common::types::LaunchState;

#[derive(Debug)]
pub enum ClientError {
    /// No wallet is connected
    NoWallet,
    /// Metadata is not representable in the token-metadata layout
    Encoding(String),
    /// Malformed input while building instructions or transactions
    Construction(String),
    /// Error from Solana RPC client
    Network(solana_client::client_error::ClientError),
    /// Wallet failed to sign
    Wallet(String),
    /// A phase after mint creation failed; the chain holds a partially launched token
    Incomplete {
        /// Last phase that was submitted successfully
        state: LaunchState,
        /// Address of the mint that already exists
        mint: Pubkey,
        /// Error raised by the failing phase
        source: Box<ClientError>,
    },
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoWallet => write!(f, "Connect your wallet first"),
            Self::Encoding(msg) => write!(f, "Metadata encoding error: {}", msg),
            Self::Construction(msg) => write!(f, "Instruction construction error: {}", msg),
            Self::Network(err) => write!(f, "Solana client error: {}", err),
            Self::Wallet(msg) => write!(f, "Wallet error: {}", msg),
            Self::Incomplete {
                state,
                mint,
                source,
            } => write!(
                f,
                "Token launch for mint {} stopped after {}: {}",
                mint, state, source
            ),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Network(err) => Some(err),
            Self::Incomplete { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        Self::Network(err)
    }
}

impl From<ProgramError> for ClientError {
    fn from(err: ProgramError) -> Self {
        Self::Construction(err.to_string())
    }
}

impl ClientError {
    /// Returns the launch state reached before this error, if the mint already exists
    pub fn launch_state(&self) -> Option<LaunchState> {
        match self {
            Self::Incomplete { state, .. } => Some(*state),
            _ => None,
        }
    }
}
