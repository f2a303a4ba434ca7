//! Account layouts for a Token-2022 launch
//!
//! This module describes the data a launch writes into the mint account.
//!
//! # Accounts
//!
//! - `MintMetadataRecord`: The token metadata embedded in the mint, and its encoding.
//! - `AccountSizing`: The allocated size, metadata size and rent of the mint account.

mod metadata;
mod mint;

pub use metadata::*;
pub use mint::*;
