//! Instructions for launching a Token-2022 token
//!
//! This module builds the instructions of the three launch phases.
//!
//! # Instructions
//!
//! - `create_mint`: Allocates the mint, initializes its metadata pointer and mint state, and writes its metadata.
//! - `create_holding_account`: Creates the owner's associated token account for the mint.
//! - `mint_to`: Mints the initial supply into the associated token account.

mod create_holding_account;
mod create_mint;
mod mint_to;

pub use create_holding_account::*;
pub use create_mint::*;
pub use mint_to::*;
