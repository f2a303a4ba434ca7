//! Constants used by the token launchpad SDK
//!
//! Program addresses the launch instructions target, and the sizes of the Token-2022
//! type-length-value header that prefixes embedded metadata.

/// Program IDs targeted by the launch instructions
pub mod accounts {
    use solana_sdk::pubkey::Pubkey;

    /// Token-2022 program, owner of the mint and holding accounts
    pub const TOKEN_2022_PROGRAM: Pubkey = spl_token_2022::ID;

    /// Associated token account program
    pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey = spl_associated_token_account::ID;

    /// System program, creates the mint account
    pub const SYSTEM_PROGRAM: Pubkey = solana_sdk::system_program::ID;
}

/// Size of the extension type field in a Token-2022 TLV entry
pub const TYPE_SIZE: usize = 2;

/// Size of the length field in a Token-2022 TLV entry
pub const LENGTH_SIZE: usize = 2;

/// Largest growth a single instruction may apply to an account; the metadata
/// initialize instruction reallocates the mint by the whole TLV entry at once
pub const MAX_METADATA_TLV_SIZE: usize = 10_240;

/// Decimals used when a form does not specify any
pub const DEFAULT_DECIMALS: u8 = 9;
