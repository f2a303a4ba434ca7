//! Instruction for creating the owner's associated token account

use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use spl_associated_token_account::instruction::create_associated_token_account;

use crate::{constants, error::ClientError, utils::get_associated_token_address};

/// Creates an instruction to create the associated token account of `owner` for `mint`
///
/// The owner pays for the account and owns it.
///
/// # Arguments
///
/// * `owner` - Wallet funding and owning the account
/// * `mint` - Token-2022 mint the account holds
/// * `associated` - Expected address of the account, as derived by the caller
///
/// # Errors
///
/// Returns `ClientError::Construction` if `associated` is not the canonical associated token
/// account of `(mint, owner)`.
pub fn create_holding_account(
    owner: &Pubkey,
    mint: &Pubkey,
    associated: &Pubkey,
) -> Result<Instruction, ClientError> {
    let program_id = &constants::accounts::TOKEN_2022_PROGRAM;
    let derived = get_associated_token_address(mint, owner, program_id);
    if derived != *associated {
        return Err(ClientError::Construction(format!(
            "Associated account {} does not match derived address {}",
            associated, derived
        )));
    }

    Ok(create_associated_token_account(
        owner, owner, mint, program_id,
    ))
}
