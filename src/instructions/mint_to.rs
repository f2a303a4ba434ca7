//! Instruction for minting the initial supply

use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::{constants, error::ClientError};

/// Creates an instruction crediting `amount` base units of `mint` to `destination`
///
/// `amount` is not scaled by the mint's decimals.
///
/// # Arguments
///
/// * `mint` - Token-2022 mint
/// * `destination` - Token account receiving the supply
/// * `authority` - Mint authority, must sign
/// * `amount` - Amount in base units
pub fn mint_to(
    mint: &Pubkey,
    destination: &Pubkey,
    authority: &Pubkey,
    amount: u64,
) -> Result<Instruction, ClientError> {
    let ix = spl_token_2022::instruction::mint_to(
        &constants::accounts::TOKEN_2022_PROGRAM,
        mint,
        destination,
        authority,
        &[],
        amount,
    )?;
    Ok(ix)
}
