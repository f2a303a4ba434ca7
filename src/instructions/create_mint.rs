//! Instructions for creating a Token-2022 mint with embedded metadata
//!
//! This module builds the first launch phase: the mint account is allocated, its metadata
//! pointer extension and base mint are initialized, and the metadata record is written into it.

use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_instruction};
use spl_token_2022::extension::metadata_pointer;
use spl_token_metadata_interface::{instruction as token_metadata, state::Field};

use crate::{
    accounts::{AccountSizing, MintMetadataRecord},
    constants,
    error::ClientError,
};

/// Creates the instructions that allocate and initialize a mint with embedded metadata
///
/// The order is fixed, each instruction relies on the layout left by its predecessor:
/// 1. System `create_account` allocating `mint_space` bytes funded for the final size
/// 2. Metadata pointer `initialize`, pointing the mint at itself
/// 3. `initialize_mint` with `owner` as mint authority and no freeze authority
/// 4. Token metadata `initialize` writing name, symbol and URI
/// 5. One `update_field` per additional metadata pair, in record order
///
/// # Arguments
///
/// * `owner` - Wallet paying for the mint, mint authority and metadata update authority
/// * `mint` - Address of the new mint; its keypair must co-sign
/// * `sizing` - Sizing computed from `record`
/// * `decimals` - Decimals of the mint
/// * `record` - Metadata written into the mint
///
/// # Errors
///
/// Returns `ClientError::Construction` if the record belongs to another mint, if `owner` and
/// `mint` coincide, or if a program instruction cannot be built.
pub fn create_mint(
    owner: &Pubkey,
    mint: &Pubkey,
    sizing: &AccountSizing,
    decimals: u8,
    record: &MintMetadataRecord,
) -> Result<Vec<Instruction>, ClientError> {
    if owner == mint {
        return Err(ClientError::Construction(
            "Mint address must differ from the owner".to_string(),
        ));
    }
    if record.mint != *mint {
        return Err(ClientError::Construction(format!(
            "Metadata record belongs to mint {}, expected {}",
            record.mint, mint
        )));
    }

    let program_id = &constants::accounts::TOKEN_2022_PROGRAM;
    let update_authority = record.update_authority.unwrap_or(*owner);

    let mut instructions = Vec::with_capacity(4 + record.additional_metadata.len());

    instructions.push(system_instruction::create_account(
        owner,
        mint,
        sizing.rent_exempt_lamports,
        sizing.mint_space as u64,
        program_id,
    ));

    instructions.push(metadata_pointer::instruction::initialize(
        program_id,
        mint,
        Some(*owner),
        Some(*mint),
    )?);

    instructions.push(spl_token_2022::instruction::initialize_mint(
        program_id, mint, owner, None, decimals,
    )?);

    instructions.push(token_metadata::initialize(
        program_id,
        mint,
        &update_authority,
        mint,
        owner,
        record.name.clone(),
        record.symbol.clone(),
        record.uri.clone(),
    ));

    for (key, value) in &record.additional_metadata {
        instructions.push(token_metadata::update_field(
            program_id,
            mint,
            &update_authority,
            Field::Key(key.clone()),
            value.clone(),
        ));
    }

    Ok(instructions)
}
