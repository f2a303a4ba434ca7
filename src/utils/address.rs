use solana_sdk::pubkey::Pubkey;
use spl_associated_token_account::get_associated_token_address_with_program_id;

/// Derives the associated token account of `owner` for `mint`
///
/// The address is the program derived address of the associated token account program with
/// seeds `[owner, token_program_id, mint]`. No network call is made; the account may or may
/// not exist yet.
///
/// # Arguments
///
/// * `mint` - Public key of the token mint
/// * `owner` - Public key of the wallet owning the holding account
/// * `token_program_id` - Token program owning the mint, e.g. Token-2022
///
/// # Examples
///
/// ```
/// # use token_launchpad::{constants, utils::get_associated_token_address};
/// # use solana_sdk::pubkey::Pubkey;
/// #
/// let mint = Pubkey::new_unique();
/// let owner = Pubkey::new_unique();
/// let ata = get_associated_token_address(&mint, &owner, &constants::accounts::TOKEN_2022_PROGRAM);
/// println!("Associated token account: {}", ata);
/// ```
pub fn get_associated_token_address(
    mint: &Pubkey,
    owner: &Pubkey,
    token_program_id: &Pubkey,
) -> Pubkey {
    get_associated_token_address_with_program_id(owner, mint, token_program_id)
}
