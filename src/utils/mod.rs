//! Utilities for the token launchpad SDK
//!
//! - `address`: Associated token account derivation.
//! - `transaction`: Assembly, co-signing and submission of a launch phase.

pub mod address;
pub mod transaction;

pub use address::get_associated_token_address;

use crate::error::ClientError;

/// Scales a whole-token amount to base units, `amount * 10^decimals`
///
/// Launches never scale on their own: [`TokenIntent::initial_supply`](crate::common::types::TokenIntent)
/// is taken as base units. Integrators collecting whole tokens call this first.
///
/// # Errors
///
/// Returns `ClientError::Construction` if the result does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// # use token_launchpad::utils::to_base_units;
/// assert_eq!(to_base_units(1, 9).unwrap(), 1_000_000_000);
/// ```
pub fn to_base_units(amount: u64, decimals: u8) -> Result<u64, ClientError> {
    10u64
        .checked_pow(decimals as u32)
        .and_then(|scale| amount.checked_mul(scale))
        .ok_or_else(|| {
            ClientError::Construction(format!(
                "{} tokens with {} decimals overflow the supply",
                amount, decimals
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base_units() {
        assert_eq!(to_base_units(0, 9).unwrap(), 0);
        assert_eq!(to_base_units(21, 0).unwrap(), 21);
        assert_eq!(to_base_units(1_000, 6).unwrap(), 1_000_000_000);
    }

    #[test]
    fn test_to_base_units_overflow() {
        assert!(matches!(
            to_base_units(u64::MAX, 1),
            Err(ClientError::Construction(_))
        ));
        assert!(to_base_units(1, 20).is_err());
    }
}
