//! Sizing of a Token-2022 mint account
//!
//! A mint carrying embedded metadata is created in two steps: the account is allocated with
//! room for the base mint and its fixed-size extensions, then the metadata initialize
//! instruction grows it by the metadata TLV entry. The rent-exempt balance must therefore be
//! priced on the final size before the account is created.

use spl_token_2022::{extension::ExtensionType, state::Mint};
use tracing::debug;

use crate::{capabilities::Network, constants, error::ClientError};

/// Sizes and rent of a mint account with embedded metadata
///
/// # Fields
///
/// * `mint_space` - Bytes allocated when the account is created (base mint plus extensions)
/// * `metadata_space` - Bytes added by the metadata TLV entry (header plus payload)
/// * `rent_exempt_lamports` - Balance that keeps the final account rent exempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSizing {
    pub mint_space: usize,
    pub metadata_space: usize,
    pub rent_exempt_lamports: u64,
}

impl AccountSizing {
    /// Computes the allocated and metadata sizes without pricing them
    ///
    /// # Arguments
    ///
    /// * `extensions` - Mint extensions initialized before the mint itself
    /// * `metadata` - Encoded metadata record, see [`MintMetadataRecord::encode`](super::MintMetadataRecord::encode)
    ///
    /// # Returns
    ///
    /// `(mint_space, metadata_space)`
    pub fn space(
        extensions: &[ExtensionType],
        metadata: &[u8],
    ) -> Result<(usize, usize), ClientError> {
        let mint_space = ExtensionType::try_calculate_account_len::<Mint>(extensions)?;
        let metadata_space = constants::TYPE_SIZE + constants::LENGTH_SIZE + metadata.len();
        Ok((mint_space, metadata_space))
    }

    /// Computes the sizes and asks the network for the rent-exempt balance of their sum
    ///
    /// # Errors
    ///
    /// Returns an error if the extension set has no valid layout, or if the rent query fails.
    /// Failed queries are not retried: a stale threshold could leave the mint under-funded.
    pub async fn compute(
        network: &dyn Network,
        extensions: &[ExtensionType],
        metadata: &[u8],
    ) -> Result<Self, ClientError> {
        let (mint_space, metadata_space) = Self::space(extensions, metadata)?;
        let rent_exempt_lamports = network
            .get_minimum_balance_for_rent_exemption(mint_space + metadata_space)
            .await?;

        debug!(
            mint_space,
            metadata_space,
            rent_exempt_lamports,
            "Computed mint account sizing"
        );

        Ok(Self {
            mint_space,
            metadata_space,
            rent_exempt_lamports,
        })
    }

    /// Final size of the mint once metadata is written
    pub fn total_space(&self) -> usize {
        self.mint_space + self.metadata_space
    }
}
