//! Token metadata embedded in a Token-2022 mint
//!
//! This module contains the record written into the mint by the token-metadata `initialize`
//! instruction, and its canonical byte encoding.
//!
//! # Layout
//!
//! The encoding is the Token-2022 token-metadata layout, serialized with Borsh:
//!
//! - `update_authority`: 32 bytes, all zeroes when there is no update authority
//! - `mint`: 32 bytes
//! - `name`, `symbol`, `uri`: u32 little-endian length followed by UTF-8 bytes
//! - `additional_metadata`: u32 little-endian count followed by `(key, value)` string pairs
//!
//! Inside the mint account the payload is prefixed by a TLV header of
//! [`TYPE_SIZE`](crate::constants::TYPE_SIZE) + [`LENGTH_SIZE`](crate::constants::LENGTH_SIZE) bytes.

use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::pubkey::Pubkey;

use crate::{common::types::TokenIntent, constants, error::ClientError};

/// Wire representation; a zeroed update authority stands for `None`
#[derive(BorshSerialize, BorshDeserialize)]
struct MetadataLayout {
    update_authority: Pubkey,
    mint: Pubkey,
    name: String,
    symbol: String,
    uri: String,
    additional_metadata: Vec<(String, String)>,
}

/// Descriptive record of a token, as stored inside its mint account
///
/// # Fields
///
/// * `update_authority` - Authority allowed to change the metadata, if any
/// * `mint` - Mint the metadata belongs to
/// * `name` - Name of the token
/// * `symbol` - Symbol/ticker of the token
/// * `uri` - URI pointing to richer off-chain metadata
/// * `additional_metadata` - Extra key/value attributes, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MintMetadataRecord {
    pub update_authority: Option<Pubkey>,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub additional_metadata: Vec<(String, String)>,
}

impl MintMetadataRecord {
    /// Builds the record for a launch, with `owner` as update authority
    ///
    /// Extra attributes of the intent are carried over in order.
    pub fn new(mint: Pubkey, owner: Pubkey, intent: &TokenIntent) -> Self {
        Self {
            update_authority: Some(owner),
            mint,
            name: intent.name.clone(),
            symbol: intent.symbol.clone(),
            uri: intent.uri.clone(),
            additional_metadata: intent.additional_metadata.clone(),
        }
    }

    /// Appends an extra attribute
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_metadata.push((key.into(), value.into()));
        self
    }

    /// Serializes the record into the token-metadata layout
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Encoding` if the record, together with its TLV header, is larger
    /// than a single instruction is allowed to grow the mint account by.
    pub fn encode(&self) -> Result<Vec<u8>, ClientError> {
        let layout = MetadataLayout {
            update_authority: self.update_authority.unwrap_or_default(),
            mint: self.mint,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            additional_metadata: self.additional_metadata.clone(),
        };

        let bytes = borsh::to_vec(&layout).map_err(|err| ClientError::Encoding(err.to_string()))?;

        let tlv_len = constants::TYPE_SIZE + constants::LENGTH_SIZE + bytes.len();
        if tlv_len > constants::MAX_METADATA_TLV_SIZE {
            return Err(ClientError::Encoding(format!(
                "metadata needs {} bytes, at most {} fit in a single initialize",
                tlv_len,
                constants::MAX_METADATA_TLV_SIZE
            )));
        }

        Ok(bytes)
    }

    /// Length of the encoded record, without the TLV header
    pub fn encoded_len(&self) -> Result<usize, ClientError> {
        self.encode().map(|bytes| bytes.len())
    }

    /// Parses a record previously produced by [`encode`](Self::encode)
    pub fn decode(bytes: &[u8]) -> Result<Self, ClientError> {
        let layout = MetadataLayout::try_from_slice(bytes)
            .map_err(|err| ClientError::Encoding(err.to_string()))?;

        Ok(Self {
            update_authority: Some(layout.update_authority).filter(|key| *key != Pubkey::default()),
            mint: layout.mint,
            name: layout.name,
            symbol: layout.symbol,
            uri: layout.uri,
            additional_metadata: layout.additional_metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spl_token_metadata_interface::state::TokenMetadata;

    fn get_record() -> MintMetadataRecord {
        MintMetadataRecord {
            update_authority: Some(Pubkey::new_unique()),
            mint: Pubkey::new_unique(),
            name: "Kira".to_string(),
            symbol: "KIR".to_string(),
            uri: "https://cdn.example/metadata.json".to_string(),
            additional_metadata: vec![],
        }
    }

    #[test]
    fn test_encode_matches_token_metadata_layout() {
        let record = get_record().with_field("website", "https://example.com");
        let bytes = record.encode().unwrap();

        let metadata = TokenMetadata::try_from_slice(&bytes).unwrap();
        let update_authority: Option<Pubkey> = metadata.update_authority.into();
        assert_eq!(update_authority, record.update_authority);
        assert_eq!(metadata.mint, record.mint);
        assert_eq!(metadata.name, record.name);
        assert_eq!(metadata.symbol, record.symbol);
        assert_eq!(metadata.uri, record.uri);
        assert_eq!(metadata.additional_metadata, record.additional_metadata);
    }

    #[test]
    fn test_decode_restores_record() {
        let record = get_record()
            .with_field("twitter", "@kira")
            .with_field("telegram", "t.me/kira");

        let decoded = MintMetadataRecord::decode(&record.encode().unwrap()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_missing_update_authority_is_zeroed() {
        let mut record = get_record();
        record.update_authority = None;

        let bytes = record.encode().unwrap();
        assert_eq!(&bytes[..32], &[0u8; 32]);
        assert_eq!(MintMetadataRecord::decode(&bytes).unwrap().update_authority, None);
    }

    #[test]
    fn test_encoded_len() {
        let record = get_record();
        // two keys, three length prefixed strings, empty vector
        let expected = 32 + 32 + (4 + 4) + (4 + 3) + (4 + record.uri.len()) + 4;
        assert_eq!(record.encoded_len().unwrap(), expected);
    }

    #[test]
    fn test_oversized_metadata_is_rejected() {
        let mut record = get_record();
        record.uri = "x".repeat(constants::MAX_METADATA_TLV_SIZE);

        assert!(matches!(record.encode(), Err(ClientError::Encoding(_))));
    }
}
