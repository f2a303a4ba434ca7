use solana_sdk::{
    hash::Hash,
    instruction::Instruction,
    packet::PACKET_DATA_SIZE,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    transaction::Transaction,
};
use tracing::debug;

use crate::{
    capabilities::{Network, Wallet},
    error::ClientError,
};

/// Assembles, signs and submits one launch phase
///
/// Fetches a fresh blockhash, builds a transaction paid for by the wallet owner, partially
/// signs it with `additional_signers`, then hands it to the wallet which adds the owner's
/// signature and submits it. Confirmation is not awaited.
///
/// # Arguments
///
/// * `wallet` - Owner wallet, fee payer of the transaction
/// * `network` - Network used for the blockhash and passed on to the wallet for submission
/// * `instructions` - Instructions of the phase, in execution order
/// * `additional_signers` - Keypairs that must co-sign besides the owner
///
/// # Returns
///
/// The signature identifying the submitted transaction
///
/// # Errors
///
/// Returns an error if:
/// - No wallet is connected
/// - The blockhash cannot be fetched
/// - The transaction cannot be built or co-signed
/// - The wallet fails to sign or submit
pub async fn submit_phase(
    wallet: &dyn Wallet,
    network: &dyn Network,
    instructions: &[Instruction],
    additional_signers: Option<&[&Keypair]>,
) -> Result<Signature, ClientError> {
    let payer = wallet.pubkey().ok_or(ClientError::NoWallet)?;

    let transaction = get_transaction(network, &payer, instructions, additional_signers).await?;

    wallet.send_transaction(transaction, network).await
}

/// Builds a partially signed transaction with a freshly fetched blockhash
///
/// Only `additional_signers` sign here; the payer's signature slot stays empty for the wallet.
pub async fn get_transaction(
    network: &dyn Network,
    payer: &Pubkey,
    instructions: &[Instruction],
    additional_signers: Option<&[&Keypair]>,
) -> Result<Transaction, ClientError> {
    // Get recent blockhash for transaction validity window
    let recent_blockhash = network.get_latest_blockhash().await?;
    debug!(%recent_blockhash, "Fetched recent blockhash");

    get_transaction_offline_prepared(&recent_blockhash, payer, instructions, additional_signers)
}

/// Builds a partially signed transaction from an already known blockhash
///
/// # Errors
///
/// Returns `ClientError::Construction` if there are no instructions, a signer is not required
/// by the message, or the serialized transaction does not fit in a single packet.
pub fn get_transaction_offline_prepared(
    recent_blockhash: &Hash,
    payer: &Pubkey,
    instructions: &[Instruction],
    additional_signers: Option<&[&Keypair]>,
) -> Result<Transaction, ClientError> {
    if instructions.is_empty() {
        return Err(ClientError::Construction(
            "Transaction has no instructions".to_string(),
        ));
    }

    let mut transaction = Transaction::new_with_payer(instructions, Some(payer));
    transaction.message.recent_blockhash = *recent_blockhash;

    if let Some(signers) = additional_signers {
        transaction
            .try_partial_sign(signers, *recent_blockhash)
            .map_err(|err| {
                ClientError::Construction(format!("Failed to sign transaction: {}", err))
            })?;
    }

    // Signature slots are serialized whether filled or not
    let size = bincode::serialized_size(&transaction)
        .map_err(|err| ClientError::Construction(format!("Failed to size transaction: {}", err)))?;
    if size > PACKET_DATA_SIZE as u64 {
        return Err(ClientError::Construction(format!(
            "Transaction is {} bytes, at most {} fit in a packet",
            size, PACKET_DATA_SIZE
        )));
    }

    Ok(transaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::{instruction::AccountMeta, signer::Signer, system_instruction};

    #[test]
    fn test_offline_prepared_leaves_payer_unsigned() {
        let payer = Pubkey::new_unique();
        let mint = Keypair::new();
        let blockhash = Hash::new_unique();
        let ix = system_instruction::create_account(
            &payer,
            &mint.pubkey(),
            1,
            82,
            &spl_token_2022::ID,
        );

        let transaction =
            get_transaction_offline_prepared(&blockhash, &payer, &[ix], Some(&[&mint])).unwrap();

        assert_eq!(transaction.message.recent_blockhash, blockhash);
        assert_eq!(transaction.message.account_keys[0], payer);
        assert_eq!(transaction.signatures[0], Signature::default());
        assert_ne!(transaction.signatures[1], Signature::default());
        assert!(!transaction.is_signed());
    }

    #[test]
    fn test_offline_prepared_rejects_unrelated_signer() {
        let payer = Pubkey::new_unique();
        let ix = system_instruction::transfer(&payer, &Pubkey::new_unique(), 1);

        let result = get_transaction_offline_prepared(
            &Hash::new_unique(),
            &payer,
            &[ix],
            Some(&[&Keypair::new()]),
        );

        assert!(matches!(result, Err(ClientError::Construction(_))));
    }

    #[test]
    fn test_offline_prepared_rejects_empty_transaction() {
        let result =
            get_transaction_offline_prepared(&Hash::new_unique(), &Pubkey::new_unique(), &[], None);

        assert!(matches!(result, Err(ClientError::Construction(_))));
    }

    #[test]
    fn test_offline_prepared_rejects_transaction_over_packet_size() {
        let payer = Pubkey::new_unique();
        let instruction = |len: usize| {
            Instruction::new_with_bytes(
                spl_token_2022::ID,
                &vec![0u8; len],
                vec![AccountMeta::new(payer, true)],
            )
        };

        let fits = get_transaction_offline_prepared(
            &Hash::new_unique(),
            &payer,
            &[instruction(900)],
            None,
        )
        .unwrap();
        assert!(bincode::serialized_size(&fits).unwrap() <= PACKET_DATA_SIZE as u64);

        let result = get_transaction_offline_prepared(
            &Hash::new_unique(),
            &payer,
            &[instruction(PACKET_DATA_SIZE)],
            None,
        );
        assert!(matches!(result, Err(ClientError::Construction(_))));
    }
}
