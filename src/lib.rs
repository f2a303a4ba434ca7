#![doc = include_str!("../RUSTDOC.md")]

pub mod accounts;
pub mod capabilities;
pub mod common;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod utils;

use accounts::{AccountSizing, MintMetadataRecord};
use capabilities::{KeypairWallet, Network, Wallet};
use common::types::{Cluster, LaunchState, PriorityFee, TokenIntent, TokenLaunch};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    hash::Hash,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
};
use spl_token_2022::extension::ExtensionType;
use std::sync::Arc;
use tracing::{info, warn};
use utils::transaction::{get_transaction_offline_prepared, submit_phase};

/// Main client for launching Token-2022 tokens
///
/// A launch creates a mint with embedded metadata, the owner's associated token account, and
/// mints the initial supply into it, as three transactions submitted one after another. The
/// client holds no ambient state: the owner's wallet and the network are injected capabilities.
///
/// # Examples
///
/// ```no_run
/// use token_launchpad::{Launchpad, common::types::{Cluster, PriorityFee}};
/// use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair};
/// use std::sync::Arc;
///
/// // Create a new client connected to devnet, signing with a local keypair
/// let owner = Arc::new(Keypair::new());
/// let cluster = Cluster::devnet(CommitmentConfig::confirmed(), PriorityFee::default());
/// let launchpad = Launchpad::new(owner, cluster);
/// ```
pub struct Launchpad {
    /// Wallet of the token owner, pays for and signs every phase
    pub wallet: Arc<dyn Wallet>,
    /// Network used for rent, blockhash and submission
    pub network: Arc<dyn Network>,
    /// Priority fee prepended to each phase
    pub priority_fee: PriorityFee,
}

impl Launchpad {
    /// Creates a client that signs with `owner` and talks to `cluster` over RPC
    pub fn new(owner: Arc<Keypair>, cluster: Cluster) -> Self {
        // Create Solana RPC Client with HTTP endpoint
        let rpc = Arc::new(RpcClient::new_with_commitment(
            cluster.rpc_url.clone(),
            cluster.commitment,
        ));

        Self {
            wallet: Arc::new(KeypairWallet::new(owner)),
            network: rpc,
            priority_fee: cluster.priority_fee,
        }
    }

    /// Creates a client from arbitrary wallet and network capabilities
    pub fn with_capabilities(
        wallet: Arc<dyn Wallet>,
        network: Arc<dyn Network>,
        priority_fee: PriorityFee,
    ) -> Self {
        Self {
            wallet,
            network,
            priority_fee,
        }
    }

    /// Launches a token under a freshly generated mint address
    ///
    /// See [`create_token`](Self::create_token).
    pub async fn launch(&self, intent: &TokenIntent) -> Result<TokenLaunch, error::ClientError> {
        self.create_token(Keypair::new(), intent).await
    }

    /// Creates a token, its owner's associated token account, and mints the initial supply
    ///
    /// The three phases are submitted strictly in order, each only after the previous
    /// submission returned successfully:
    /// 1. Create the mint account, initialize its metadata pointer and mint, write metadata
    /// 2. Create the owner's associated token account
    /// 3. Mint `intent.initial_supply` base units into it
    ///
    /// Submissions are not confirmed. The mint keypair co-signs phase 1 and is dropped afterwards.
    ///
    /// # Arguments
    ///
    /// * `mint` - Keypair of the new mint account
    /// * `intent` - Name, symbol, URI, decimals and base-unit supply of the token
    ///
    /// # Returns
    ///
    /// The addresses, sizing and submission signatures of the launch
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No wallet is connected (`NoWallet`, before any network call)
    /// - Metadata cannot be encoded or instructions cannot be built
    /// - Phase 1 fails to be submitted (the error is returned as is)
    /// - Phase 2 or 3 fails (`Incomplete`, carrying the last reached `LaunchState`). Nothing is
    ///   rolled back.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use token_launchpad::{Launchpad, common::types::{Cluster, PriorityFee, TokenIntent}};
    /// # use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair};
    /// # use std::sync::Arc;
    /// #
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let owner = Arc::new(Keypair::new());
    /// # let cluster = Cluster::devnet(CommitmentConfig::confirmed(), PriorityFee::default());
    /// # let launchpad = Launchpad::new(owner, cluster);
    /// let intent = TokenIntent::new("Kira", "KIR", "https://cdn.example/metadata.json", 9, 1_000_000_000);
    ///
    /// let launch = launchpad.create_token(Keypair::new(), &intent).await?;
    /// println!("Mint: {}", launch.mint);
    /// println!("Associated account: {}", launch.associated_account);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create_token(
        &self,
        mint: Keypair,
        intent: &TokenIntent,
    ) -> Result<TokenLaunch, error::ClientError> {
        let owner = self.wallet.pubkey().ok_or(error::ClientError::NoWallet)?;
        let mint_pubkey = mint.pubkey();

        let (sizing, create_mint_signature) = self.submit_create_mint(&owner, mint, intent).await?;
        let mut state = LaunchState::Created;

        let incomplete = |state: LaunchState, err: error::ClientError| {
            warn!(mint = %mint_pubkey, %state, error = %err, "Token launch left incomplete");
            error::ClientError::Incomplete {
                state,
                mint: mint_pubkey,
                source: Box::new(err),
            }
        };

        let (associated_account, create_account_signature) = self
            .submit_create_holding_account(&owner, &mint_pubkey)
            .await
            .map_err(|err| incomplete(state, err))?;
        state = LaunchState::AccountCreated;

        let mint_to_signature = self
            .submit_mint_to(&owner, &mint_pubkey, &associated_account, intent.initial_supply)
            .await
            .map_err(|err| incomplete(state, err))?;
        state = LaunchState::Minted;

        info!(mint = %mint_pubkey, %state, "Token launched");

        Ok(TokenLaunch {
            mint: mint_pubkey,
            owner,
            associated_account,
            sizing,
            create_mint_signature,
            create_account_signature,
            mint_to_signature,
        })
    }

    /// Submits phase 1: creates and initializes the mint with its metadata
    ///
    /// Consumes the mint keypair; it is not needed once the account exists.
    pub async fn submit_create_mint(
        &self,
        owner: &Pubkey,
        mint: Keypair,
        intent: &TokenIntent,
    ) -> Result<(AccountSizing, Signature), error::ClientError> {
        let (sizing, create_ixs) = self
            .get_create_mint_instructions(owner, &mint.pubkey(), intent)
            .await?;

        let mut instructions = Self::get_priority_fee_instructions(&self.priority_fee);
        instructions.extend(create_ixs);

        let signature = submit_phase(
            self.wallet.as_ref(),
            self.network.as_ref(),
            &instructions,
            Some(&[&mint]),
        )
        .await?;

        info!(mint = %mint.pubkey(), %signature, "Submitted mint creation");
        Ok((sizing, signature))
    }

    /// Submits phase 2: creates the owner's associated token account
    ///
    /// # Returns
    ///
    /// The associated token account address and the submission signature
    pub async fn submit_create_holding_account(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
    ) -> Result<(Pubkey, Signature), error::ClientError> {
        let associated = Self::get_associated_token_address(mint, owner);

        let mut instructions = Self::get_priority_fee_instructions(&self.priority_fee);
        instructions.push(instructions::create_holding_account(
            owner,
            mint,
            &associated,
        )?);

        let signature = submit_phase(
            self.wallet.as_ref(),
            self.network.as_ref(),
            &instructions,
            None,
        )
        .await?;

        info!(%mint, %associated, %signature, "Submitted associated account creation");
        Ok((associated, signature))
    }

    /// Submits phase 3: mints `amount` base units into `associated`, with `owner` as authority
    pub async fn submit_mint_to(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
        associated: &Pubkey,
        amount: u64,
    ) -> Result<Signature, error::ClientError> {
        let mut instructions = Self::get_priority_fee_instructions(&self.priority_fee);
        instructions.push(instructions::mint_to(mint, associated, owner, amount)?);

        let signature = submit_phase(
            self.wallet.as_ref(),
            self.network.as_ref(),
            &instructions,
            None,
        )
        .await?;

        info!(%mint, %associated, amount, %signature, "Submitted initial mint");
        Ok(signature)
    }

    /// Builds the phase 1 instructions, sizing the mint from the exact metadata written
    ///
    /// The metadata record uses `owner` as update authority. Rent is fetched from the network,
    /// only once the phase is known to fit in a single transaction.
    ///
    /// # Returns
    ///
    /// The mint sizing and the ordered instructions, without priority fee instructions
    pub async fn get_create_mint_instructions(
        &self,
        owner: &Pubkey,
        mint: &Pubkey,
        intent: &TokenIntent,
    ) -> Result<(AccountSizing, Vec<Instruction>), error::ClientError> {
        let record = MintMetadataRecord::new(*mint, *owner, intent);
        let metadata = record.encode()?;

        // Reject a phase 1 that cannot fit in a packet before paying for a rent query. Lamports
        // and space are fixed width, so an unpriced sizing serializes to the same length.
        let (mint_space, metadata_space) =
            AccountSizing::space(&[ExtensionType::MetadataPointer], &metadata)?;
        let unpriced = AccountSizing {
            mint_space,
            metadata_space,
            rent_exempt_lamports: 0,
        };
        let mut sized_ixs = Self::get_priority_fee_instructions(&self.priority_fee);
        sized_ixs.extend(instructions::create_mint(
            owner,
            mint,
            &unpriced,
            intent.decimals,
            &record,
        )?);
        get_transaction_offline_prepared(&Hash::default(), owner, &sized_ixs, None)?;

        let sizing = AccountSizing::compute(
            self.network.as_ref(),
            &[ExtensionType::MetadataPointer],
            &metadata,
        )
        .await?;

        let instructions =
            instructions::create_mint(owner, mint, &sizing, intent.decimals, &record)?;
        Ok((sizing, instructions))
    }

    /// Generates instructions for setting priority fees on transactions
    ///
    /// # Returns
    ///
    /// Compute budget instructions, empty if no priority fee parameters are set
    ///
    /// # Examples
    ///
    /// ```
    /// # use token_launchpad::{Launchpad, common::types::PriorityFee};
    /// let priority_fee = PriorityFee::new(Some(200_000), Some(1_000));
    /// let instructions = Launchpad::get_priority_fee_instructions(&priority_fee);
    /// assert_eq!(instructions.len(), 2);
    /// ```
    pub fn get_priority_fee_instructions(priority_fee: &PriorityFee) -> Vec<Instruction> {
        let mut instructions = Vec::new();

        if let Some(limit) = priority_fee.unit_limit {
            instructions.push(ComputeBudgetInstruction::set_compute_unit_limit(limit));
        }

        if let Some(price) = priority_fee.unit_price {
            instructions.push(ComputeBudgetInstruction::set_compute_unit_price(price));
        }

        instructions
    }

    /// Gets the Token-2022 associated token account of `owner` for `mint`
    pub fn get_associated_token_address(mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        utils::get_associated_token_address(
            mint,
            owner,
            &constants::accounts::TOKEN_2022_PROGRAM,
        )
    }
}
