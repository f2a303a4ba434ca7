//! Capabilities a token launch depends on
//!
//! The launch never reaches for ambient wallet or connection state. Instead it is handed:
//!
//! - `Network`: Rent and blockhash queries, and raw transaction submission.
//! - `Wallet`: The owner's public key and a way to sign and submit transactions.
//! - `Confirmer`: Optional confirmation polling, kept outside the submission path.
//!
//! Each capability is implemented for the nonblocking Solana `RpcClient` or a local keypair, and
//! can be replaced by any other implementation, e.g. in tests.

mod confirm;
mod network;
mod wallet;

pub use confirm::*;
pub use network::*;
pub use wallet::*;
