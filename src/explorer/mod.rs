mod blockstream;
mod config;
pub mod error;
mod http;

use async_trait::async_trait;

use crate::{fees::Estimation, tx::Transaction, utxo::Utxo};

pub use blockstream::*;
pub use config::*;
pub use error::ExplorerError;
pub use http::*;

/// Read and broadcast access to a block explorer.
#[async_trait]
pub trait Explorer: Send + Sync {
    /// Status code of a liveness probe, `0` when the explorer could not be reached.
    async fn ping(&self) -> u16;

    /// Unspent outputs of `address` in explorer order, confidential ones fully resolved.
    async fn get_unspents(&self, address: &str) -> Result<Vec<Utxo>, ExplorerError>;

    async fn get_transaction(&self, hash: &str) -> Result<Transaction, ExplorerError>;

    async fn get_transaction_hex(&self, hash: &str) -> Result<String, ExplorerError>;

    /// Submits a signed transaction and returns its id.
    async fn broadcast(&self, tx_hex: &str) -> Result<String, ExplorerError>;

    async fn estimate_fees(&self) -> Result<Estimation, ExplorerError>;
}
