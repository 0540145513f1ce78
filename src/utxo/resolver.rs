use async_trait::async_trait;
use futures::{stream, StreamExt, TryStreamExt};
use tracing::instrument;

use super::entity::*;
use crate::{
    explorer::error::ExplorerError,
    tx::{ElementsTxParser, TransactionParser},
};

/// Source of parent transactions for confidential entries.
#[async_trait]
pub trait TxHexSource: Send + Sync {
    async fn fetch_tx_hex(&self, txid: &str) -> Result<String, ExplorerError>;
}

/// Completes confidential UTXOs with the proof material of their parent output.
#[derive(Clone, Debug)]
pub struct UtxoResolver<P = ElementsTxParser> {
    parser: P,
    max_concurrent_lookups: usize,
}

impl Default for UtxoResolver {
    fn default() -> Self {
        Self::new(ElementsTxParser, 1)
    }
}

impl<P: TransactionParser> UtxoResolver<P> {
    pub fn new(parser: P, max_concurrent_lookups: usize) -> Self {
        Self {
            parser,
            max_concurrent_lookups: max_concurrent_lookups.max(1),
        }
    }

    /// Resolves every entry, preserving order. Fails as a whole with the
    /// error of the lowest-indexed failing entry.
    #[instrument(name = "utxo_resolver.resolve", skip_all, fields(n_utxos = utxos.len()), err)]
    pub async fn resolve<S: TxHexSource + ?Sized>(
        &self,
        source: &S,
        utxos: Vec<Utxo>,
    ) -> Result<Vec<Utxo>, ExplorerError> {
        stream::iter(utxos)
            .map(|utxo| self.resolve_one(source, utxo))
            .buffered(self.max_concurrent_lookups)
            .try_collect()
            .await
    }

    /// Resolves every entry independently, one result per entry in listing order.
    #[instrument(name = "utxo_resolver.resolve_each", skip_all, fields(n_utxos = utxos.len()))]
    pub async fn resolve_each<S: TxHexSource + ?Sized>(
        &self,
        source: &S,
        utxos: Vec<Utxo>,
    ) -> Vec<Result<Utxo, ExplorerError>> {
        stream::iter(utxos)
            .map(|utxo| self.resolve_one(source, utxo))
            .buffered(self.max_concurrent_lookups)
            .collect()
            .await
    }

    async fn resolve_one<S: TxHexSource + ?Sized>(
        &self,
        source: &S,
        mut utxo: Utxo,
    ) -> Result<Utxo, ExplorerError> {
        if !utxo.is_confidential() {
            return Ok(utxo);
        }

        let tx_hex = source.fetch_tx_hex(&utxo.txid).await?;
        let outputs = self.parser.parse_outputs(&tx_hex)?;
        let n_outputs = outputs.len();
        let output = outputs
            .into_iter()
            .nth(utxo.vout as usize)
            .ok_or_else(|| ExplorerError::OutputIndexOutOfRange {
                txid: utxo.txid.clone(),
                vout: utxo.vout,
                n_outputs,
            })?;
        if let Some(missing) = output.first_missing() {
            return Err(ExplorerError::MissingConfidentialData {
                txid: utxo.txid.clone(),
                vout: utxo.vout,
                missing,
            });
        }

        if let UtxoKind::Confidential(confidential) = &mut utxo.kind {
            confidential.fill_from(output);
        }
        Ok(utxo)
    }
}
