use elements::{confidential::Nonce, encode};

use super::entity::RawOutput;
use crate::explorer::error::ExplorerError;

pub trait TransactionParser: Send + Sync {
    fn parse_outputs(&self, tx_hex: &str) -> Result<Vec<RawOutput>, ExplorerError>;
}

/// Parses Elements (Liquid) consensus-encoded transactions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ElementsTxParser;

impl TransactionParser for ElementsTxParser {
    fn parse_outputs(&self, tx_hex: &str) -> Result<Vec<RawOutput>, ExplorerError> {
        let bytes = hex::decode(tx_hex.trim())?;
        let tx: elements::Transaction = encode::deserialize(&bytes)?;
        Ok(tx.output.iter().map(raw_output).collect())
    }
}

fn raw_output(out: &elements::TxOut) -> RawOutput {
    let nonce = match &out.nonce {
        Nonce::Null => Vec::new(),
        nonce => encode::serialize(nonce),
    };
    RawOutput {
        script: out.script_pubkey.to_bytes(),
        nonce,
        range_proof: out
            .witness
            .rangeproof
            .as_ref()
            .map(|proof| proof.serialize())
            .unwrap_or_default(),
        surjection_proof: out
            .witness
            .surjection_proof
            .as_ref()
            .map(|proof| proof.serialize())
            .unwrap_or_default(),
    }
}
