use serde::{Deserialize, Serialize};

/// Transaction metadata as returned by `GET /tx/{hash}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: String,
    pub version: u32,
    pub locktime: u32,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub weight: u64,
    #[serde(default)]
    pub fee: u64,
    #[serde(default)]
    pub vin: Vec<TxInput>,
    #[serde(default)]
    pub vout: Vec<TxOutput>,
    #[serde(default)]
    pub status: TxStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub is_coinbase: bool,
    #[serde(default)]
    pub is_pegin: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    #[serde(default)]
    pub scriptpubkey: String,
    #[serde(default)]
    pub scriptpubkey_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scriptpubkey_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valuecommitment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assetcommitment: Option<String>,
}

impl TxOutput {
    pub fn is_confidential(&self) -> bool {
        self.valuecommitment.is_some() && self.assetcommitment.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxStatus {
    pub confirmed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<u64>,
}

/// Proof material of a single output, as found in the raw transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOutput {
    pub script: Vec<u8>,
    pub nonce: Vec<u8>,
    pub range_proof: Vec<u8>,
    pub surjection_proof: Vec<u8>,
}

impl RawOutput {
    /// Name of the first empty field, if any.
    pub fn first_missing(&self) -> Option<&'static str> {
        if self.script.is_empty() {
            Some("script")
        } else if self.nonce.is_empty() {
            Some("nonce")
        } else if self.range_proof.is_empty() {
            Some("range_proof")
        } else if self.surjection_proof.is_empty() {
            Some("surjection_proof")
        } else {
            None
        }
    }
}
