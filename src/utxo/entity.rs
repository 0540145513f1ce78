use serde::{Deserialize, Serialize};

use crate::{explorer::error::ExplorerError, tx::RawOutput};

/// An entry of `GET /address/{address}/utxo` as it comes off the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct UtxoResponse {
    pub txid: String,
    pub vout: u32,
    #[serde(default)]
    pub value: Option<u64>,
    #[serde(default)]
    pub asset: Option<String>,
    #[serde(default)]
    pub valuecommitment: Option<String>,
    #[serde(default)]
    pub assetcommitment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Utxo {
    pub txid: String,
    pub vout: u32,
    #[serde(flatten)]
    pub kind: UtxoKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UtxoKind {
    Plain(PlainUtxo),
    Confidential(ConfidentialUtxo),
}

/// An output with at most one of asset and value blinded. A blinded side
/// keeps its commitment and reads as an empty asset or a zero value.
#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlainUtxo {
    pub asset: String,
    pub value: u64,
    #[serde_as(as = "Option<serde_with::hex::Hex>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_commitment: Option<Vec<u8>>,
    #[serde_as(as = "Option<serde_with::hex::Hex>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_commitment: Option<Vec<u8>>,
}

impl PlainUtxo {
    pub fn new(asset: impl Into<String>, value: u64) -> Self {
        Self {
            asset: asset.into(),
            value,
            ..Default::default()
        }
    }
}

#[serde_with::serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfidentialUtxo {
    #[serde_as(as = "serde_with::hex::Hex")]
    pub asset_commitment: Vec<u8>,
    #[serde_as(as = "serde_with::hex::Hex")]
    pub value_commitment: Vec<u8>,
    #[serde_as(as = "serde_with::hex::Hex")]
    pub script: Vec<u8>,
    #[serde_as(as = "serde_with::hex::Hex")]
    pub nonce: Vec<u8>,
    #[serde_as(as = "serde_with::hex::Hex")]
    pub range_proof: Vec<u8>,
    #[serde_as(as = "serde_with::hex::Hex")]
    pub surjection_proof: Vec<u8>,
}

impl ConfidentialUtxo {
    pub fn is_resolved(&self) -> bool {
        !self.script.is_empty()
            && !self.nonce.is_empty()
            && !self.range_proof.is_empty()
            && !self.surjection_proof.is_empty()
    }

    pub(super) fn fill_from(&mut self, output: RawOutput) {
        self.script = output.script;
        self.nonce = output.nonce;
        self.range_proof = output.range_proof;
        self.surjection_proof = output.surjection_proof;
    }
}

impl Utxo {
    pub fn is_confidential(&self) -> bool {
        matches!(self.kind, UtxoKind::Confidential(_))
    }

    /// Plain entries are always resolved. Confidential ones need all their proof material.
    pub fn is_resolved(&self) -> bool {
        match &self.kind {
            UtxoKind::Plain(_) => true,
            UtxoKind::Confidential(c) => c.is_resolved(),
        }
    }

    pub fn confidential(&self) -> Option<&ConfidentialUtxo> {
        match &self.kind {
            UtxoKind::Confidential(c) => Some(c),
            UtxoKind::Plain(_) => None,
        }
    }
}

impl TryFrom<UtxoResponse> for Utxo {
    type Error = ExplorerError;

    fn try_from(resp: UtxoResponse) -> Result<Self, Self::Error> {
        let UtxoResponse {
            txid,
            vout,
            value,
            asset,
            valuecommitment,
            assetcommitment,
        } = resp;
        let invalid = |reason: String| ExplorerError::InvalidUtxo {
            txid: txid.clone(),
            vout,
            reason,
        };

        let decode_commitment = |field: &str, commitment: String| {
            hex::decode(&commitment).map_err(|e| invalid(format!("{field}: {e}")))
        };

        let kind = match (non_empty(assetcommitment), non_empty(valuecommitment)) {
            (Some(asset_commitment), Some(value_commitment)) => {
                UtxoKind::Confidential(ConfidentialUtxo {
                    asset_commitment: decode_commitment("assetcommitment", asset_commitment)?,
                    value_commitment: decode_commitment("valuecommitment", value_commitment)?,
                    ..Default::default()
                })
            }
            (asset_commitment, value_commitment) => {
                let asset = match (asset, &asset_commitment) {
                    (Some(asset), _) => asset,
                    (None, Some(_)) => String::new(),
                    (None, None) => return Err(invalid("missing asset".to_string())),
                };
                let value = match (value, &value_commitment) {
                    (Some(value), _) => value,
                    (None, Some(_)) => 0,
                    (None, None) => return Err(invalid("missing value".to_string())),
                };
                UtxoKind::Plain(PlainUtxo {
                    asset,
                    value,
                    asset_commitment: asset_commitment
                        .map(|c| decode_commitment("assetcommitment", c))
                        .transpose()?,
                    value_commitment: value_commitment
                        .map(|c| decode_commitment("valuecommitment", c))
                        .transpose()?,
                })
            }
        };

        Ok(Utxo { txid, vout, kind })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}
