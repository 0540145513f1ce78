use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error(transparent)]
    Transport(BoxError),
    #[error("{body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("ExplorerError - CouldNotDecodeResponseBody ({call}): {source}")]
    CouldNotDecodeResponseBody {
        call: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("ExplorerError - InvalidUtxo {txid}:{vout}: {reason}")]
    InvalidUtxo {
        txid: String,
        vout: u32,
        reason: String,
    },
    #[error("ExplorerError - InvalidTransactionHex: {0}")]
    InvalidTransactionHex(#[from] hex::FromHexError),
    #[error("ExplorerError - TransactionDecode: {0}")]
    TransactionDecode(#[from] elements::encode::Error),
    #[error("ExplorerError - OutputIndexOutOfRange: {txid} has {n_outputs} outputs, no output {vout}")]
    OutputIndexOutOfRange {
        txid: String,
        vout: u32,
        n_outputs: usize,
    },
    #[error("ExplorerError - MissingConfidentialData: output {txid}:{vout} lacks {missing}")]
    MissingConfidentialData {
        txid: String,
        vout: u32,
        missing: &'static str,
    },
}

impl ExplorerError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(err.into())
    }
}

impl From<reqwest::Error> for ExplorerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(Box::new(err))
    }
}
