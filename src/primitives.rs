use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, clap::ValueEnum, PartialEq, Eq, Copy)]
#[serde(rename_all = "snake_case")]
pub enum TxPriority {
    NextBlock,
    HalfHour,
    OneHour,
}

impl TxPriority {
    pub fn n_blocks(&self) -> u16 {
        match self {
            Self::NextBlock => 1,
            Self::HalfHour => 3,
            Self::OneHour => 6,
        }
    }
}
