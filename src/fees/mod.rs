use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::primitives::TxPriority;

/// Fee rates (sat/vB) keyed by confirmation target in blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Estimation(BTreeMap<u16, f64>);

impl Estimation {
    pub fn targets(&self) -> impl Iterator<Item = (u16, f64)> + '_ {
        self.0.iter().map(|(target, rate)| (*target, *rate))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rate of the largest target not above `n_blocks`, or of the smallest
    /// known target when every target is above it.
    pub fn rate_for_target(&self, n_blocks: u16) -> Option<f64> {
        self.0
            .range(..=n_blocks)
            .next_back()
            .or_else(|| self.0.iter().next())
            .map(|(_, rate)| *rate)
    }

    pub fn fee_rate(&self, priority: TxPriority) -> Option<f64> {
        self.rate_for_target(priority.n_blocks())
    }
}

impl From<BTreeMap<u16, f64>> for Estimation {
    fn from(rates: BTreeMap<u16, f64>) -> Self {
        Self(rates)
    }
}
