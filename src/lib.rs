#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![cfg_attr(feature = "fail-on-warnings", deny(clippy::all))]

pub mod cli;
pub mod explorer;
pub mod fees;
pub mod primitives;
mod tracing;
pub mod tx;
pub mod utxo;
