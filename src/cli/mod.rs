mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use url::Url;

use crate::{
    explorer::{BlockstreamClient, Explorer},
    primitives::TxPriority,
};
use config::*;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(short, long, env = "OCEAN_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
    /// Base URL of the Esplora API
    #[clap(short, long, action, value_parser, env = "OCEAN_EXPLORER_URL")]
    url: Option<Url>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Checks that the explorer is reachable
    Ping,
    /// Lists the unspent outputs of an address
    Unspents { address: String },
    /// Shows transaction metadata
    Tx { hash: String },
    /// Shows the raw transaction hex
    TxHex { hash: String },
    /// Broadcasts a signed transaction
    Broadcast { tx_hex: String },
    /// Shows current fee estimates
    Fees {
        #[clap(short, long, value_enum)]
        priority: Option<TxPriority>,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config, EnvOverride { explorer_url: cli.url })?;
    crate::tracing::init_tracer(config.tracing)?;
    let client =
        BlockstreamClient::new(config.explorer).context("Couldn't build explorer client")?;

    match cli.command {
        Command::Ping => {
            let status = client.ping().await;
            println!("{status}");
            if !(200..300).contains(&status) {
                anyhow::bail!("Explorer at {} is not healthy", client.config().url);
            }
        }
        Command::Unspents { address } => {
            print_json(&client.get_unspents(&address).await?)?;
        }
        Command::Tx { hash } => {
            print_json(&client.get_transaction(&hash).await?)?;
        }
        Command::TxHex { hash } => {
            println!("{}", client.get_transaction_hex(&hash).await?);
        }
        Command::Broadcast { tx_hex } => {
            println!("{}", client.broadcast(&tx_hex).await?);
        }
        Command::Fees { priority } => {
            let estimation = client.estimate_fees().await?;
            match priority {
                Some(priority) => {
                    let rate = estimation
                        .fee_rate(priority)
                        .context("Explorer returned no fee estimates")?;
                    println!("{rate}");
                }
                None => print_json(&estimation)?,
            }
        }
    }
    Ok(())
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
