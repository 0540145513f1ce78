use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::{config::ExplorerConfig, error::ExplorerError, http::*, Explorer};
use crate::{
    fees::Estimation,
    tx::{ElementsTxParser, Transaction, TransactionParser},
    utxo::{TxHexSource, Utxo, UtxoResolver, UtxoResponse},
};

/// Esplora (blockstream.info) explorer client.
#[derive(Clone, Debug)]
pub struct BlockstreamClient<T = ReqwestTransport, P = ElementsTxParser> {
    config: ExplorerConfig,
    transport: T,
    resolver: UtxoResolver<P>,
}

impl BlockstreamClient {
    pub fn new(config: ExplorerConfig) -> Result<Self, ExplorerError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        Ok(Self::with_parts(config, transport, ElementsTxParser))
    }
}

impl<T: HttpTransport, P: TransactionParser> BlockstreamClient<T, P> {
    pub fn with_parts(config: ExplorerConfig, transport: T, parser: P) -> Self {
        let resolver = UtxoResolver::new(parser, config.max_concurrent_lookups);
        Self {
            config,
            transport,
            resolver,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn resolver(&self) -> &UtxoResolver<P> {
        &self.resolver
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn get(&self, path: &str) -> Result<String, ExplorerError> {
        self.transport
            .send(Method::GET, &self.url(path), None)
            .await?
            .into_body()
    }

    /// Lists the address UTXOs as decoded from the explorer, before resolution.
    #[instrument(name = "explorer.list_unspents", skip(self), err)]
    pub async fn list_unspents(&self, address: &str) -> Result<Vec<Utxo>, ExplorerError> {
        let body = self.get(&format!("/address/{address}/utxo")).await?;
        let listing: Vec<UtxoResponse> = decode("address.utxo", &body)?;
        listing.into_iter().map(Utxo::try_from).collect()
    }
}

fn decode<R: DeserializeOwned>(call: &'static str, body: &str) -> Result<R, ExplorerError> {
    serde_json::from_str(body)
        .map_err(|source| ExplorerError::CouldNotDecodeResponseBody { call, source })
}

#[async_trait]
impl<T: HttpTransport, P: TransactionParser> Explorer for BlockstreamClient<T, P> {
    #[instrument(name = "explorer.ping", skip(self))]
    async fn ping(&self) -> u16 {
        match self
            .transport
            .send(Method::GET, &self.url("/blocks/tip/height"), None)
            .await
        {
            Ok(resp) => resp.status,
            Err(_) => 0,
        }
    }

    #[instrument(name = "explorer.get_unspents", skip(self), err)]
    async fn get_unspents(&self, address: &str) -> Result<Vec<Utxo>, ExplorerError> {
        let utxos = self.list_unspents(address).await?;
        self.resolver.resolve(self, utxos).await
    }

    #[instrument(name = "explorer.get_transaction", skip(self), err)]
    async fn get_transaction(&self, hash: &str) -> Result<Transaction, ExplorerError> {
        let body = self.get(&format!("/tx/{hash}")).await?;
        decode("tx", &body)
    }

    #[instrument(name = "explorer.get_transaction_hex", skip(self), err)]
    async fn get_transaction_hex(&self, hash: &str) -> Result<String, ExplorerError> {
        let body = self.get(&format!("/tx/{hash}/hex")).await?;
        Ok(body.trim().to_string())
    }

    #[instrument(name = "explorer.broadcast", skip_all, err)]
    async fn broadcast(&self, tx_hex: &str) -> Result<String, ExplorerError> {
        let txid = self
            .transport
            .send(Method::POST, &self.url("/tx"), Some(tx_hex.to_string()))
            .await?
            .into_body()?;
        Ok(txid.trim().to_string())
    }

    #[instrument(name = "explorer.estimate_fees", skip(self), err)]
    async fn estimate_fees(&self) -> Result<Estimation, ExplorerError> {
        let body = self.get("/fee-estimates").await?;
        decode("fee-estimates", &body)
    }
}

#[async_trait]
impl<T: HttpTransport, P: TransactionParser> TxHexSource for BlockstreamClient<T, P> {
    async fn fetch_tx_hex(&self, txid: &str) -> Result<String, ExplorerError> {
        self.get_transaction_hex(txid).await
    }
}
