#![allow(dead_code)]

use async_trait::async_trait;
use ocean::{
    explorer::*,
    tx::{RawOutput, TransactionParser},
};
use reqwest::Method;
use std::{collections::HashMap, sync::Mutex};

pub const BASE_URL: &str = "http://explorer.test/api";

pub enum Scripted {
    Respond(HttpResponse),
    Fail(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

/// Answers requests from a fixed script keyed by method and path.
#[derive(Default)]
pub struct FakeTransport {
    script: HashMap<(Method, String), Scripted>,
    sent: Mutex<Vec<SentRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.script.insert(
            (method, path.to_string()),
            Scripted::Respond(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn fail(mut self, method: Method, path: &str, reason: &str) -> Self {
        self.script.insert(
            (method, path.to_string()),
            Scripted::Fail(reason.to_string()),
        );
        self
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpTransport for FakeTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ExplorerError> {
        self.sent.lock().unwrap().push(SentRequest {
            method: method.clone(),
            url: url.to_string(),
            body,
        });
        let path = url.strip_prefix(BASE_URL).unwrap_or(url).to_string();
        match self.script.get(&(method, path)) {
            Some(Scripted::Respond(resp)) => Ok(resp.clone()),
            Some(Scripted::Fail(reason)) => Err(ExplorerError::transport(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                reason.clone(),
            ))),
            None => Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            }),
        }
    }
}

/// Parses "hex" of the form `outputs:<n>` into `n` outputs with tagged proof material.
pub struct TaggedParser;

pub fn tagged_output(idx: usize) -> RawOutput {
    RawOutput {
        script: format!("S{idx}").into_bytes(),
        nonce: format!("N{idx}").into_bytes(),
        range_proof: format!("R{idx}").into_bytes(),
        surjection_proof: format!("P{idx}").into_bytes(),
    }
}

impl TransactionParser for TaggedParser {
    fn parse_outputs(&self, tx_hex: &str) -> Result<Vec<RawOutput>, ExplorerError> {
        let n: usize = tx_hex
            .strip_prefix("outputs:")
            .and_then(|n| n.parse().ok())
            .ok_or(ExplorerError::InvalidTransactionHex(
                hex::FromHexError::OddLength,
            ))?;
        Ok((0..n).map(tagged_output).collect())
    }
}

pub fn test_client(transport: FakeTransport) -> BlockstreamClient<FakeTransport, TaggedParser> {
    test_client_with_lookups(transport, 1)
}

pub fn test_client_with_lookups(
    transport: FakeTransport,
    max_concurrent_lookups: usize,
) -> BlockstreamClient<FakeTransport, TaggedParser> {
    let config = ExplorerConfig {
        url: format!("{BASE_URL}/"),
        max_concurrent_lookups,
        ..Default::default()
    };
    BlockstreamClient::with_parts(config, transport, TaggedParser)
}
