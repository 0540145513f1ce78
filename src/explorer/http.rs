use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Method};

use super::error::ExplorerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body of a 2xx response, otherwise the body as the error.
    pub fn into_body(self) -> Result<String, ExplorerError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(ExplorerError::UnexpectedStatus {
                status: self.status,
                body: self.body,
            })
        }
    }
}

#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ExplorerError>;
}

#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: std::time::Duration) -> Result<Self, ExplorerError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<HttpResponse, ExplorerError> {
        let mut req = self.client.request(method, url);
        if let Some(body) = body {
            req = req.header(CONTENT_TYPE, "text/plain").body(body);
        }
        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
