use crate::error::{Result, SourceError};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A single GET that yields the response body.
///
/// Non-success statuses are failures, so sources only ever see bodies of
/// 2xx responses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;
}

pub fn new_client(timeout: Duration, proxy: Option<&str>) -> anyhow::Result<Client> {
    let mut builder = Client::builder().timeout(timeout);

    if let Some(p) = proxy {
        if !p.is_empty() {
            let proxy_url = reqwest::Proxy::all(format!("http://{}", p))?;
            builder = builder.proxy(proxy_url);
        }
    }

    Ok(builder.build()?)
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, upstream_proxy: Option<&str>) -> anyhow::Result<Self> {
        Ok(Self {
            client: new_client(timeout, upstream_proxy)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        debug!("GET {} returned {} bytes", url, body.len());
        Ok(body)
    }
}
