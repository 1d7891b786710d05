use crate::error::{Result, SourceError};
use crate::normalize::normalize_listing;
use crate::provider::ProxySource;
use crate::proxy::ProxyRecord;
use crate::transport::{HttpTransport, Transport};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use serde_json::Value;

pub const GEONODE_API_URL: &str = "https://proxylist.geonode.com/api/proxy-list\
    ?protocols=http%2Chttps%2Csocks4%2Csocks5\
    &filterUpTime=90\
    &filterLastChecked=5\
    &speed=fast\
    &limit=500\
    &page=1\
    &sort_by=lastChecked\
    &sort_type=desc";

/// proxylist.geonode.com JSON API.
pub struct GeoNode<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> GeoNode<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    async fn load_internal(&self) -> Result<Vec<ProxyRecord>> {
        let body = self.transport.get(GEONODE_API_URL).await?;
        let listings = decode_listings(&body)?;
        debug!("geonode returned {} raw listings", listings.len());

        let mut proxies = Vec::with_capacity(listings.len());
        for raw in &listings {
            match normalize_listing(raw) {
                Ok(record) => proxies.push(record),
                Err(reason) => warn!("skipping geonode listing: {}", reason),
            }
        }
        Ok(proxies)
    }
}

/// Extracts the `data` array from a GeoNode response body.
pub fn decode_listings(body: &str) -> Result<Vec<Value>> {
    let mut doc: Value = serde_json::from_str(body)?;

    match doc.get_mut("data").map(Value::take) {
        Some(Value::Array(listings)) => Ok(listings),
        Some(_) => Err(SourceError::UnexpectedShape),
        None => Err(SourceError::MissingData),
    }
}

#[async_trait]
impl<T: Transport> ProxySource for GeoNode<T> {
    async fn fetch(&self) -> Vec<ProxyRecord> {
        match self.load_internal().await {
            Ok(proxies) => {
                info!("found {} proxies from {}", proxies.len(), self.name());
                proxies
            }
            Err(e) if e.is_transport() => {
                error!("cannot fetch from {}: {}", self.name(), e);
                Vec::new()
            }
            Err(e) => {
                error!("invalid response from {}: {}", self.name(), e);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "geonode.com"
    }
}
