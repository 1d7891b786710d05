use crate::configuration::Settings;
use crate::provider::ProxySource;
use crate::providers::{FreeProxyList, GeoNode};
use crate::proxy::ProxyRecord;
use crate::transport::HttpTransport;
use futures::future::join_all;
use log::{debug, info};

/// Fans out to every registered source and concatenates their records.
///
/// Records are not deduplicated; the same proxy listed by two sources shows
/// up twice.
#[derive(Default)]
pub struct SourceManager {
    sources: Vec<Box<dyn ProxySource>>,
}

impl SourceManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let fetch = &settings.fetch;
        let transport = HttpTransport::new(fetch.timeout(), fetch.upstream_proxy())?;

        let mut manager = Self::new();
        if settings.providers.free_proxy_list.enabled {
            manager.add_source(FreeProxyList::with_transport(transport.clone()));
        }
        if settings.providers.geonode.enabled {
            manager.add_source(GeoNode::with_transport(transport));
        }
        Ok(manager)
    }

    pub fn add_source<S: ProxySource + 'static>(&mut self, source: S) {
        self.sources.push(Box::new(source));
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Polls all sources concurrently. `max_per_source` caps each source's
    /// contribution; 0 means no cap. Output follows registration order.
    pub async fn fetch_all(&self, max_per_source: usize) -> Vec<ProxyRecord> {
        let results = join_all(self.sources.iter().map(|s| s.fetch())).await;

        let mut all = Vec::new();
        for (source, mut proxies) in self.sources.iter().zip(results) {
            if max_per_source > 0 {
                proxies.truncate(max_per_source);
            }
            debug!("fetched {} proxies from {}", proxies.len(), source.name());
            all.extend(proxies);
        }

        info!("{} proxies from {} sources", all.len(), self.sources.len());
        all
    }
}
