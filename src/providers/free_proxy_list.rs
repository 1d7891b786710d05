use crate::error::Result;
use crate::normalize::normalize_listing;
use crate::provider::ProxySource;
use crate::proxy::ProxyRecord;
use crate::transport::{HttpTransport, Transport};
use async_trait::async_trait;
use log::{debug, error, info, warn};
use scraper::{ElementRef, Html, Selector};
use serde_json::{json, Value};

pub const FREE_PROXY_LIST_URL: &str = "https://free-proxy-list.net/";

// Layout has changed over time; try the specific ids first.
const TABLE_SELECTORS: [&str; 3] = [
    "table#proxylisttable",
    "table.table.table-striped.table-bordered",
    "table",
];

const COLUMNS: usize = 8;

pub struct FreeProxyList<T = HttpTransport> {
    transport: T,
}

impl<T: Transport> FreeProxyList<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    async fn load_internal(&self) -> Result<Vec<ProxyRecord>> {
        let body = self.transport.get(FREE_PROXY_LIST_URL).await?;

        let mut proxies = Vec::new();
        for raw in parse_listings(&body) {
            match normalize_listing(&raw) {
                Ok(record) => proxies.push(record),
                Err(reason) => warn!("skipping free-proxy-list row: {}", reason),
            }
        }
        Ok(proxies)
    }
}

/// Projects every complete table row into the raw listing shape the
/// normalizer expects. Returns nothing when no table is present.
pub fn parse_listings(html: &str) -> Vec<Value> {
    let doc = Html::parse_document(html);
    let table_selectors: Vec<Selector> = TABLE_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("static selector"))
        .collect();
    let tr_selector = Selector::parse("tr").expect("static selector");
    let td_selector = Selector::parse("td").expect("static selector");

    let table = match find_table(&doc, &table_selectors) {
        Some(table) => table,
        None => {
            error!("could not find proxy table on free-proxy-list.net");
            return Vec::new();
        }
    };

    let mut listings = Vec::new();
    for row in table.select(&tr_selector) {
        let cols: Vec<String> = row
            .select(&td_selector)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();
        if cols.len() < COLUMNS {
            continue;
        }

        let protocols = if cols[6].eq_ignore_ascii_case("yes") {
            "http,https"
        } else {
            "http"
        };

        listings.push(json!({
            "ip": cols[0],
            "port": cols[1],
            "protocols": protocols,
            "country": cols[3],
            "anonymityLevel": cols[4],
        }));
    }

    debug!("free-proxy-list table has {} complete rows", listings.len());
    listings
}

fn find_table<'a>(doc: &'a Html, selectors: &[Selector]) -> Option<ElementRef<'a>> {
    selectors
        .iter()
        .find_map(|selector| doc.select(selector).next())
}

#[async_trait]
impl<T: Transport> ProxySource for FreeProxyList<T> {
    async fn fetch(&self) -> Vec<ProxyRecord> {
        match self.load_internal().await {
            Ok(proxies) => {
                info!("found {} proxies from {}", proxies.len(), self.name());
                proxies
            }
            Err(e) => {
                error!("cannot load list of proxy {} err:{}", self.name(), e);
                Vec::new()
            }
        }
    }

    fn name(&self) -> &'static str {
        "free-proxy-list.net"
    }
}
