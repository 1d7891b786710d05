use crate::proxy::ProxyRecord;
use async_trait::async_trait;

/// One upstream proxy listing.
///
/// `fetch` is total: failures are logged and collapse to fewer (or zero)
/// records, so callers can loop over many sources without handling errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProxySource: Send + Sync {
    async fn fetch(&self) -> Vec<ProxyRecord>;
    fn name(&self) -> &'static str;
}
