pub mod configuration;
pub mod error;
pub mod manager;
pub mod normalize;
pub mod provider;
pub mod providers;
pub mod proxy;
pub mod transport;

pub use manager::SourceManager;
pub use provider::ProxySource;
pub use proxy::{Anonymity, HttpsSupport, ProxyRecord};
