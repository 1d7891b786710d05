pub mod free_proxy_list;
pub mod geonode;

pub use free_proxy_list::FreeProxyList;
pub use geonode::GeoNode;
