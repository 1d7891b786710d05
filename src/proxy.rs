use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HttpsSupport {
    Yes,
    No,
}

impl HttpsSupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpsSupport::Yes => "yes",
            HttpsSupport::No => "no",
        }
    }
}

impl From<bool> for HttpsSupport {
    fn from(supported: bool) -> Self {
        if supported {
            HttpsSupport::Yes
        } else {
            HttpsSupport::No
        }
    }
}

impl fmt::Display for HttpsSupport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anonymity {
    #[serde(rename = "elite proxy")]
    Elite,
    #[serde(rename = "anonymous proxy")]
    Anonymous,
    #[serde(rename = "transparent proxy")]
    Transparent,
    #[serde(rename = "unknown proxy")]
    Unknown,
}

impl Anonymity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Anonymity::Elite => "elite proxy",
            Anonymity::Anonymous => "anonymous proxy",
            Anonymity::Transparent => "transparent proxy",
            Anonymity::Unknown => "unknown proxy",
        }
    }
}

impl fmt::Display for Anonymity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated proxy listing, uniform across every source.
///
/// `ip` is never empty and `port` always holds the decimal form of a port in
/// `1..=65535`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyRecord {
    pub ip: String,
    pub port: String,
    pub https: HttpsSupport,
    pub country: String,
    pub anonymity: Anonymity,
}

impl ProxyRecord {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

impl fmt::Display for ProxyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (https={}, {}, {})",
            self.addr(),
            self.https,
            self.country,
            self.anonymity
        )
    }
}
