//! Projection of untyped upstream listings into [`ProxyRecord`]s.
//!
//! Only `ip` and `port` can reject a listing. Every other field degrades to a
//! default value instead.

use crate::error::Rejection;
use crate::proxy::{Anonymity, HttpsSupport, ProxyRecord};
use serde_json::Value;

const HTTPS_PROTOCOL: &str = "https";

pub fn normalize_listing(raw: &Value) -> Result<ProxyRecord, Rejection> {
    let ip = coerce_ip(raw.get("ip"))?;
    let port = coerce_port(raw.get("port"))?;

    Ok(ProxyRecord {
        ip,
        port: port.to_string(),
        https: https_support(raw.get("protocols")),
        country: coerce_country(raw.get("country")),
        anonymity: classify_anonymity(raw.get("anonymityLevel")),
    })
}

/// Strings are trimmed and numbers rendered as text; anything else, or an
/// empty result, rejects the listing.
fn coerce_ip(value: Option<&Value>) -> Result<String, Rejection> {
    let ip = match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    };

    if ip.is_empty() {
        Err(Rejection::MissingIp)
    } else {
        Ok(ip)
    }
}

fn coerce_port(value: Option<&Value>) -> Result<u16, Rejection> {
    let port = match value {
        None | Some(Value::Null) => return Err(Rejection::MissingPort),
        Some(Value::Number(n)) => match n.as_u64() {
            Some(p) => u16::try_from(p).ok(),
            None => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u16::MAX))
                .map(|f| f as u16),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Err(Rejection::MissingPort);
            }
            s.parse::<u16>().ok()
        }
        Some(_) => None,
    };

    match port {
        Some(p) if p > 0 => Ok(p),
        _ => Err(Rejection::InvalidPort(render(value))),
    }
}

fn render(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}

/// Lower-cased protocol names from either a list or a comma-separated string.
/// Any other shape counts as no protocols.
pub fn protocol_set(value: Option<&Value>) -> Vec<String> {
    let names: Vec<&str> = match value {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(s)) => s.split(',').collect(),
        _ => Vec::new(),
    };

    names
        .into_iter()
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

pub fn https_support(value: Option<&Value>) -> HttpsSupport {
    protocol_set(value)
        .iter()
        .any(|p| p == HTTPS_PROTOCOL)
        .into()
}

fn coerce_country(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}

pub fn classify_anonymity(value: Option<&Value>) -> Anonymity {
    match value.and_then(Value::as_str) {
        Some(label) => classify_label(label),
        None => Anonymity::Unknown,
    }
}

/// `_`, `-` and spaces are interchangeable separators in upstream labels.
pub fn classify_label(label: &str) -> Anonymity {
    let label: String = label
        .to_lowercase()
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    if label.contains("elite") {
        Anonymity::Elite
    } else if label.contains("transparent") {
        Anonymity::Transparent
    } else if label.contains("anonymous") {
        Anonymity::Anonymous
    } else {
        Anonymity::Unknown
    }
}
