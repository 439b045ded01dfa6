use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug)]
pub enum InventoryError {
    // Upstream snapshot source unreachable or returned a non-success status.
    UpstreamFetch {
        message: String,
        status: Option<u16>,
        retryable: bool,
    },
    // Raw tabular payload could not be parsed into a catalog; a failed parse
    // never publishes a partial snapshot.
    Parse {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl InventoryError {
    pub fn upstream_fetch(message: &str, status: Option<u16>, retryable: bool) -> InventoryError {
        InventoryError::UpstreamFetch { message: message.to_string(), status, retryable }
    }

    pub fn parse(message: &str) -> InventoryError {
        InventoryError::Parse { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> InventoryError {
        InventoryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> InventoryError {
        InventoryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> InventoryError {
        InventoryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            InventoryError::UpstreamFetch { retryable, .. } => { *retryable }
            InventoryError::Parse { .. } => { false }
            InventoryError::Validation { .. } => { false }
            InventoryError::Serialization { .. } => { false }
            InventoryError::Runtime { .. } => { false }
        }
    }
}

impl From<reqwest::Error> for InventoryError {
    fn from(err: reqwest::Error) -> Self {
        let status = err.status().map(|s| s.as_u16());
        InventoryError::upstream_fetch(
            format!("upstream fetch {:?}", err).as_str(), status, err.is_timeout() || err.is_connect())
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::UpstreamFetch { message, status, retryable } => {
                write!(f, "{} {:?} {}", message, status, retryable)
            }
            InventoryError::Parse { message } => {
                write!(f, "{}", message)
            }
            InventoryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            InventoryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            InventoryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for the catalog engine.
pub type InventoryResult<T> = Result<T, InventoryError>;

// Stock filter applied by the query engine; unknown values fall back to All
// so a stale client never gets a rejected request over this field.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum StockFilter {
    All,
    InStock,
    OutOfStock,
}

impl From<String> for StockFilter {
    fn from(s: String) -> Self {
        match s.as_str() {
            "inStock" => StockFilter::InStock,
            "outOfStock" => StockFilter::OutOfStock,
            _ => StockFilter::All,
        }
    }
}

impl Display for StockFilter {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            StockFilter::All => write!(f, "all"),
            StockFilter::InStock => write!(f, "inStock"),
            StockFilter::OutOfStock => write!(f, "outOfStock"),
        }
    }
}
