//! Error Types

use thiserror::Error;

/// A background request that never produced an HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("no browser window")]
    NoWindow,
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network failure: {0}")]
    Network(String),
    #[error("response body unreadable: {0}")]
    Body(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderError {
    #[error("there is nothing to sort")]
    NothingToSort,
}

#[derive(Debug, Error)]
pub enum PageDataError {
    #[error("no document")]
    NoDocument,
    #[error("no element #{0} in the document")]
    Missing(&'static str),
    #[error("page data is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}
