//! Error types for the catalog client and the favorites store

use thiserror::Error;

/// Failure talking to the remote book catalog.
///
/// Every variant collapses to the same user-facing message; the variant and
/// its payload only reach the log.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure reading or writing the favorites slot
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("favorites storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("favorites could not be (de)serialized: {0}")]
    Serialize(#[from] serde_json::Error),
}
