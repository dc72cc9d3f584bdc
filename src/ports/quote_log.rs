//! Quote Log Port - Append-only record of quotes sent to clients.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::quote::QuoteLogEntry;

/// Port for appending finalized quotes to the log.
///
/// Entries are only ever appended; concurrent appends must not interleave.
#[async_trait]
pub trait QuoteLog: Send + Sync {
    async fn append(&self, entry: &QuoteLogEntry) -> Result<(), QuoteLogError>;
}

/// Errors that can occur while writing the quote log.
#[derive(Debug, Error)]
pub enum QuoteLogError {
    #[error("Quote log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quote log encoding error: {0}")]
    Encoding(String),
}
