//! In-Memory Quote Log Adapter
//!
//! Keeps appended entries in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::quote::QuoteLogEntry;
use crate::ports::{QuoteLog, QuoteLogError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryQuoteLog {
    entries: Arc<Mutex<Vec<QuoteLogEntry>>>,
}

impl InMemoryQuoteLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every entry appended so far, oldest first.
    pub async fn entries(&self) -> Vec<QuoteLogEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl QuoteLog for InMemoryQuoteLog {
    async fn append(&self, entry: &QuoteLogEntry) -> Result<(), QuoteLogError> {
        self.entries.lock().await.push(entry.clone());
        Ok(())
    }
}
