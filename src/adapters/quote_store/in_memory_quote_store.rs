//! In-Memory Quote Store Adapter
//!
//! Holds calculated quotes for the lifetime of the process, up to a fixed
//! number. Once full, each new quote evicts the oldest one.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::foundation::QuoteId;
use crate::domain::quote::Quote;
use crate::ports::{QuoteStore, QuoteStoreError};

/// Quotes kept when no limit is configured.
pub const DEFAULT_MAX_QUOTES: usize = 1_000;

#[derive(Debug, Default)]
struct Workspace {
    quotes: HashMap<QuoteId, Quote>,
    /// Ids in insertion order, oldest first.
    order: VecDeque<QuoteId>,
}

#[derive(Debug, Clone)]
pub struct InMemoryQuoteStore {
    inner: Arc<RwLock<Workspace>>,
    max_quotes: usize,
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryQuoteStore {
    pub fn new() -> Self {
        Self::with_max_quotes(DEFAULT_MAX_QUOTES)
    }

    /// A store holding at most `max_quotes` quotes (at least one).
    pub fn with_max_quotes(max_quotes: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Workspace::default())),
            max_quotes: max_quotes.max(1),
        }
    }

    pub fn max_quotes(&self) -> usize {
        self.max_quotes
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.quotes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.quotes.is_empty()
    }

    /// Forget every stored quote.
    pub async fn clear(&self) {
        let mut workspace = self.inner.write().await;
        workspace.quotes.clear();
        workspace.order.clear();
    }
}

#[async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn save(&self, quote: &Quote) -> Result<(), QuoteStoreError> {
        let mut workspace = self.inner.write().await;
        let id = quote.id();

        if workspace.quotes.insert(id, quote.clone()).is_none() {
            workspace.order.push_back(id);
        }

        while workspace.order.len() > self.max_quotes {
            if let Some(evicted) = workspace.order.pop_front() {
                workspace.quotes.remove(&evicted);
                debug!(quote_id = %evicted, "Evicted oldest quote");
            }
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &QuoteId) -> Result<Option<Quote>, QuoteStoreError> {
        Ok(self.inner.read().await.quotes.get(id).cloned())
    }
}
