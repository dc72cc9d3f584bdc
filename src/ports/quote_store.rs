//! Quote Store Port - Holds calculated quotes until documents are generated.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::QuoteId;
use crate::domain::quote::Quote;

/// Port for keeping calculated quotes between requests.
///
/// Storage is transient; a store may forget quotes at any time.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    async fn save(&self, quote: &Quote) -> Result<(), QuoteStoreError>;

    /// Returns `None` when no calculation exists under `id`.
    async fn find_by_id(&self, id: &QuoteId) -> Result<Option<Quote>, QuoteStoreError>;
}

#[derive(Debug, Clone, Error)]
pub enum QuoteStoreError {
    #[error("Quote store unavailable: {0}")]
    Unavailable(String),
}
