//! GetQuoteHandler - Reads a stored calculation.

use std::sync::Arc;

use crate::domain::foundation::QuoteId;
use crate::domain::quote::Quote;
use crate::ports::QuoteStore;

use super::errors::GenerateDocumentError;

pub struct GetQuoteHandler {
    quote_store: Arc<dyn QuoteStore>,
}

impl GetQuoteHandler {
    pub fn new(quote_store: Arc<dyn QuoteStore>) -> Self {
        Self { quote_store }
    }

    /// Fails with `QuoteNotFound` when no calculation exists under `quote_id`.
    pub async fn handle(&self, quote_id: QuoteId) -> Result<Quote, GenerateDocumentError> {
        self.quote_store
            .find_by_id(&quote_id)
            .await?
            .ok_or(GenerateDocumentError::QuoteNotFound(quote_id))
    }
}
