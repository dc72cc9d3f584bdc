//! Quote Store Adapters
//!
//! - **InMemoryQuoteStore** - Keeps calculated quotes in process memory

mod in_memory_quote_store;

pub use in_memory_quote_store::{InMemoryQuoteStore, DEFAULT_MAX_QUOTES};
