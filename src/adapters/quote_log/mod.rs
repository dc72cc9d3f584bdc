//! Quote Log Adapters
//!
//! - **CsvQuoteLog** - Appends rows to a CSV file on disk
//! - **InMemoryQuoteLog** - Keeps rows in memory (testing/development)

mod csv_quote_log;
mod in_memory_quote_log;

pub use csv_quote_log::CsvQuoteLog;
pub use in_memory_quote_log::InMemoryQuoteLog;
