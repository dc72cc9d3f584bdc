//! Quote Module - Calculated quotes and what is produced from them.
//!
//! A `Quote` pairs one engine result with the selected price tier. From a
//! quote and its `ProposalDetails` the application renders the client
//! proposal, the internal breakdown, and a `QuoteLogEntry`.

mod aggregate;
mod document;
mod log_entry;
mod proposal;

pub use aggregate::{Quote, QuoteCalculation};
pub use document::{
    DocumentKind, CALCULATION_REQUIRED_MESSAGE, CLIENT_FOOTER, INDICATIVE_VALUE_NOTICE,
    MISSING_OVERHEAD_WARNING,
};
pub use log_entry::{QuoteLogEntry, QUOTE_LOG_HEADERS};
pub use proposal::{PaymentOption, ProposalDetails, DEFAULT_PROPOSER};
