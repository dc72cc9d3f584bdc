//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, formatting helpers and error types
//! that form the vocabulary of the pricing domain.

mod currency;
mod errors;
mod ids;
mod timestamp;

pub use currency::{format_currency, format_percent, CURRENCY_CODE, CURRENCY_SYMBOL};
pub use errors::{DomainError, ErrorCode, InputErrors, ValidationError};
pub use ids::QuoteId;
pub use timestamp::Timestamp;
