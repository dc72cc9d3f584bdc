//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod quote;

pub use quote::{
    CalculateBudgetCommand, CalculateBudgetHandler, CalculatePricingCommand,
    CalculatePricingHandler, CalculateQuoteError, CalculateQuoteResult, GenerateDocumentCommand,
    GenerateDocumentError, GenerateDocumentHandler, GetQuoteHandler,
};
