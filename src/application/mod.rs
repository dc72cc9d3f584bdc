//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    CalculateBudgetCommand, CalculateBudgetHandler, CalculatePricingCommand,
    CalculatePricingHandler, CalculateQuoteError, CalculateQuoteResult, GenerateDocumentCommand,
    GenerateDocumentError, GenerateDocumentHandler, GetQuoteHandler,
};
