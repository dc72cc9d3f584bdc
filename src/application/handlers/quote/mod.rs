//! Quote handlers - Calculations and the documents produced from them.

mod calculate_budget;
mod calculate_pricing;
mod errors;
mod generate_document;
mod get_quote;

pub use calculate_budget::{CalculateBudgetCommand, CalculateBudgetHandler, CalculateQuoteResult};
pub use calculate_pricing::{CalculatePricingCommand, CalculatePricingHandler};
pub use errors::{CalculateQuoteError, GenerateDocumentError};
pub use generate_document::{GenerateDocumentCommand, GenerateDocumentHandler};
pub use get_quote::GetQuoteHandler;
