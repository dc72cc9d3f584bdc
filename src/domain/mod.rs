//! Domain layer containing the pricing rules and quote types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, currency, errors)
//! - `pricing` - The cost-plus and rate-card engines and their policies
//! - `catalog` - Consulting areas and services priced by the rate card
//! - `quote` - Calculated quotes, proposal details, and log rows

pub mod catalog;
pub mod foundation;
pub mod pricing;
pub mod quote;
