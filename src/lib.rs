//! Consilius Pricing - Consulting quote calculator
//!
//! Two pricing engines (cost-plus and rate-card) turn project inputs into
//! tiered prices. Quotes are rendered as client proposals or internal
//! breakdowns, and every proposal sent to a client is appended to a CSV log.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
