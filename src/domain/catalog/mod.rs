//! Catalog Module - Consulting areas and services used by the rate-card engine.

mod service_catalog;

pub use service_catalog::{CatalogError, PricingParams, Service, ServiceArea, ServiceCatalog};
