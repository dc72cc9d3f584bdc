//! Consilius Pricing HTTP service.

use std::error::Error;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use consilius_pricing::adapters::http::{app_router, QuoteAppState};
use consilius_pricing::adapters::{
    CsvQuoteLog, InMemoryQuoteStore, PulldownExportService, TemplateDocumentGenerator,
};
use consilius_pricing::config::{AppConfig, StorageConfig};
use consilius_pricing::domain::catalog::ServiceCatalog;
use consilius_pricing::domain::pricing::{MarginEngine, MultiplierEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let catalog = load_catalog(&config.storage).await?;
    info!(areas = catalog.all_areas().len(), "Service catalog loaded");

    let exporter = PulldownExportService::new()
        .with_pandoc_path(config.documents.pandoc_path.clone())
        .with_pdf_engine(config.documents.pdf_engine.clone())
        .with_pdf_timeout(config.documents.pdf_timeout_secs);

    let state = QuoteAppState::new(
        Arc::new(catalog),
        MarginEngine::new(config.pricing.margin_policy()),
        MultiplierEngine::new(config.pricing.multiplier_policy()),
        Arc::new(InMemoryQuoteStore::with_max_quotes(
            config.storage.max_stored_quotes,
        )),
        Arc::new(TemplateDocumentGenerator::new(
            config.documents.proposal_texts(),
        )),
        Arc::new(exporter),
        Arc::new(CsvQuoteLog::new(&config.storage.quote_log_path)),
    )
    .with_default_proposer(config.documents.default_proposer.clone());

    let app = app_router(state, &config.server);

    let addr = config.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(
        %addr,
        environment = ?config.server.environment,
        quote_log = %config.storage.quote_log_path.display(),
        "Consilius pricing service listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .init();
    }
}

async fn load_catalog(storage: &StorageConfig) -> Result<ServiceCatalog, Box<dyn Error + Send + Sync>> {
    match &storage.catalog_path {
        Some(path) => {
            let yaml = tokio::fs::read_to_string(path).await?;
            Ok(ServiceCatalog::from_yaml_str(&yaml)?)
        }
        None => Ok(ServiceCatalog::builtin().clone()),
    }
}
