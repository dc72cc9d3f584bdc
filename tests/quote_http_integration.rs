//! Integration tests for the quote HTTP API.
//!
//! These tests drive the assembled router end to end:
//! 1. Calculators validate input and store quotes
//! 2. Documents are rendered from stored quotes only
//! 3. Client proposals are appended to the CSV quote log

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use consilius_pricing::adapters::http::{app_router, QuoteAppState};
use consilius_pricing::adapters::{
    CsvQuoteLog, InMemoryQuoteStore, PulldownExportService, TemplateDocumentGenerator,
};
use consilius_pricing::config::ServerConfig;
use consilius_pricing::domain::catalog::ServiceCatalog;
use consilius_pricing::domain::pricing::{MarginEngine, MultiplierEngine};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    log_dir: TempDir,
}

impl TestApp {
    fn new() -> Self {
        let log_dir = TempDir::new().unwrap();
        let state = QuoteAppState::new(
            Arc::new(ServiceCatalog::builtin().clone()),
            MarginEngine::default(),
            MultiplierEngine::default(),
            Arc::new(InMemoryQuoteStore::new()),
            Arc::new(TemplateDocumentGenerator::default()),
            Arc::new(PulldownExportService::new().with_pandoc_path("/nonexistent/pandoc")),
            Arc::new(CsvQuoteLog::new(log_dir.path().join("orcamentos_log.csv"))),
        );
        let router = app_router(state, &ServerConfig::default());
        Self { router, log_dir }
    }

    fn log_contents(&self) -> String {
        std::fs::read_to_string(self.log_dir.path().join("orcamentos_log.csv")).unwrap_or_default()
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        (status, body, headers)
    }

    async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        let (status, body, _) = self.send(request).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_json(&self, uri: &str, payload: Value) -> (StatusCode, Value) {
        let (status, body, _) = self.post_raw(uri, payload).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn post_raw(&self, uri: &str, payload: Value) -> (StatusCode, Vec<u8>, axum::http::HeaderMap) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap();
        self.send(request).await
    }
}

fn budget_payload() -> Value {
    json!({
        "hours_per_day": 2.0,
        "work_days": 5.0,
        "people_count": 3.0,
        "hourly_rate": 20.0,
        "overhead_cost": 200.0,
        "surcharge_percent": 0.05,
        "price_type": "Preço de Negociação"
    })
}

// =============================================================================
// Calculators
// =============================================================================

#[tokio::test]
async fn budget_endpoint_returns_tier_prices() {
    let app = TestApp::new();

    let (status, body) = app.post_json("/api/quotes/budget", budget_payload()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["engine"], "margin");
    assert_eq!(body["selected_tier"], "negotiation");
    assert_eq!(body["selected_price_formatted"], "R$ 960,00");
    assert_eq!(body["prices_formatted"]["minimum"], "R$ 800,00");
    assert_eq!(body["prices_formatted"]["average"], "R$ 880,00");
    assert_eq!(body["calculation"]["result"]["total_hours"], 30.0);
    assert!(body.get("warnings").is_none());
}

#[tokio::test]
async fn budget_without_overhead_warns() {
    let app = TestApp::new();
    let mut payload = budget_payload();
    payload["overhead_cost"] = Value::Null;

    let (status, body) = app.post_json("/api/quotes/budget", payload).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["warnings"][0],
        "Custo operacional não preenchido. Assumindo R$ 0,00."
    );
    assert_eq!(body["prices_formatted"]["minimum"], "R$ 600,00");
}

#[tokio::test]
async fn invalid_budget_lists_every_problem() {
    let app = TestApp::new();
    let mut payload = budget_payload();
    payload["hours_per_day"] = json!(0.0);
    payload["people_count"] = json!(0.0);

    let (status, body) = app.post_json("/api/quotes/budget", payload).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["details"]["errors"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn pricing_endpoint_uses_catalog_rates() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/quotes/pricing",
            json!({
                "area": "Administrativo",
                "service": "Planejamento estratégico",
                "hours_per_day": 1.0,
                "total_project_hours": 30.0,
                "total_team_size": 5.0,
                "allocated_team_size": 3.0,
                "company_size": "Pequena",
                "reduction_percent": 50.0,
                "price_type": "negociação"
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["engine"], "multiplier");
    assert_eq!(body["selected_price_formatted"], "R$ 981,00");
    assert_eq!(body["calculation"]["company_size"], "small");
}

#[tokio::test]
async fn pricing_rejects_unknown_service_and_company_size() {
    let app = TestApp::new();
    let mut payload = json!({
        "area": "Administrativo",
        "service": "Valuation",
        "hours_per_day": 1.0,
        "total_project_hours": 30.0,
        "total_team_size": 5.0,
        "allocated_team_size": 3.0,
        "company_size": "Pequena"
    });

    let (status, body) = app.post_json("/api/quotes/pricing", payload.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["errors"][0],
        "Serviço 'Valuation' não encontrado na área 'Administrativo'."
    );

    payload["service"] = json!("Organograma");
    payload["company_size"] = json!("Gigante");
    let (status, _) = app.post_json("/api/quotes/pricing", payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Documents
// =============================================================================

#[tokio::test]
async fn client_proposal_is_returned_and_logged() {
    let app = TestApp::new();
    let (_, quote) = app.post_json("/api/quotes/budget", budget_payload()).await;
    let quote_id = quote["quote_id"].as_str().unwrap();

    let (status, body, headers) = app
        .post_raw(
            &format!("/api/quotes/{}/documents/client", quote_id),
            json!({ "client": "ACME Ltda", "title": "Plano de Expansão", "format": "html" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=utf-8");
    let disposition = headers[header::CONTENT_DISPOSITION].to_str().unwrap();
    assert!(disposition.starts_with("attachment; filename=\"Orcamento_ACME_Ltda_"));
    assert!(disposition.ends_with(".html\""));

    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("Plano de Expansão"));
    assert!(html.contains("R$ 960,00"));

    let log = app.log_contents();
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Timestamp"));
    assert!(lines[1].contains("ACME Ltda"));
    assert!(lines[1].contains("Consilius Business"));
}

#[tokio::test]
async fn internal_breakdown_is_not_logged() {
    let app = TestApp::new();
    let (_, quote) = app.post_json("/api/quotes/budget", budget_payload()).await;
    let quote_id = quote["quote_id"].as_str().unwrap();

    let (status, body, headers) = app
        .post_raw(
            &format!("/api/quotes/{}/documents/internal", quote_id),
            json!({ "client": "ACME", "format": "markdown" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/markdown; charset=utf-8");
    let markdown = String::from_utf8(body).unwrap();
    assert!(markdown.starts_with("# DOCUMENTO INTERNO - CONFIDENCIAL"));
    assert!(app.log_contents().is_empty());
}

#[tokio::test]
async fn document_without_calculation_is_blocked() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json(
            "/api/quotes/00000000-0000-4000-8000-000000000000/documents/client",
            json!({ "client": "ACME", "format": "html" }),
        )
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "CALCULATION_REQUIRED");
    assert_eq!(
        body["message"],
        "É necessário gerar um cálculo na aba 'Calculadora' antes de criar o orçamento."
    );
    assert!(app.log_contents().is_empty());
}

#[tokio::test]
async fn pdf_without_pandoc_reports_generation_error() {
    let app = TestApp::new();
    let (_, quote) = app.post_json("/api/quotes/budget", budget_payload()).await;
    let quote_id = quote["quote_id"].as_str().unwrap();

    let (status, body) = app
        .post_json(
            &format!("/api/quotes/{}/documents/client", quote_id),
            json!({ "client": "ACME" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "DOCUMENT_GENERATION_FAILED");
    assert!(body["message"].as_str().unwrap().starts_with("Erro ao gerar PDF:"));
    assert!(app.log_contents().is_empty());
}

#[tokio::test]
async fn unsupported_format_is_bad_request() {
    let app = TestApp::new();
    let (_, quote) = app.post_json("/api/quotes/budget", budget_payload()).await;
    let quote_id = quote["quote_id"].as_str().unwrap();

    let (status, _) = app
        .post_json(
            &format!("/api/quotes/{}/documents/client", quote_id),
            json!({ "format": "docx" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// =============================================================================
// Catalog, quotes and health
// =============================================================================

#[tokio::test]
async fn stored_quote_can_be_fetched() {
    let app = TestApp::new();
    let (_, created) = app.post_json("/api/quotes/budget", budget_payload()).await;
    let quote_id = created["quote_id"].as_str().unwrap();

    let (status, body) = app.get_json(&format!("/api/quotes/{}", quote_id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["quote_id"], quote_id);
    assert_eq!(body["selected_price_formatted"], "R$ 960,00");

    let (status, _) = app.get_json("/api/quotes/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn catalog_lists_areas_in_order() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/api/catalog").await;

    assert_eq!(status, StatusCode::OK);
    let areas = body["areas"].as_array().unwrap();
    assert_eq!(areas.len(), 4);
    assert_eq!(areas[0]["name"], "Administrativo");
    assert_eq!(areas[0]["base_hourly_rate"], 50.0);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();

    let (status, body) = app.get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["pdf_export_available"], false);
}

#[tokio::test]
async fn local_form_origin_is_allowed_by_default() {
    let app = TestApp::new();
    let request = Request::get("/health")
        .header(header::ORIGIN, "http://localhost:8501")
        .body(Body::empty())
        .unwrap();

    let (status, _, headers) = app.send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:8501"
    );
}

#[tokio::test]
async fn foreign_origin_gets_no_cors_grant() {
    let app = TestApp::new();
    let request = Request::get("/health")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();

    let (_, _, headers) = app.send(request).await;

    assert!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
