//! Service catalog: consulting areas, their base hourly rate, and the
//! complexity multiplier of each service they offer.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single service and its complexity multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub multiplier: f64,
}

/// A consulting area with its base hourly rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub name: String,
    pub base_hourly_rate: f64,
    pub services: Vec<Service>,
}

/// Rate-card parameters for one area/service combination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingParams {
    pub base_hourly_rate: f64,
    pub complexity_multiplier: f64,
}

/// Errors raised when a catalog definition is malformed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Catalog could not be parsed: {0}")]
    Parse(String),

    #[error("Catalog has no areas")]
    Empty,

    #[error("Area '{0}' is listed more than once")]
    DuplicateArea(String),

    #[error("Area '{area}' has invalid base hourly rate {rate}")]
    InvalidRate { area: String, rate: f64 },

    #[error("Service '{service}' in area '{area}' has invalid multiplier {multiplier}")]
    InvalidMultiplier {
        area: String,
        service: String,
        multiplier: f64,
    },
}

/// Ordered catalog of areas and services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCatalog {
    areas: Vec<ServiceArea>,
}

impl ServiceCatalog {
    /// Builds a catalog, rejecting duplicate areas and non-positive numbers.
    pub fn new(areas: Vec<ServiceArea>) -> Result<Self, CatalogError> {
        let catalog = Self { areas };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a YAML catalog definition.
    ///
    /// ```yaml
    /// areas:
    ///   - name: Dados
    ///     base_hourly_rate: 80.0
    ///     services:
    ///       - name: Implementação de BI
    ///         multiplier: 1.5
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: ServiceCatalog =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The built-in catalog.
    pub fn builtin() -> &'static ServiceCatalog {
        &BUILTIN_CATALOG
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.areas.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, area) in self.areas.iter().enumerate() {
            if self.areas[..i].iter().any(|a| a.name == area.name) {
                return Err(CatalogError::DuplicateArea(area.name.clone()));
            }
            if !area.base_hourly_rate.is_finite() || area.base_hourly_rate < 0.0 {
                return Err(CatalogError::InvalidRate {
                    area: area.name.clone(),
                    rate: area.base_hourly_rate,
                });
            }
            for service in &area.services {
                if !service.multiplier.is_finite() || service.multiplier <= 0.0 {
                    return Err(CatalogError::InvalidMultiplier {
                        area: area.name.clone(),
                        service: service.name.clone(),
                        multiplier: service.multiplier,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn all_areas(&self) -> &[ServiceArea] {
        &self.areas
    }

    /// Area names in catalog order.
    pub fn areas(&self) -> Vec<&str> {
        self.areas.iter().map(|a| a.name.as_str()).collect()
    }

    /// Service names of an area; empty for an unknown area.
    pub fn services_by_area(&self, area: &str) -> Vec<&str> {
        self.find_area(area)
            .map(|a| a.services.iter().map(|s| s.name.as_str()).collect())
            .unwrap_or_default()
    }

    /// Base hourly rate and complexity multiplier of a service.
    pub fn pricing_params(&self, area: &str, service: &str) -> Option<PricingParams> {
        let area = self.find_area(area)?;
        let service = area.services.iter().find(|s| s.name == service)?;
        Some(PricingParams {
            base_hourly_rate: area.base_hourly_rate,
            complexity_multiplier: service.multiplier,
        })
    }

    fn find_area(&self, name: &str) -> Option<&ServiceArea> {
        self.areas.iter().find(|a| a.name == name)
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        BUILTIN_CATALOG.clone()
    }
}

fn area(name: &str, base_hourly_rate: f64, services: &[(&str, f64)]) -> ServiceArea {
    ServiceArea {
        name: name.to_string(),
        base_hourly_rate,
        services: services
            .iter()
            .map(|(name, multiplier)| Service {
                name: (*name).to_string(),
                multiplier: *multiplier,
            })
            .collect(),
    }
}

static BUILTIN_CATALOG: Lazy<ServiceCatalog> = Lazy::new(|| ServiceCatalog {
    areas: vec![
        area(
            "Administrativo",
            50.0,
            &[("Planejamento estratégico", 1.0), ("Organograma", 0.8)],
        ),
        area(
            "Econômico / Estratégico",
            65.0,
            &[
                ("Plano estratégico de expansão de mercado", 1.2),
                ("Estudo de oportunidades no mercado externo", 1.3),
                ("Estudo de fornecedores", 1.0),
                ("Análise de posicionamento e concorrência", 1.1),
                ("Análise de precificação", 1.1),
                ("Estudo de mercado e demanda", 1.2),
            ],
        ),
        area(
            "Financeiro",
            70.0,
            &[
                ("Gerenciamento de custos e precificação", 1.2),
                ("Estruturação e análise de demonstrações contábeis", 1.1),
                ("Valuation", 1.5),
                ("Viabilidade econômico-financeira", 1.3),
                ("Plano orçamentário", 1.1),
                ("Análise e gerenciamento do capital de giro", 1.2),
            ],
        ),
        area(
            "Dados",
            80.0,
            &[
                ("Criação de dashboards gerenciais", 1.3),
                ("Estruturação de banco de dados", 1.4),
                ("Tratamento e organização de dados", 1.2),
                ("Automação de relatórios", 1.3),
                ("Implementação de BI", 1.5),
            ],
        ),
    ],
});
