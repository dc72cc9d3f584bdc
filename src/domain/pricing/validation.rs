//! Explicit precondition checks for raw engine inputs.
//!
//! The engines never validate. Callers run these checks first and only
//! compute when they pass; every violated rule is reported, not just the
//! first one.

use super::margin::BudgetInputs;
use super::multiplier::PricingInputs;
use super::policy::MarginPolicy;
use crate::domain::foundation::{InputErrors, ValidationError};

/// Collects rule violations for one input set.
struct Checker {
    errors: InputErrors,
}

impl Checker {
    fn new() -> Self {
        Self {
            errors: InputErrors::new(),
        }
    }

    /// Runs `rule` only on finite values; non-finite values get their own error.
    fn check(&mut self, field: &str, value: f64, rule: impl FnOnce(f64) -> Option<ValidationError>) {
        if !value.is_finite() {
            self.errors.push(ValidationError::not_finite(field));
        } else if let Some(error) = rule(value) {
            self.errors.push(error);
        }
    }

    fn positive(&mut self, field: &str, value: f64, message: &str) {
        self.check(field, value, |v| {
            (v <= 0.0).then(|| ValidationError::constraint(field, message))
        });
    }

    fn at_least_one(&mut self, field: &str, value: f64, message: &str) {
        self.check(field, value, |v| {
            (v < 1.0).then(|| ValidationError::constraint(field, message))
        });
    }

    fn non_negative(&mut self, field: &str, value: f64, message: &str) {
        self.check(field, value, |v| {
            (v < 0.0).then(|| ValidationError::constraint(field, message))
        });
    }

    fn within(&mut self, field: &str, value: f64, min: f64, max: f64) {
        self.check(field, value, |v| {
            (v < min || v > max).then(|| ValidationError::out_of_range(field, min, max, v))
        });
    }

    fn finish(self) -> Result<(), InputErrors> {
        self.errors.into_result()
    }
}

impl BudgetInputs {
    /// Checks the cost-plus business constraints.
    ///
    /// The surcharge must lie within the policy's slider bounds.
    pub fn validate(&self, policy: &MarginPolicy) -> Result<(), InputErrors> {
        let mut checker = Checker::new();
        checker.positive("hours_per_day", self.hours_per_day, "Horas por dia deve ser maior que 0.");
        checker.positive("work_days", self.work_days, "Dias úteis deve ser maior que 0.");
        checker.at_least_one(
            "people_count",
            self.people_count,
            "Número de pessoas deve ser pelo menos 1.",
        );
        checker.non_negative("hourly_rate", self.hourly_rate, "Valor da hora não pode ser negativo.");
        checker.non_negative(
            "overhead_cost",
            self.overhead_cost,
            "Custo operacional não pode ser negativo.",
        );
        checker.within(
            "surcharge_percent",
            self.surcharge_percent,
            policy.surcharge_min,
            policy.surcharge_max,
        );
        checker.finish()
    }
}

impl PricingInputs {
    /// Checks the rate-card business constraints.
    pub fn validate(&self) -> Result<(), InputErrors> {
        let mut checker = Checker::new();
        checker.non_negative(
            "base_hourly_rate",
            self.base_hourly_rate,
            "Valor hora base não pode ser negativo.",
        );
        checker.positive(
            "service_complexity_multiplier",
            self.service_complexity_multiplier,
            "Multiplicador de serviço deve ser maior que 0.",
        );
        checker.positive("hours_per_day", self.hours_per_day, "Horas por dia deve ser maior que 0.");
        checker.positive(
            "total_project_hours",
            self.total_project_hours,
            "Horas totais do projeto devem ser maiores que 0.",
        );
        checker.at_least_one(
            "total_team_size",
            self.total_team_size,
            "Total da equipe deve ser pelo menos 1.",
        );
        checker.at_least_one(
            "allocated_team_size",
            self.allocated_team_size,
            "Pessoas alocadas no projeto deve ser pelo menos 1.",
        );
        checker.positive(
            "company_size_multiplier",
            self.company_size_multiplier,
            "Multiplicador de porte deve ser maior que 0.",
        );
        checker.within("reduction_percent", self.reduction_percent, 0.0, 100.0);
        checker.non_negative(
            "overhead_cost",
            self.overhead_cost,
            "Custo operacional não pode ser negativo.",
        );
        checker.positive(
            "price_type_multiplier",
            self.price_type_multiplier,
            "Multiplicador de preço deve ser maior que 0.",
        );
        checker.finish()
    }
}
