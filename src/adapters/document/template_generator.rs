//! Template-based quote document generator.
//!
//! Renders the client proposal and the internal calculation memo as
//! markdown with a fixed section layout.

use std::fmt::Write;

use crate::domain::foundation::{format_currency, format_percent, Timestamp};
use crate::domain::pricing::{BudgetResult, CompanySize, PriceTier, PricingResult};
use crate::domain::quote::{
    ProposalDetails, Quote, QuoteCalculation, CLIENT_FOOTER, INDICATIVE_VALUE_NOTICE,
};
use crate::ports::{DocumentError, QuoteDocumentGenerator};

/// Fixed wording printed on client proposals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposalTexts {
    pub indicative_notice: String,
    pub client_footer: String,
}

impl Default for ProposalTexts {
    fn default() -> Self {
        Self {
            indicative_notice: INDICATIVE_VALUE_NOTICE.to_string(),
            client_footer: CLIENT_FOOTER.to_string(),
        }
    }
}

/// Template implementation of `QuoteDocumentGenerator`.
#[derive(Debug, Clone, Default)]
pub struct TemplateDocumentGenerator {
    texts: ProposalTexts,
}

impl TemplateDocumentGenerator {
    pub fn new(texts: ProposalTexts) -> Self {
        Self { texts }
    }

    fn write_margin_memo(doc: &mut String, result: &BudgetResult) -> Result<(), DocumentError> {
        let inputs = &result.inputs;

        writeln!(doc, "## 2. Memória de Cálculo (Inputs)\n")?;
        table_header(doc)?;
        row(doc, "Horas por Dia", &number(inputs.hours_per_day))?;
        row(doc, "Dias Úteis", &number(inputs.work_days))?;
        row(doc, "Número de Pessoas", &number(inputs.people_count))?;
        row(doc, "Total de Horas", &number(result.total_hours))?;
        row(doc, "Valor da Hora", &format_currency(inputs.hourly_rate))?;
        row(doc, "Custo Operacional", &format_currency(result.overhead_cost))?;
        row(doc, "Acréscimo (%)", &format_percent(result.surcharge_applied))?;
        doc.push('\n');

        writeln!(doc, "## 3. Resultados e Margens\n")?;
        table_header(doc)?;
        row(doc, "Custo Trabalho", &format_currency(result.labor_cost))?;
        row(doc, "Custo Base", &format_currency(result.base_cost))?;
        for tier in PriceTier::ALL {
            let value = format!(
                "{} (Margem: {})",
                format_currency(result.price(tier)),
                format_percent(result.net_margin(tier))
            );
            row(doc, tier.label(), &value)?;
        }
        row(
            doc,
            "Custo Hora Efetivo",
            &format_currency(result.effective_hourly_cost),
        )?;
        doc.push('\n');
        Ok(())
    }

    fn write_multiplier_memo(
        doc: &mut String,
        area: &str,
        service: &str,
        company_size: CompanySize,
        result: &PricingResult,
    ) -> Result<(), DocumentError> {
        let inputs = &result.inputs;

        writeln!(doc, "## 2. Memória de Cálculo (Inputs)\n")?;
        table_header(doc)?;
        row(doc, "Área", area)?;
        row(doc, "Serviço", service)?;
        row(doc, "Porte da Empresa", company_size.label())?;
        row(doc, "Horas Totais", &format!("{}h", number(inputs.total_project_hours)))?;
        row(doc, "Horas/Dia", &format!("{}h", number(inputs.hours_per_day)))?;
        row(doc, "Dias de Projeto", &format!("{:.1}", result.project_days))?;
        row(doc, "Equipe Total", &format!("{} pessoas", number(inputs.total_team_size)))?;
        row(
            doc,
            "Equipe Projeto",
            &format!("{} pessoas", number(inputs.allocated_team_size)),
        )?;
        row(doc, "Custo Operacional", &format_currency(inputs.overhead_cost))?;
        row(doc, "Redutor Aplicado", &format!("{}%", number(inputs.reduction_percent)))?;
        doc.push('\n');

        writeln!(doc, "## 3. Multiplicadores e Índices\n")?;
        writeln!(doc, "| Índice | Valor | Origem |")?;
        writeln!(doc, "|---|---|---|")?;
        let indices = [
            (
                "Valor Hora Base",
                format_currency(inputs.base_hourly_rate),
                "Tabela de Áreas",
            ),
            (
                "Mult. Serviço",
                number(inputs.service_complexity_multiplier),
                "Tabela de Serviços",
            ),
            (
                "Índice Equipe",
                format!("{:.3}", result.team_index),
                "1 + 0.15 × (Pessoas / Total)",
            ),
            (
                "Mult. Porte",
                number(inputs.company_size_multiplier),
                "Seleção de Porte",
            ),
            (
                "Mult. Preço",
                number(inputs.price_type_multiplier),
                "Tipo de Preço Selecionado",
            ),
        ];
        for (name, value, origin) in indices {
            writeln!(doc, "| {} | {} | {} |", name, value, origin)?;
        }
        doc.push('\n');

        writeln!(doc, "## 4. Resultados Financeiros\n")?;
        table_header(doc)?;
        row(doc, "Valor Hora Ajustado", &format_currency(result.adjusted_hourly_rate))?;
        row(doc, "Preço Base (1.0)", &format_currency(result.base_project_value))?;
        for tier in PriceTier::ALL {
            let label = format!("Cenário {}", tier.short_label());
            row(doc, &label, &format_currency(result.scenario(tier)))?;
        }
        row(doc, "Preço Final", &format_currency(result.final_price))?;
        row(doc, "Lucro Líquido", &format_currency(result.net_profit))?;
        row(doc, "Margem Líquida", &format!("{:.2}%", result.net_margin_percent))?;
        doc.push('\n');
        Ok(())
    }
}

impl QuoteDocumentGenerator for TemplateDocumentGenerator {
    fn client_proposal(
        &self,
        quote: &Quote,
        details: &ProposalDetails,
    ) -> Result<String, DocumentError> {
        let mut doc = String::new();

        let title = non_empty(&details.title).unwrap_or("Proposta Comercial");
        writeln!(doc, "# {}\n", title)?;
        writeln!(doc, "**Proponente:** {}  ", details.proposer)?;
        writeln!(
            doc,
            "**Contratante:** {}\n",
            non_empty(&details.client).unwrap_or("Não informado")
        )?;

        writeln!(doc, "## Escopo\n")?;
        if let QuoteCalculation::Multiplier { area, service, .. } = quote.calculation() {
            writeln!(doc, "- Área: {}", area)?;
            writeln!(doc, "- Serviço: {}", service)?;
        }
        for item in details.scope_items() {
            writeln!(doc, "- {}", item)?;
        }
        doc.push('\n');

        if let Some(summary) = non_empty(&details.project_summary) {
            writeln!(doc, "## Resumo do Projeto\n\n{}\n", summary)?;
        }

        writeln!(doc, "## Investimento\n")?;
        writeln!(
            doc,
            "**Investimento: {}**\n",
            format_currency(quote.selected_price())
        )?;
        writeln!(doc, "*{}*\n", self.texts.indicative_notice)?;

        if let Some(proposal) = non_empty(&details.technical_proposal) {
            writeln!(doc, "## Proposta Técnica\n\n{}\n", proposal)?;
        }

        let team = details.team_members();
        if !team.is_empty() {
            writeln!(doc, "## Equipe do Projeto\n")?;
            for member in team {
                writeln!(doc, "- {}", member)?;
            }
            doc.push('\n');
        }

        writeln!(doc, "## Pagamento\n")?;
        if let Some(modality) = non_empty(&details.payment_modality) {
            writeln!(doc, "- Modalidade: {}", modality)?;
        }
        writeln!(doc, "- Opções aceitas: {}\n", details.payment_options_text())?;

        writeln!(doc, "---\n")?;
        writeln!(doc, "{}", self.texts.client_footer)?;
        Ok(doc)
    }

    fn internal_breakdown(
        &self,
        quote: &Quote,
        details: &ProposalDetails,
        generated_at: Timestamp,
    ) -> Result<String, DocumentError> {
        let mut doc = String::new();

        writeln!(doc, "# DOCUMENTO INTERNO - CONFIDENCIAL\n")?;
        writeln!(doc, "Memória de Cálculo de Precificação\n")?;
        writeln!(doc, "*Gerado em: {}*\n", generated_at.to_display_string())?;

        writeln!(doc, "## 1. Dados do Projeto e Contratante\n")?;
        table_header(&mut doc)?;
        row(&mut doc, "Proponente", &details.proposer)?;
        row(&mut doc, "Contratante", &details.client)?;
        row(&mut doc, "Título/Tema", &details.title)?;
        row(&mut doc, "Tipo de Preço Escolhido", quote.selected_tier().label())?;
        row(&mut doc, "Valor Final", &format_currency(quote.selected_price()))?;
        row(&mut doc, "Margem Aplicada", &format_percent(quote.applied_margin()))?;
        doc.push('\n');

        let next_section = match quote.calculation() {
            QuoteCalculation::Margin { result } => {
                Self::write_margin_memo(&mut doc, result)?;
                4
            }
            QuoteCalculation::Multiplier {
                area,
                service,
                company_size,
                result,
            } => {
                Self::write_multiplier_memo(&mut doc, area, service, *company_size, result)?;
                5
            }
        };

        writeln!(doc, "## {}. Detalhes da Proposta\n", next_section)?;
        writeln!(doc, "### Equipe\n")?;
        let team = details.team_members();
        if team.is_empty() {
            writeln!(doc, "Não informada\n")?;
        } else {
            for member in team {
                writeln!(doc, "- {}", member)?;
            }
            doc.push('\n');
        }
        writeln!(doc, "### Modalidade de Pagamento\n")?;
        writeln!(
            doc,
            "{}\n",
            non_empty(&details.payment_modality).unwrap_or("Não informada")
        )?;
        writeln!(doc, "Opções aceitas: {}", details.payment_options_text())?;
        Ok(doc)
    }
}

fn table_header(doc: &mut String) -> Result<(), DocumentError> {
    writeln!(doc, "| Campo | Valor |")?;
    writeln!(doc, "|---|---|")?;
    Ok(())
}

fn row(doc: &mut String, name: &str, value: &str) -> Result<(), DocumentError> {
    writeln!(doc, "| {} | {} |", cell(name), cell(value))?;
    Ok(())
}

/// Table cells cannot hold pipes or line breaks.
fn cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

fn non_empty(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Whole numbers print without decimals.
fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
