use crate::config::ReportConfig;
use crate::contracts::types::MetricCard;
use crate::ledger::currency::{CurrencyFormat, format_currency, round_to_2dp};
use crate::ledger::model::{FlowType, LedgerEntry};

/// Fiscal-year totals plus the position figures carried over from
/// configuration. Every monetary field is rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryMetrics {
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub current_balance: f64,
    pub receivables_due_month: f64,
    pub receivables_future: f64,
    pub payables_due_month: f64,
    pub payables_future: f64,
    pub projected_balance: f64,
}

pub fn summarize(entries: &[LedgerEntry], config: &ReportConfig) -> SummaryMetrics {
    let total_inflow = round_to_2dp(flow_total(entries, FlowType::Inflow));
    let total_outflow = round_to_2dp(flow_total(entries, FlowType::Outflow));
    let current_balance = round_to_2dp(config.prior_balance + total_inflow - total_outflow);
    let projected_balance = round_to_2dp(
        current_balance + config.receivables_due_month + config.receivables_future
            - config.payables_due_month
            - config.payables_future,
    );

    SummaryMetrics {
        total_inflow,
        total_outflow,
        current_balance,
        receivables_due_month: round_to_2dp(config.receivables_due_month),
        receivables_future: round_to_2dp(config.receivables_future),
        payables_due_month: round_to_2dp(config.payables_due_month),
        payables_future: round_to_2dp(config.payables_future),
        projected_balance,
    }
}

/// The five headline cards, in presentation order. Values and deltas
/// are pre-rendered currency strings so every surface shows identical
/// figures.
pub fn metric_cards(
    metrics: &SummaryMetrics,
    fiscal_year: i32,
    format: &CurrencyFormat,
) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: format!("Receita bruta total em {fiscal_year}"),
            value: money(metrics.total_inflow, format),
            delta: money(metrics.total_inflow, format),
        },
        MetricCard {
            label: format!("Despesas totais em {fiscal_year}"),
            value: money(metrics.total_outflow, format),
            delta: negative_money(metrics.total_outflow, format),
        },
        MetricCard {
            label: "Saldo atual".to_string(),
            value: money(metrics.current_balance, format),
            delta: money(metrics.projected_balance, format),
        },
        MetricCard {
            label: "Contas a receber no mês".to_string(),
            value: money(metrics.receivables_due_month, format),
            delta: money(metrics.receivables_future, format),
        },
        MetricCard {
            label: "Contas a pagar no mês".to_string(),
            value: money(metrics.payables_due_month, format),
            delta: negative_money(metrics.payables_future, format),
        },
    ]
}

fn flow_total(entries: &[LedgerEntry], flow_type: FlowType) -> f64 {
    entries
        .iter()
        .filter(|entry| entry.flow_type == flow_type)
        .map(|entry| entry.amount)
        .sum()
}

fn money(value: f64, format: &CurrencyFormat) -> String {
    format!("R$ {}", format_currency(value, format))
}

/// Expense deltas are always shown as an outgoing movement, sign first.
fn negative_money(value: f64, format: &CurrencyFormat) -> String {
    format!("-R$ {}", format_currency(value, format))
}
