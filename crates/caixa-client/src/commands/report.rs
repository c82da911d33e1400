use crate::config::ReportConfig;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::{ChartData, FlowColors, MonthlyBar, ReportData};
use crate::ledger::currency::CurrencyFormat;
use crate::ledger::load::load_entries;
use crate::ledger::model::LedgerEntry;
use crate::ledger::monthly::{MONTH_LABELS, aggregate_monthly, month_label};
use crate::ledger::summary::{metric_cards, summarize};
use crate::{ClientResult, config};

pub const INFLOW_COLOR: &str = "#00CC96";
pub const OUTFLOW_COLOR: &str = "#EF553B";

pub fn run(path: &str, config_path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let config = config::load_config(config_path)?;
    let entries = load_entries(path)?;
    let report = build_report(&entries, &config)?;
    SuccessEnvelope::for_command("report", report)
}

/// Assembles the full renderer contract from a loaded ledger. Metric
/// values, chart series, and month labels all come out of this one
/// place so no surface recomputes them.
pub fn build_report(entries: &[LedgerEntry], config: &ReportConfig) -> ClientResult<ReportData> {
    let format = CurrencyFormat::default();
    let metrics = summarize(entries, config);

    Ok(ReportData {
        fiscal_year: config.fiscal_year,
        metrics: metric_cards(&metrics, config.fiscal_year, &format),
        chart: ChartData {
            title: "Total de receita bruta e despesas por mês".to_string(),
            x_axis_title: "Mês".to_string(),
            y_axis_title: "Valor (R$)".to_string(),
            colors: FlowColors {
                inflow: INFLOW_COLOR.to_string(),
                outflow: OUTFLOW_COLOR.to_string(),
            },
            bars: monthly_bars(entries, config)?,
        },
        month_labels: MONTH_LABELS.iter().map(|label| label.to_string()).collect(),
    })
}

pub fn monthly_bars(
    entries: &[LedgerEntry],
    config: &ReportConfig,
) -> ClientResult<Vec<MonthlyBar>> {
    aggregate_monthly(entries, &config.always_present)
        .into_iter()
        .map(|aggregate| {
            Ok(MonthlyBar {
                month_label: month_label(aggregate.month)?.to_string(),
                flow_type: aggregate.flow_type.label().to_string(),
                total: aggregate.total,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::build_report;
    use crate::config::ReportConfig;
    use crate::ledger::model::{FlowType, LedgerEntry};

    fn entry(date: &str, amount: f64, flow_type: FlowType) -> LedgerEntry {
        LedgerEntry {
            date: date.parse::<NaiveDate>().unwrap_or_default(),
            name: "Cliente".to_string(),
            description: "Projeto".to_string(),
            classification: "Serviços".to_string(),
            amount,
            flow_type,
        }
    }

    #[test]
    fn report_carries_metrics_chart_and_labels() {
        let entries = [
            entry("2023-01-05", 100.0, FlowType::Inflow),
            entry("2023-01-20", 40.0, FlowType::Outflow),
            entry("2023-02-01", 0.0, FlowType::Inflow),
        ];
        let config = ReportConfig {
            fiscal_year: 2023,
            ..ReportConfig::default()
        };

        let report = build_report(&entries, &config);
        assert!(report.is_ok());
        if let Ok(report) = report {
            assert_eq!(report.fiscal_year, 2023);
            assert_eq!(report.metrics.len(), 5);
            assert_eq!(report.month_labels.len(), 12);
            assert_eq!(report.month_labels[0], "Janeiro");
            assert_eq!(report.chart.x_axis_title, "Mês");
            assert_eq!(report.chart.y_axis_title, "Valor (R$)");
            assert_eq!(report.chart.colors.inflow, "#00CC96");
            assert_eq!(report.chart.colors.outflow, "#EF553B");

            let bars = &report.chart.bars;
            assert_eq!(bars.len(), 3);
            assert_eq!(bars[0].month_label, "Janeiro");
            assert_eq!(bars[0].flow_type, "Entrada");
            assert_eq!(bars[0].total, 100.0);
            assert_eq!(bars[1].flow_type, "Saída");
            assert_eq!(bars[1].total, 40.0);
            assert_eq!(bars[2].month_label, "Fevereiro");
            assert_eq!(bars[2].total, 0.0);
        }
    }
}
