use std::io;

use caixa_client::ledger::currency::{CurrencyFormat, format_currency};
use serde_json::Value;

use super::format::{Align, Column, bar, key_value_rows, render_table, terminal_width};

pub fn render_report(data: &Value) -> io::Result<String> {
    let fiscal_year = data.get("fiscal_year").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec![format!("Fluxo de caixa em {fiscal_year}"), String::new()];

    let metrics = data
        .get("metrics")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let metric_entries = metrics
        .iter()
        .map(|metric| {
            (
                value_str(metric, "label"),
                format!(
                    "{} ({})",
                    value_str(metric, "value"),
                    value_str(metric, "delta")
                ),
            )
        })
        .collect::<Vec<(String, String)>>();
    let borrowed = metric_entries
        .iter()
        .map(|(label, value)| (label.as_str(), value.clone()))
        .collect::<Vec<(&str, String)>>();
    lines.extend(key_value_rows(&borrowed, 2));

    let chart = data.get("chart").cloned().unwrap_or(Value::Null);
    lines.push(String::new());
    lines.push(value_str(&chart, "title"));
    lines.push(String::new());
    lines.extend(monthly_table_lines(&chart, "bars"));

    Ok(lines.join("\n"))
}

pub fn render_months(data: &Value) -> io::Result<String> {
    let fiscal_year = data.get("fiscal_year").and_then(Value::as_i64).unwrap_or(0);

    let mut lines = vec![format!("Monthly totals for {fiscal_year}"), String::new()];
    lines.extend(monthly_table_lines(data, "rows"));

    Ok(lines.join("\n"))
}

/// The monthly series as a table, with a proportional text bar per row
/// in place of the dashboard's chart.
fn monthly_table_lines(container: &Value, key: &str) -> Vec<String> {
    let bars = container
        .get(key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if bars.is_empty() {
        return vec!["No monthly totals to show.".to_string()];
    }

    let max_total = bars
        .iter()
        .map(|row| value_f64(row, "total"))
        .fold(0.0f64, f64::max);

    let columns = [
        Column {
            name: "Mês",
            align: Align::Left,
        },
        Column {
            name: "Fluxo",
            align: Align::Left,
        },
        Column {
            name: "Valor (R$)",
            align: Align::Right,
        },
        Column {
            name: "",
            align: Align::Left,
        },
    ];
    let rows = bars
        .iter()
        .map(|row| {
            let total = value_f64(row, "total");
            vec![
                value_str(row, "month_label"),
                value_str(row, "flow_type"),
                brl(total),
                bar(total, max_total),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    render_table(&columns, &rows, terminal_width())
}

fn brl(value: f64) -> String {
    format_currency(value, &CurrencyFormat::default())
}

fn value_str(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn value_f64(row: &Value, key: &str) -> f64 {
    row.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}
