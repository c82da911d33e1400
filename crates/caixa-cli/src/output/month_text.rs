use std::io;

use serde_json::Value;

use super::format::{Align, Column, render_table, terminal_width};

pub fn render_month(data: &Value) -> io::Result<String> {
    let label = data
        .get("month_label")
        .and_then(Value::as_str)
        .unwrap_or("");
    let fiscal_year = data.get("fiscal_year").and_then(Value::as_i64).unwrap_or(0);
    let rows = data
        .get("rows")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    if rows.is_empty() {
        return Ok(format!("No entries recorded for {label} {fiscal_year}."));
    }

    let columns = [
        Column {
            name: "Dia",
            align: Align::Right,
        },
        Column {
            name: "Nome",
            align: Align::Left,
        },
        Column {
            name: "Descrição",
            align: Align::Left,
        },
        Column {
            name: "Classificação",
            align: Align::Left,
        },
        Column {
            name: "Valor",
            align: Align::Right,
        },
        Column {
            name: "Fluxo",
            align: Align::Left,
        },
    ];
    let table_rows = rows
        .iter()
        .map(|row| {
            vec![
                row.get("day")
                    .and_then(Value::as_u64)
                    .unwrap_or(0)
                    .to_string(),
                value_str(row, "name"),
                value_str(row, "description"),
                value_str(row, "classification"),
                value_str(row, "amount"),
                value_str(row, "flow_type"),
            ]
        })
        .collect::<Vec<Vec<String>>>();

    let mut lines = vec![format!("{label} {fiscal_year}"), String::new()];
    lines.extend(render_table(&columns, &table_rows, terminal_width()));
    Ok(lines.join("\n"))
}

fn value_str(row: &Value, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
