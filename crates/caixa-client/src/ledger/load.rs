use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::Path;

use chrono::NaiveDate;

use crate::contracts::types::{LoadSummary, RowIssue};
use crate::ledger::model::{FlowType, LedgerEntry};
use crate::{ClientError, ClientResult};

pub const REQUIRED_HEADERS: [&str; 6] = [
    "date",
    "name",
    "description",
    "classification",
    "amount",
    "flow_type",
];

/// Reads the ledger file and parses every row, preserving source row
/// order. Row-level problems never skip silently: when any row fails to
/// parse the whole load aborts with every issue listed.
pub fn load_entries(path: &str) -> ClientResult<Vec<LedgerEntry>> {
    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ClientError::ledger_file_missing(Path::new(path)),
        _ => ClientError::ledger_file_unreadable(Path::new(path), &err.to_string()),
    })?;
    parse_ledger(&content)
}

pub fn parse_ledger(content: &str) -> ClientResult<Vec<LedgerEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(content.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| {
            ClientError::ledger_schema_mismatch(expected_headers(), Vec::new())
        })?
        .iter()
        .map(|value| value.trim().to_string())
        .collect::<Vec<String>>();

    if !headers_are_valid(&headers) {
        return Err(ClientError::ledger_schema_mismatch(
            expected_headers(),
            headers,
        ));
    }

    let index_by_name = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.to_string(), index))
        .collect::<HashMap<String, usize>>();

    let mut entries = Vec::new();
    let mut issues = Vec::new();
    let mut rows_read = 0i64;

    for (record_index, result_row) in reader.records().enumerate() {
        let row = (record_index as i64) + 1;
        rows_read += 1;

        let Ok(record) = result_row else {
            issues.push(RowIssue {
                row,
                field: "row".to_string(),
                code: "malformed_row".to_string(),
                description: "Row is malformed CSV or not UTF-8.".to_string(),
                expected: None,
                received: None,
            });
            continue;
        };

        let mut row_issues = Vec::new();
        let date = validate_date(row, value_for(&record, &index_by_name, "date"), &mut row_issues);
        let amount = validate_amount(
            row,
            value_for(&record, &index_by_name, "amount"),
            &mut row_issues,
        );
        let flow_type = validate_flow_type(
            row,
            value_for(&record, &index_by_name, "flow_type"),
            &mut row_issues,
        );

        if row_issues.is_empty() {
            entries.push(LedgerEntry {
                date: date.unwrap_or_default(),
                name: text_for(&record, &index_by_name, "name"),
                description: text_for(&record, &index_by_name, "description"),
                classification: text_for(&record, &index_by_name, "classification"),
                amount: amount.unwrap_or_default(),
                flow_type: flow_type.unwrap_or(FlowType::Inflow),
            });
        } else {
            issues.extend(row_issues);
        }
    }

    if !issues.is_empty() {
        let summary = LoadSummary {
            rows_read,
            rows_valid: entries.len() as i64,
            rows_invalid: issues
                .iter()
                .map(|issue| issue.row)
                .collect::<HashSet<i64>>()
                .len() as i64,
        };
        return Err(ClientError::ledger_rows_invalid(summary, issues));
    }

    Ok(entries)
}

fn value_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> Option<String> {
    let index = index_by_name.get(field_name)?;
    let value = record.get(*index)?;
    Some(value.to_string())
}

fn text_for(
    record: &csv::StringRecord,
    index_by_name: &HashMap<String, usize>,
    field_name: &str,
) -> String {
    value_for(record, index_by_name, field_name)
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

fn validate_date(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RowIssue>,
) -> Option<NaiveDate> {
    let candidate = value.map(|raw| raw.trim().to_string()).unwrap_or_default();
    let parsed = NaiveDate::parse_from_str(&candidate, "%Y-%m-%d");
    if let Ok(date) = parsed {
        return Some(date);
    }

    issues.push(RowIssue {
        row,
        field: "date".to_string(),
        code: "invalid_date".to_string(),
        description: format!("date must be YYYY-MM-DD; got \"{candidate}\""),
        expected: Some("YYYY-MM-DD".to_string()),
        received: Some(candidate),
    });
    None
}

fn validate_amount(row: i64, value: Option<String>, issues: &mut Vec<RowIssue>) -> Option<f64> {
    let candidate = value.map(|raw| raw.trim().to_string()).unwrap_or_default();

    // `inf`/`NaN` parse as f64 but are not amounts; they fall through
    // to the invalid_number issue.
    match candidate.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => return Some(amount),
        Ok(amount) if amount.is_finite() => {
            issues.push(RowIssue {
                row,
                field: "amount".to_string(),
                code: "negative_amount".to_string(),
                description:
                    "amount must be non-negative; the movement direction belongs in flow_type."
                        .to_string(),
                expected: Some("number >= 0 (e.g. 42.15)".to_string()),
                received: Some(candidate),
            });
            return None;
        }
        _ => {}
    }

    issues.push(RowIssue {
        row,
        field: "amount".to_string(),
        code: "invalid_number".to_string(),
        description: format!("amount must be numeric; got \"{candidate}\""),
        expected: Some("number >= 0 (e.g. 42.15)".to_string()),
        received: Some(candidate),
    });
    None
}

fn validate_flow_type(
    row: i64,
    value: Option<String>,
    issues: &mut Vec<RowIssue>,
) -> Option<FlowType> {
    let candidate = value.map(|raw| raw.trim().to_string()).unwrap_or_default();
    if let Some(flow_type) = FlowType::parse(&candidate) {
        return Some(flow_type);
    }

    issues.push(RowIssue {
        row,
        field: "flow_type".to_string(),
        code: "unknown_flow_type".to_string(),
        description: format!("flow_type must be Entrada or Saída; got \"{candidate}\""),
        expected: Some("Entrada | Saída".to_string()),
        received: Some(candidate),
    });
    None
}

fn headers_are_valid(actual_headers: &[String]) -> bool {
    for required in REQUIRED_HEADERS {
        if !actual_headers.iter().any(|value| value == required) {
            return false;
        }
    }

    actual_headers
        .iter()
        .all(|header| REQUIRED_HEADERS.contains(&header.as_str()))
}

fn expected_headers() -> Vec<String> {
    REQUIRED_HEADERS
        .iter()
        .map(|value| value.to_string())
        .collect()
}
