use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

use crate::contracts::types::{LoadSummary, RowIssue};
use crate::ledger::monthly::MONTH_LABELS;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `caixa {cmd} --help` for usage."),
            None => "Run `caixa --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn invalid_argument_with_recovery(message: &str, recovery_steps: Vec<String>) -> Self {
        Self::new("invalid_argument", message, recovery_steps)
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }

    pub fn ledger_file_missing(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_file_missing",
            &format!("Ledger file `{location}` was not found."),
            vec![
                format!("Check that `{location}` exists and the path is spelled correctly."),
                "Run `caixa report --help` for the expected ledger schema.".to_string(),
            ],
        )
    }

    pub fn ledger_file_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "ledger_file_unreadable",
            &format!("Ledger file `{location}` could not be read: {detail}"),
            vec![format!(
                "Grant read access to `{location}` and make sure it is UTF-8 encoded CSV."
            )],
        )
    }

    pub fn ledger_schema_mismatch(
        required_headers: Vec<String>,
        actual_headers: Vec<String>,
    ) -> Self {
        Self::new(
            "ledger_schema_mismatch",
            "CSV headers do not satisfy the ledger schema.",
            vec![
                "Include all required headers and no unknown headers.".to_string(),
                "Run `caixa report --help` to review the ledger schema.".to_string(),
            ],
        )
        .with_data(json!({
            "required_headers": required_headers,
            "actual_headers": actual_headers,
        }))
    }

    pub fn ledger_rows_invalid(summary: LoadSummary, issues: Vec<RowIssue>) -> Self {
        let issue_count = summary.rows_invalid;
        Self::new(
            "ledger_rows_invalid",
            &format!(
                "Ledger failed validation: {issue_count} rows need fixes. No report was produced."
            ),
            vec![
                "Fix the listed rows in your ledger file.".to_string(),
                "Rerun the command once every row parses.".to_string(),
            ],
        )
        .with_data(json!({
            "summary": summary,
            "issues": issues,
        }))
    }

    pub fn config_file_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "config_file_unreadable",
            &format!("Config file `{location}` could not be read: {detail}"),
            vec![format!("Check that `{location}` exists and is readable.")],
        )
    }

    pub fn config_invalid(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "config_invalid",
            &format!("Config file `{location}` is not a valid report configuration: {detail}"),
            vec![
                "Provide a JSON object with the report configuration fields.".to_string(),
                "Run `caixa report --help` to review the configuration schema.".to_string(),
            ],
        )
    }

    pub fn unknown_month(month: u32) -> Self {
        Self::new(
            "unknown_month",
            &format!("Month number {month} is outside 1-12. This is a defect, not bad input."),
            Vec::new(),
        )
    }

    pub fn unknown_month_label(label: &str) -> Self {
        Self::new(
            "unknown_month_label",
            &format!("`{label}` is not a recognized month name."),
            vec![format!("Use one of: {}.", MONTH_LABELS.join(", "))],
        )
        .with_data(json!({
            "label": label,
            "month_labels": MONTH_LABELS,
        }))
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
