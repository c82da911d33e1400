use std::fs;
use std::io;
use std::path::Path;

use chrono::Datelike;
use serde::Deserialize;

use crate::ledger::model::FlowType;
use crate::{ClientError, ClientResult};

/// A (month, flow type) combination that must appear in the monthly
/// series even when the ledger has no entries for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ZeroFillPair {
    pub month: u32,
    pub flow_type: FlowType,
}

/// Report inputs that are not derivable from the ledger itself. All
/// monetary constants default to zero so a bare ledger still reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "current_year")]
    pub fiscal_year: i32,
    #[serde(default)]
    pub prior_balance: f64,
    #[serde(default)]
    pub receivables_due_month: f64,
    #[serde(default)]
    pub receivables_future: f64,
    #[serde(default)]
    pub payables_due_month: f64,
    #[serde(default)]
    pub payables_future: f64,
    #[serde(default)]
    pub always_present: Vec<ZeroFillPair>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            fiscal_year: current_year(),
            prior_balance: 0.0,
            receivables_due_month: 0.0,
            receivables_future: 0.0,
            payables_due_month: 0.0,
            payables_future: 0.0,
            always_present: Vec::new(),
        }
    }
}

pub fn load_config(path: Option<&str>) -> ClientResult<ReportConfig> {
    let Some(path) = path else {
        return Ok(ReportConfig::default());
    };

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ClientError::config_file_unreadable(
            Path::new(path),
            "no such file",
        ),
        _ => ClientError::config_file_unreadable(Path::new(path), &err.to_string()),
    })?;

    let config = serde_json::from_str::<ReportConfig>(&content)
        .map_err(|err| ClientError::config_invalid(Path::new(path), &err.to_string()))?;

    for pair in &config.always_present {
        if pair.month == 0 || pair.month > 12 {
            return Err(ClientError::config_invalid(
                Path::new(path),
                &format!("always_present month {} is outside 1-12", pair.month),
            ));
        }
    }

    Ok(config)
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::{ReportConfig, load_config};
    use crate::ledger::model::FlowType;

    #[test]
    fn missing_config_path_uses_defaults() {
        let config = load_config(None);
        assert!(config.is_ok());
        if let Ok(value) = config {
            assert_eq!(value.prior_balance, 0.0);
            assert!(value.always_present.is_empty());
        }
    }

    #[test]
    fn config_file_fields_override_defaults() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("report.json");
            let body = r#"{
                "fiscal_year": 2023,
                "prior_balance": 1702.32,
                "receivables_due_month": 2725.0,
                "always_present": [
                    {"month": 1, "flow_type": "inflow"},
                    {"month": 5, "flow_type": "entrada"}
                ]
            }"#;
            assert!(fs::write(&path, body).is_ok());

            let loaded = load_config(Some(&path.display().to_string()));
            assert!(loaded.is_ok());
            if let Ok(config) = loaded {
                assert_eq!(config.fiscal_year, 2023);
                assert_eq!(config.prior_balance, 1702.32);
                assert_eq!(config.receivables_due_month, 2725.0);
                assert_eq!(config.payables_future, 0.0);
                assert_eq!(config.always_present.len(), 2);
                assert_eq!(config.always_present[1].flow_type, FlowType::Inflow);
            }
        }
    }

    #[test]
    fn missing_config_file_is_reported() {
        let missing = load_config(Some("./definitely-not-here.json"));
        assert!(missing.is_err());
        if let Err(error) = missing {
            assert_eq!(error.code, "config_file_unreadable");
        }
    }

    #[test]
    fn out_of_range_zero_fill_month_is_rejected() {
        let dir = tempdir();
        assert!(dir.is_ok());
        if let Ok(dir) = dir {
            let path = dir.path().join("report.json");
            let body = r#"{"always_present": [{"month": 13, "flow_type": "inflow"}]}"#;
            assert!(fs::write(&path, body).is_ok());

            let loaded = load_config(Some(&path.display().to_string()));
            assert!(loaded.is_err());
            if let Err(error) = loaded {
                assert_eq!(error.code, "config_invalid");
            }
        }
    }

    #[test]
    fn default_fiscal_year_is_plausible() {
        let config = ReportConfig::default();
        assert!(config.fiscal_year >= 2023);
    }
}
