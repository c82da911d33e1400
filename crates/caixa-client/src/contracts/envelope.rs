use serde::Serialize;
use serde_json::Value;

use crate::API_VERSION;
use crate::error::{ClientError, ClientResult};

/// Success payload shared by every report command. `data` holds the
/// command's contract (ReportData, MonthsData, MonthTableData) already
/// serialized, so output surfaces render without touching domain types.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessEnvelope {
    pub ok: bool,
    pub command: String,
    pub version: String,
    pub data: Value,
}

impl SuccessEnvelope {
    /// Wraps a report contract under its command name. Serializing the
    /// contract is the only fallible step.
    pub fn for_command<T>(command: &str, data: T) -> ClientResult<Self>
    where
        T: Serialize,
    {
        let data = serde_json::to_value(data)
            .map_err(|err| ClientError::internal_serialization(&err.to_string()))?;
        Ok(Self {
            ok: true,
            command: command.to_string(),
            version: API_VERSION.to_string(),
            data,
        })
    }
}

/// Failure counterpart: the error triple plus whatever structured
/// detail the error carries (row issues, header sets, month labels).
#[derive(Debug, Clone, Serialize)]
pub struct FailureEnvelope {
    pub ok: bool,
    pub error: ErrorBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
}

impl From<&ClientError> for FailureEnvelope {
    fn from(error: &ClientError) -> Self {
        Self {
            ok: false,
            error: ErrorBody {
                code: error.code.clone(),
                message: error.message.clone(),
                recovery_steps: error.recovery_steps.clone(),
            },
            data: error.data.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{FailureEnvelope, SuccessEnvelope};
    use crate::ClientError;
    use crate::contracts::types::MonthsData;

    #[test]
    fn success_carries_the_serialized_contract() {
        let contract = MonthsData {
            fiscal_year: 2023,
            rows: Vec::new(),
        };

        let envelope = SuccessEnvelope::for_command("months", contract);
        assert!(envelope.is_ok());
        if let Ok(envelope) = envelope {
            assert!(envelope.ok);
            assert_eq!(envelope.command, "months");
            assert_eq!(envelope.version, crate::API_VERSION);
            assert_eq!(envelope.data["fiscal_year"], 2023);
            assert_eq!(envelope.data["rows"], json!([]));
        }
    }

    #[test]
    fn failure_keeps_the_error_detail() {
        let error = ClientError::unknown_month_label("Smarch");

        let envelope = FailureEnvelope::from(&error);
        assert!(!envelope.ok);
        assert_eq!(envelope.error.code, "unknown_month_label");
        assert!(!envelope.error.recovery_steps.is_empty());
        let data = envelope.data.unwrap_or_default();
        assert_eq!(data["label"], "Smarch");
    }

    #[test]
    fn failure_without_detail_omits_data() {
        let error = ClientError::new("some_code", "it broke", vec![]);

        let envelope = FailureEnvelope::from(&error);
        assert!(envelope.data.is_none());

        let serialized = serde_json::to_value(&envelope);
        assert!(serialized.is_ok());
        if let Ok(value) = serialized {
            assert!(value.get("data").is_none());
        }
    }
}
