use std::io;

use caixa_client::{ClientError, SuccessEnvelope};
use serde::Serialize;
use serde_json::{Value, json};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        "report" | "months" | "month" => json!({
            "ok": true,
            "version": JSON_VERSION,
            "data": success.data.clone()
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &ClientError) -> io::Result<String> {
    let mut inner = json!({
        "code": error.code,
        "message": error.message,
        "recovery_steps": error.recovery_steps,
    });
    if let (Some(data), Some(object)) = (&error.data, inner.as_object_mut()) {
        object.insert("data".to_string(), data.clone());
    }

    serialize_json_pretty(&json!({ "error": inner }))
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use caixa_client::{ClientError, SuccessEnvelope};
    use serde_json::{Value, json};

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    #[test]
    fn report_json_uses_structured_envelope() {
        let payload = success(
            "report",
            json!({
                "fiscal_year": 2023,
                "metrics": [],
                "chart": {"bars": []},
                "month_labels": []
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["data"]["fiscal_year"], json!(2023));
            }
        }
    }

    #[test]
    fn runtime_error_json_uses_universal_shape() {
        let error = ClientError::new("not_found", "missing", vec!["run report".to_string()]);
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("not_found".to_string())
                );
                assert!(value.get("ok").is_none());
                assert!(value["error"].get("data").is_none());
            }
        }
    }

    #[test]
    fn error_json_carries_structured_data_when_present() {
        let error = ClientError::ledger_schema_mismatch(
            vec!["date".to_string()],
            vec!["when".to_string()],
        );
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["error"]["data"]["actual_headers"][0], json!("when"));
            }
        }
    }
}
