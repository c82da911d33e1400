use caixa_client::ClientError;
use serde_json::Value;

pub fn render_error(error: &ClientError) -> String {
    let mut lines = vec![
        "Something went wrong, but it's easy to fix.".to_string(),
        String::new(),
        format!("  Error:    {}", error.code),
        format!("  Details:  {}", error.message),
    ];

    lines.extend(error_detail_lines(error));

    lines.push(String::new());
    lines.push("What to do next:".to_string());
    if error.recovery_steps.is_empty() {
        lines.push("  1. Retry the command.".to_string());
    } else {
        for (index, step) in error.recovery_steps.iter().enumerate() {
            lines.push(format!("  {}. {step}", index + 1));
        }
    }

    lines.join("\n")
}

/// Code-specific detail blocks so the user never has to reach for
/// --json to see what exactly is wrong.
fn error_detail_lines(error: &ClientError) -> Vec<String> {
    let Some(data) = &error.data else {
        return Vec::new();
    };

    match error.code.as_str() {
        "ledger_schema_mismatch" => schema_lines(data),
        "ledger_rows_invalid" => issue_lines(data),
        _ => Vec::new(),
    }
}

fn schema_lines(data: &Value) -> Vec<String> {
    vec![
        String::new(),
        format!("  Required headers:  {}", header_list(data, "required_headers")),
        format!("  Found headers:     {}", header_list(data, "actual_headers")),
    ]
}

fn header_list(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<&str>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn issue_lines(data: &Value) -> Vec<String> {
    let issues = data
        .get("issues")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if issues.is_empty() {
        return Vec::new();
    }

    let mut lines = vec![String::new(), "  Rows to fix:".to_string()];
    for issue in &issues {
        let row = issue.get("row").and_then(Value::as_i64).unwrap_or(0);
        let field = issue.get("field").and_then(Value::as_str).unwrap_or("");
        let description = issue
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or("");
        lines.push(format!("    row {row}, {field}: {description}"));
    }

    lines
}
