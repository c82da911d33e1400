use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RowIssue {
    pub row: i64,
    pub field: String,
    pub code: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoadSummary {
    pub rows_read: i64,
    pub rows_valid: i64,
    pub rows_invalid: i64,
}

/// One summary metric triple: label, formatted current value, formatted
/// delta. Delta semantics are fixed per metric (see ledger::summary).
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    pub delta: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FlowColors {
    pub inflow: String,
    pub outflow: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyBar {
    pub month_label: String,
    pub flow_type: String,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub colors: FlowColors,
    pub bars: Vec<MonthlyBar>,
}

/// The aggregator-to-renderer contract: everything a presentation
/// surface needs to draw the report, with no recomputation.
#[derive(Debug, Clone, Serialize)]
pub struct ReportData {
    pub fiscal_year: i32,
    pub metrics: Vec<MetricCard>,
    pub chart: ChartData,
    pub month_labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthsData {
    pub fiscal_year: i32,
    pub rows: Vec<MonthlyBar>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthTableRow {
    pub day: u32,
    pub name: String,
    pub description: String,
    pub classification: String,
    pub amount: String,
    pub flow_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthTableData {
    pub month_label: String,
    pub fiscal_year: i32,
    pub rows: Vec<MonthTableRow>,
}
