use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a cash movement. Exactly two values exist; anything
/// else in a ledger file is a row-level data-quality error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowType {
    #[serde(alias = "entrada", alias = "Entrada")]
    Inflow,
    #[serde(alias = "saída", alias = "saida", alias = "Saída")]
    Outflow,
}

impl FlowType {
    /// Ledger-facing label. Also the tie-break sort key for the monthly
    /// series, so `Entrada` orders before `Saída`.
    pub fn label(self) -> &'static str {
        match self {
            FlowType::Inflow => "Entrada",
            FlowType::Outflow => "Saída",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "entrada" | "inflow" => Some(FlowType::Inflow),
            "saída" | "saida" | "outflow" => Some(FlowType::Outflow),
            _ => None,
        }
    }
}

/// One ledger row. Amounts are recorded positive; the direction of the
/// movement is carried by `flow_type`. Immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub name: String,
    pub description: String,
    pub classification: String,
    pub amount: f64,
    pub flow_type: FlowType,
}
