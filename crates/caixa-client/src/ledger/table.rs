use chrono::Datelike;

use crate::ClientResult;
use crate::contracts::types::MonthTableRow;
use crate::ledger::currency::{CurrencyFormat, format_currency};
use crate::ledger::model::LedgerEntry;
use crate::ledger::monthly::month_from_label;

/// Projects the entries of one month into display rows, preserving the
/// ledger's source order. An unknown label is a caller error; a known
/// month with no entries is an empty table, not an error.
pub fn month_table(
    label: &str,
    entries: &[LedgerEntry],
    format: &CurrencyFormat,
) -> ClientResult<Vec<MonthTableRow>> {
    let month = month_from_label(label)?;

    Ok(entries
        .iter()
        .filter(|entry| entry.date.month() == month)
        .map(|entry| MonthTableRow {
            day: entry.date.day(),
            name: entry.name.clone(),
            description: entry.description.clone(),
            classification: entry.classification.clone(),
            amount: format!("R$ {}", format_currency(entry.amount, format)),
            flow_type: entry.flow_type.label().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::month_table;
    use crate::ledger::currency::CurrencyFormat;
    use crate::ledger::model::{FlowType, LedgerEntry};

    fn entry(date: &str, name: &str, amount: f64, flow_type: FlowType) -> LedgerEntry {
        LedgerEntry {
            date: date.parse::<NaiveDate>().unwrap_or_default(),
            name: name.to_string(),
            description: "Projeto".to_string(),
            classification: "Serviços".to_string(),
            amount,
            flow_type,
        }
    }

    #[test]
    fn filters_to_the_requested_month_in_source_order() {
        let entries = [
            entry("2023-01-20", "Fornecedor", 40.0, FlowType::Outflow),
            entry("2023-02-03", "Cliente B", 75.0, FlowType::Inflow),
            entry("2023-01-05", "Cliente A", 1234.5, FlowType::Inflow),
        ];

        let table = month_table("Janeiro", &entries, &CurrencyFormat::default());
        assert!(table.is_ok());
        if let Ok(rows) = table {
            assert_eq!(rows.len(), 2);
            assert_eq!(rows[0].day, 20);
            assert_eq!(rows[0].name, "Fornecedor");
            assert_eq!(rows[0].amount, "R$ 40,00");
            assert_eq!(rows[0].flow_type, "Saída");
            assert_eq!(rows[1].day, 5);
            assert_eq!(rows[1].amount, "R$ 1.234,50");
        }
    }

    #[test]
    fn month_with_no_entries_is_an_empty_table() {
        let entries = [entry("2023-01-05", "Cliente", 10.0, FlowType::Inflow)];

        let table = month_table("Julho", &entries, &CurrencyFormat::default());
        assert!(table.is_ok());
        if let Ok(rows) = table {
            assert!(rows.is_empty());
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        let table = month_table("Smarch", &[], &CurrencyFormat::default());
        assert!(table.is_err());
        if let Err(error) = table {
            assert_eq!(error.code, "unknown_month_label");
        }
    }
}
