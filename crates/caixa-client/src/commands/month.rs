use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::MonthTableData;
use crate::ledger::currency::CurrencyFormat;
use crate::ledger::load::load_entries;
use crate::ledger::table::month_table;
use crate::{ClientResult, config};

pub fn run(label: &str, path: &str, config_path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let config = config::load_config(config_path)?;
    let entries = load_entries(path)?;
    let rows = month_table(label, &entries, &CurrencyFormat::default())?;

    SuccessEnvelope::for_command(
        "month",
        MonthTableData {
            month_label: label.to_string(),
            fiscal_year: config.fiscal_year,
            rows,
        },
    )
}
