use crate::commands::report::monthly_bars;
use crate::contracts::envelope::SuccessEnvelope;
use crate::contracts::types::MonthsData;
use crate::ledger::load::load_entries;
use crate::{ClientResult, config};

pub fn run(path: &str, config_path: Option<&str>) -> ClientResult<SuccessEnvelope> {
    let config = config::load_config(config_path)?;
    let entries = load_entries(path)?;
    let rows = monthly_bars(&entries, &config)?;

    SuccessEnvelope::for_command(
        "months",
        MonthsData {
            fiscal_year: config.fiscal_year,
            rows,
        },
    )
}
