use std::collections::BTreeMap;

use chrono::Datelike;

use crate::config::ZeroFillPair;
use crate::ledger::currency::round_to_2dp;
use crate::ledger::model::{FlowType, LedgerEntry};
use crate::{ClientError, ClientResult};

/// The twelve month names, indexed by month number minus one. The
/// mapping is total over 1-12 and nothing else.
pub const MONTH_LABELS: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Sum of all entries sharing a month and flow type, rounded to two
/// decimal places (half away from zero).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAggregate {
    pub month: u32,
    pub flow_type: FlowType,
    pub total: f64,
}

pub fn month_label(month: u32) -> ClientResult<&'static str> {
    (month as usize)
        .checked_sub(1)
        .and_then(|index| MONTH_LABELS.get(index))
        .copied()
        .ok_or_else(|| ClientError::unknown_month(month))
}

pub fn month_from_label(label: &str) -> ClientResult<u32> {
    MONTH_LABELS
        .iter()
        .position(|name| *name == label)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| ClientError::unknown_month_label(label))
}

/// Partitions entries by (month, flow type) and sums each partition.
/// Every entry lands in exactly one partition. Configured
/// `always_present` pairs with no entries are synthesized at zero so
/// the rendered series has no gaps. Output is sorted by month
/// ascending, then flow label ascending.
pub fn aggregate_monthly(
    entries: &[LedgerEntry],
    always_present: &[ZeroFillPair],
) -> Vec<MonthlyAggregate> {
    let mut totals: BTreeMap<(u32, &'static str), (FlowType, f64)> = BTreeMap::new();

    for entry in entries {
        let key = (entry.date.month(), entry.flow_type.label());
        let slot = totals.entry(key).or_insert((entry.flow_type, 0.0));
        slot.1 += entry.amount;
    }

    for pair in always_present {
        totals
            .entry((pair.month, pair.flow_type.label()))
            .or_insert((pair.flow_type, 0.0));
    }

    totals
        .into_iter()
        .map(|((month, _), (flow_type, total))| MonthlyAggregate {
            month,
            flow_type,
            total: round_to_2dp(total),
        })
        .collect()
}
