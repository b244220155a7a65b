use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a trailing partial month counts toward per-month rates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MonthPolicy {
    /// Fraction of the calendar month the remaining days fall in
    #[default]
    Exact,
    /// Any partial month counts as a full month
    Ceil,
}

impl std::fmt::Display for MonthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MonthPolicy::Exact => write!(f, "exact"),
            MonthPolicy::Ceil => write!(f, "ceil"),
        }
    }
}

fn shift(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// Number of months spanned by an inclusive date range.
///
/// Whole months are stepped from `start` on the calendar (Jan 31 + 1 month
/// is Feb 28), the leftover days are a partial month counted per `policy`.
/// A range whose end falls before its start spans zero months.
pub fn month_span(start: NaiveDate, end: NaiveDate, policy: MonthPolicy) -> Decimal {
    let Some(end_exclusive) = end.succ_opt() else {
        return Decimal::ZERO;
    };
    if end_exclusive <= start {
        return Decimal::ZERO;
    }

    let rough = (end_exclusive.year() - start.year()) * 12 + end_exclusive.month() as i32
        - start.month() as i32;
    let mut whole = rough.max(0) as u32;
    while whole > 0 && shift(start, whole).map_or(true, |d| d > end_exclusive) {
        whole -= 1;
    }

    let (Some(anchor), Some(next)) = (shift(start, whole), shift(start, whole + 1)) else {
        return Decimal::from(whole);
    };
    let remaining = (end_exclusive - anchor).num_days();
    if remaining <= 0 {
        return Decimal::from(whole);
    }

    match policy {
        MonthPolicy::Ceil => Decimal::from(whole + 1),
        MonthPolicy::Exact => {
            let period = (next - anchor).num_days();
            Decimal::from(whole) + Decimal::from(remaining) / Decimal::from(period)
        }
    }
}
