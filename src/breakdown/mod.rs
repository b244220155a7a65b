mod calculator;
mod gst;
mod line;
mod months;
mod summary;

pub use calculator::{line_breakdowns, summarize, LineBreakdown};
pub use gst::{gst_exclusive, percent_of, round_money};
pub use line::{parse_date, parse_decimal, DiscountTarget, SpaceLine};
pub use months::{month_span, MonthPolicy};
pub use summary::{BreakdownRow, BreakdownSummary, Context};
