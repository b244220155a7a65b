pub mod breakdown;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod logging;

pub use breakdown::{
    line_breakdowns, month_span, summarize, BreakdownSummary, Context, LineBreakdown,
    MonthPolicy, SpaceLine,
};
pub use config::Config;
pub use error::{BreakdownError, Result};
pub use input::{load_lines, parse_lines};
