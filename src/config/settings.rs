use serde::{Deserialize, Serialize};

use crate::breakdown::{Context, MonthPolicy};

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub proration: ProrationSettings,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DisplaySettings {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub context: Context,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            context: Context::default(),
        }
    }
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq)]
pub struct ProrationSettings {
    /// How a trailing partial month is counted
    #[serde(default)]
    pub partial_month: MonthPolicy,
}
