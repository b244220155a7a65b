use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

/// What a line's discount applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscountTarget {
    DisplayCost,
    Other,
}

/// One bookable ad space within a booking, proposal or campaign.
///
/// Every numeric field is optional: absent, `null` and non-numeric values
/// all decode to `None` and count as zero when the line is priced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceLine {
    #[serde(default, alias = "_id", deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(default, alias = "spaceName", alias = "title", deserialize_with = "lenient_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_display_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub display_cost_gst_percentage: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_discount_target")]
    pub discount_on: Option<DiscountTarget>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discount_percentage: Option<Decimal>,
    /// Per-month display rate overriding the derived one
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub discounted_display_cost: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_printing_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub printing_gst_percentage: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub total_mounting_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub mounting_gst_percentage: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub one_time_installation_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub monthly_additional_cost: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub other_charges: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_decimal")]
    pub campaign_price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub price: Option<Decimal>,

    #[serde(default, deserialize_with = "lenient_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient_date")]
    pub end_date: Option<NaiveDate>,
}

impl SpaceLine {
    /// Label for listings: name, then id, then the 1-based position
    pub fn label(&self, position: usize) -> String {
        self.name
            .clone()
            .or_else(|| self.id.clone())
            .unwrap_or_else(|| format!("#{position}"))
    }

    pub fn discounts_display_cost(&self) -> bool {
        self.discount_on == Some(DiscountTarget::DisplayCost)
    }

    /// Both ends of the booking period, when known
    pub fn period(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start_date?, self.end_date?))
    }

    /// Contractual price: a non-zero campaign price wins over the list price
    pub fn contract_price(&self) -> Decimal {
        self.campaign_price
            .filter(|p| !p.is_zero())
            .or(self.price)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Parse a decimal from text such as `"1180"`, `"18.5"` or `"1e3"`
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
}

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(decimal_from_value))
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => parse_date(&s),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

fn lenient_discount_target<'de, D>(deserializer: D) -> Result<Option<DiscountTarget>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s == "displayCost" => Some(DiscountTarget::DisplayCost),
        Some(_) => Some(DiscountTarget::Other),
    })
}
