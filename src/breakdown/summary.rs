use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Which audience a breakdown is rendered for.
///
/// Bookings show GST and discount rows; proposals show base costs only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Context {
    #[default]
    Booking,
    Proposal,
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Context::Booking => write!(f, "booking"),
            Context::Proposal => write!(f, "proposal"),
        }
    }
}

/// Aggregate cost breakdown over a set of space lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownSummary {
    /// GST-exclusive display cost
    pub total_display_cost: Decimal,
    /// Display cost after per-month overrides, for comparison with the base
    pub discounted_display_cost: Decimal,
    /// GST on the display cost net of discount
    pub display_cost_gst: Decimal,
    pub total_printing_cost: Decimal,
    pub printing_cost_gst: Decimal,
    pub total_mounting_cost: Decimal,
    pub mounting_cost_gst: Decimal,
    pub one_time_installation_cost: Decimal,
    pub monthly_additional_cost: Decimal,
    pub other_charges: Decimal,
    /// Sum of contractual prices
    pub total_price: Decimal,
    /// Discount taken off the display cost
    pub discount: Decimal,
}

/// A labelled amount ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub amount: Decimal,
}

impl BreakdownRow {
    fn new(label: &'static str, amount: Decimal) -> Self {
        Self { label, amount }
    }
}

impl BreakdownSummary {
    /// Base costs without GST or discount
    pub fn base_total(&self) -> Decimal {
        self.total_display_cost
            .saturating_add(self.total_printing_cost)
            .saturating_add(self.total_mounting_cost)
            .saturating_add(self.one_time_installation_cost)
            .saturating_add(self.monthly_additional_cost)
            .saturating_add(self.other_charges)
    }

    pub fn total_gst(&self) -> Decimal {
        self.display_cost_gst
            .saturating_add(self.printing_cost_gst)
            .saturating_add(self.mounting_cost_gst)
    }

    /// Grand total as shown for the given context
    pub fn grand_total(&self, context: Context) -> Decimal {
        match context {
            Context::Booking => self
                .base_total()
                .saturating_sub(self.discount)
                .saturating_add(self.total_gst()),
            Context::Proposal => self.base_total(),
        }
    }

    /// Rows to render for the given context, ending with the grand total
    pub fn rows(&self, context: Context) -> Vec<BreakdownRow> {
        let booking = context == Context::Booking;
        let mut rows = vec![BreakdownRow::new("Display cost", self.total_display_cost)];

        if booking {
            rows.push(BreakdownRow::new("Discount", -self.discount));
            rows.push(BreakdownRow::new("Display GST", self.display_cost_gst));
        }
        rows.push(BreakdownRow::new("Printing cost", self.total_printing_cost));
        if booking {
            rows.push(BreakdownRow::new("Printing GST", self.printing_cost_gst));
        }
        rows.push(BreakdownRow::new("Mounting cost", self.total_mounting_cost));
        if booking {
            rows.push(BreakdownRow::new("Mounting GST", self.mounting_cost_gst));
        }
        rows.push(BreakdownRow::new("Installation", self.one_time_installation_cost));
        rows.push(BreakdownRow::new("Additional monthly cost", self.monthly_additional_cost));
        rows.push(BreakdownRow::new("Other charges", self.other_charges));
        rows.push(BreakdownRow::new("Grand total", self.grand_total(context)));

        rows
    }
}

fn accumulate(total: &mut Decimal, amount: Decimal) {
    *total = total.saturating_add(amount);
}

impl AddAssign<&BreakdownSummary> for BreakdownSummary {
    fn add_assign(&mut self, rhs: &BreakdownSummary) {
        accumulate(&mut self.total_display_cost, rhs.total_display_cost);
        accumulate(&mut self.discounted_display_cost, rhs.discounted_display_cost);
        accumulate(&mut self.display_cost_gst, rhs.display_cost_gst);
        accumulate(&mut self.total_printing_cost, rhs.total_printing_cost);
        accumulate(&mut self.printing_cost_gst, rhs.printing_cost_gst);
        accumulate(&mut self.total_mounting_cost, rhs.total_mounting_cost);
        accumulate(&mut self.mounting_cost_gst, rhs.mounting_cost_gst);
        accumulate(&mut self.one_time_installation_cost, rhs.one_time_installation_cost);
        accumulate(&mut self.monthly_additional_cost, rhs.monthly_additional_cost);
        accumulate(&mut self.other_charges, rhs.other_charges);
        accumulate(&mut self.total_price, rhs.total_price);
        accumulate(&mut self.discount, rhs.discount);
    }
}

impl AddAssign for BreakdownSummary {
    fn add_assign(&mut self, rhs: BreakdownSummary) {
        *self += &rhs;
    }
}

impl Add for BreakdownSummary {
    type Output = BreakdownSummary;

    fn add(mut self, rhs: BreakdownSummary) -> BreakdownSummary {
        self += &rhs;
        self
    }
}

impl Sum for BreakdownSummary {
    fn sum<I: Iterator<Item = BreakdownSummary>>(iter: I) -> Self {
        iter.fold(BreakdownSummary::default(), Add::add)
    }
}

impl<'a> Sum<&'a BreakdownSummary> for BreakdownSummary {
    fn sum<I: Iterator<Item = &'a BreakdownSummary>>(iter: I) -> Self {
        iter.fold(BreakdownSummary::default(), |mut acc, s| {
            acc += s;
            acc
        })
    }
}
