use rust_decimal::Decimal;
use serde::Serialize;

use super::gst::{gst_exclusive, percent_of, round_money};
use super::line::SpaceLine;
use super::months::{month_span, MonthPolicy};
use super::summary::BreakdownSummary;

/// One line's contribution to a breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineBreakdown {
    pub label: String,
    /// Months spanned by the line's dates, `None` when a date is missing
    pub months: Option<Decimal>,
    #[serde(flatten)]
    pub amounts: BreakdownSummary,
}

impl LineBreakdown {
    /// Price a single line. `position` is 1-based and only used for the label.
    pub fn compute(line: &SpaceLine, position: usize, policy: MonthPolicy) -> Self {
        let zero = Decimal::ZERO;
        let months = line
            .period()
            .map(|(start, end)| month_span(start, end, policy));
        let month_factor = months.unwrap_or(zero);

        // Display cost, its discount and the GST left after the discount
        let display_gst_pct = line.display_cost_gst_percentage.unwrap_or(zero);
        let display_base = gst_exclusive(line.total_display_cost.unwrap_or(zero), display_gst_pct);
        let discount = if line.discounts_display_cost() {
            percent_of(display_base, line.discount_percentage.unwrap_or(zero))
        } else {
            zero
        };
        let display_gst =
            percent_of(display_base, display_gst_pct).saturating_sub(percent_of(discount, display_gst_pct));

        let discounted_display = match (line.discounted_display_cost, months) {
            (Some(rate), Some(months)) if rate > zero => round_money(rate.saturating_mul(months)),
            _ => display_base,
        };

        let printing_gst_pct = line.printing_gst_percentage.unwrap_or(zero);
        let printing_base = gst_exclusive(line.total_printing_cost.unwrap_or(zero), printing_gst_pct);

        let mounting_gst_pct = line.mounting_gst_percentage.unwrap_or(zero);
        let mounting_base = gst_exclusive(line.total_mounting_cost.unwrap_or(zero), mounting_gst_pct);

        let monthly_additional =
            round_money(line.monthly_additional_cost.unwrap_or(zero).saturating_mul(month_factor));

        let amounts = BreakdownSummary {
            total_display_cost: display_base,
            discounted_display_cost: discounted_display,
            display_cost_gst: display_gst,
            total_printing_cost: printing_base,
            printing_cost_gst: percent_of(printing_base, printing_gst_pct),
            total_mounting_cost: mounting_base,
            mounting_cost_gst: percent_of(mounting_base, mounting_gst_pct),
            one_time_installation_cost: line.one_time_installation_cost.unwrap_or(zero),
            monthly_additional_cost: monthly_additional,
            other_charges: line.other_charges.unwrap_or(zero),
            total_price: line.contract_price(),
            discount,
        };

        let label = line.label(position);
        tracing::trace!(line = %label, ?months, ?amounts, "priced line");

        Self {
            label,
            months,
            amounts,
        }
    }
}

/// Price every line, in input order
pub fn line_breakdowns(lines: &[SpaceLine], policy: MonthPolicy) -> Vec<LineBreakdown> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| LineBreakdown::compute(line, idx + 1, policy))
        .collect()
}

/// Fold a list of lines into one summary
pub fn summarize(lines: &[SpaceLine], policy: MonthPolicy) -> BreakdownSummary {
    let summary: BreakdownSummary = line_breakdowns(lines, policy)
        .iter()
        .map(|line| &line.amounts)
        .sum();

    tracing::debug!(
        lines = lines.len(),
        %policy,
        display = %summary.total_display_cost,
        discount = %summary.discount,
        total_price = %summary.total_price,
        "summarized breakdown"
    );

    summary
}
