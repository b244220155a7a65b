use breakdown::{parse_lines, summarize, BreakdownSummary, Context, MonthPolicy, SpaceLine};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::path::Path;

fn lines(json: &str) -> Vec<SpaceLine> {
    parse_lines(json, Path::new("inline.json")).unwrap()
}

fn campaign() -> Vec<SpaceLine> {
    lines(
        r#"[
          {
            "spaceName": "Airport Road Gantry",
            "totalDisplayCost": 118000,
            "displayCostGstPercentage": 18,
            "discountOn": "displayCost",
            "discountPercentage": "12.5",
            "discountedDisplayCost": 30000,
            "totalPrintingCost": 11800,
            "printingGstPercentage": 18,
            "totalMountingCost": 5600,
            "mountingGstPercentage": 12,
            "oneTimeInstallationCost": 4000,
            "monthlyAdditionalCost": 1500,
            "otherCharges": 750,
            "startDate": "2026-02-01",
            "endDate": "2026-05-15",
            "campaignPrice": 150000
          },
          {
            "spaceName": "Metro Pillar 14",
            "totalDisplayCost": "45000",
            "displayCostGstPercentage": 18,
            "monthlyAdditionalCost": 800,
            "startDate": "2026-03-10T00:00:00.000Z",
            "endDate": "2026-04-09T00:00:00.000Z",
            "price": 42000
          },
          {
            "spaceName": "Bus Shelter 3",
            "totalDisplayCost": "n/a",
            "totalPrintingCost": 2000,
            "printingGstPercentage": null,
            "otherCharges": "300",
            "price": 5000
          }
        ]"#,
    )
}

#[test]
fn empty_input_is_all_zero() {
    let summary = summarize(&[], MonthPolicy::Exact);

    assert_eq!(summary, BreakdownSummary::default());
    assert_eq!(summary.grand_total(Context::Booking), Decimal::ZERO);
    assert_eq!(summary.grand_total(Context::Proposal), Decimal::ZERO);
}

#[test]
fn single_line_without_gst() {
    let summary = summarize(
        &lines(r#"[{"totalDisplayCost": 1000, "displayCostGstPercentage": 0}]"#),
        MonthPolicy::Exact,
    );

    assert_eq!(summary.total_display_cost, dec!(1000));
    assert_eq!(summary.display_cost_gst, dec!(0));
    assert_eq!(summary.discount, dec!(0));
}

#[test]
fn gst_back_calculation() {
    let summary = summarize(
        &lines(r#"[{"totalDisplayCost": 1180, "displayCostGstPercentage": 18}]"#),
        MonthPolicy::Exact,
    );

    assert_eq!(summary.total_display_cost, dec!(1000.00));
    assert_eq!(summary.display_cost_gst, dec!(180.00));
}

#[test]
fn discount_suppresses_gst_proportionally() {
    let summary = summarize(
        &lines(
            r#"[{
              "totalDisplayCost": 1180,
              "displayCostGstPercentage": 18,
              "discountOn": "displayCost",
              "discountPercentage": 10
            }]"#,
        ),
        MonthPolicy::Exact,
    );

    assert_eq!(summary.discount, dec!(100.00));
    assert_eq!(summary.display_cost_gst, dec!(162.00));
}

#[test]
fn proration_by_month() {
    let summary = summarize(
        &lines(
            r#"[{
              "monthlyAdditionalCost": 500,
              "startDate": "2026-01-01",
              "endDate": "2026-03-31"
            }]"#,
        ),
        MonthPolicy::Exact,
    );

    assert_eq!(summary.monthly_additional_cost, dec!(1500.00));
}

#[test]
fn proration_never_goes_negative() {
    let summary = summarize(
        &lines(
            r#"[
              {"monthlyAdditionalCost": 500, "startDate": "2026-03-31", "endDate": "2026-01-01"},
              {"monthlyAdditionalCost": 500, "startDate": "2026-03-31", "endDate": "2026-03-30"},
              {"monthlyAdditionalCost": 500, "discountedDisplayCost": 900,
               "startDate": "2026-06-01", "endDate": "2026-01-01"}
            ]"#,
        ),
        MonthPolicy::Ceil,
    );

    assert_eq!(summary.monthly_additional_cost, dec!(0));
    assert_eq!(summary.discounted_display_cost, dec!(0));
}

#[test]
fn total_price_precedence() {
    let both = summarize(
        &lines(r#"[{"campaignPrice": 2000, "price": 1500}]"#),
        MonthPolicy::Exact,
    );
    let price_only = summarize(&lines(r#"[{"price": 1500}]"#), MonthPolicy::Exact);

    assert_eq!(both.total_price, dec!(2000));
    assert_eq!(price_only.total_price, dec!(1500));
}

#[test]
fn summarizing_is_pure() {
    let input = campaign();

    let first = summarize(&input, MonthPolicy::Exact);
    let second = summarize(&input.clone(), MonthPolicy::Exact);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn summary_of_concatenation_is_sum_of_parts() {
    let all = campaign();
    let (left, right) = all.split_at(1);

    for policy in [MonthPolicy::Exact, MonthPolicy::Ceil] {
        let whole = summarize(&all, policy);
        let parts = summarize(left, policy) + summarize(right, policy);

        assert_eq!(whole, parts);
    }
}

#[test]
fn campaign_breakdown() {
    let summary = summarize(&campaign(), MonthPolicy::Exact);

    // 118000 / 1.18 + 45000 / 1.18 (38135.59)
    assert_eq!(summary.total_display_cost, dec!(138135.59));
    // 12.5% of 100000
    assert_eq!(summary.discount, dec!(12500.00));
    // (18000 - 2250) + 6864.41
    assert_eq!(summary.display_cost_gst, dec!(22614.41));
    // 30000 over Feb 1..May 15 (3 months + 15/31) + 38135.59
    assert_eq!(summary.discounted_display_cost, dec!(142651.72));
    assert_eq!(summary.total_printing_cost, dec!(12000.00));
    assert_eq!(summary.printing_cost_gst, dec!(1800.00));
    assert_eq!(summary.total_mounting_cost, dec!(5000.00));
    assert_eq!(summary.mounting_cost_gst, dec!(600.00));
    assert_eq!(summary.one_time_installation_cost, dec!(4000));
    // 1500 * 3.48387... + 800 * 1
    assert_eq!(summary.monthly_additional_cost, dec!(6025.81));
    assert_eq!(summary.other_charges, dec!(1050));
    assert_eq!(summary.total_price, dec!(197000));
}

#[test]
fn ceil_policy_rounds_partial_months_up() {
    let summary = summarize(&campaign(), MonthPolicy::Ceil);

    // 1500 * 4 + 800 * 1
    assert_eq!(summary.monthly_additional_cost, dec!(6800.00));
    // 30000 * 4 + 38135.59
    assert_eq!(summary.discounted_display_cost, dec!(158135.59));
}

#[test]
fn booking_and_proposal_share_the_same_numbers() {
    let summary = summarize(&campaign(), MonthPolicy::Exact);

    let booking = summary.rows(Context::Booking);
    let proposal = summary.rows(Context::Proposal);

    for row in &proposal[..proposal.len() - 1] {
        let matching = booking.iter().find(|b| b.label == row.label).unwrap();
        assert_eq!(matching.amount, row.amount);
    }
    assert_eq!(
        summary.grand_total(Context::Booking) - summary.grand_total(Context::Proposal),
        summary.total_gst() - summary.discount
    );
}

#[test]
fn oversized_amounts_saturate_instead_of_overflowing() {
    let display = lines(
        r#"[
          {"totalDisplayCost": 50000000000000000000000000000},
          {"totalDisplayCost": 50000000000000000000000000000}
        ]"#,
    );

    let summary = summarize(&display, MonthPolicy::Exact);

    assert_eq!(summary.total_display_cost, Decimal::MAX);
    assert_eq!(summary.grand_total(Context::Booking), Decimal::MAX);
    assert_eq!(summary.rows(Context::Proposal).last().map(|row| row.amount), Some(Decimal::MAX));

    let additional = lines(
        r#"[{
          "monthlyAdditionalCost": 5e28,
          "startDate": "2026-01-01",
          "endDate": "2026-03-31"
        }]"#,
    );

    let summary = summarize(&additional, MonthPolicy::Exact);

    assert_eq!(summary.monthly_additional_cost, Decimal::MAX);
    assert_eq!(summary.grand_total(Context::Booking), Decimal::MAX);
}
