use rust_decimal::Decimal;

use crate::breakdown::round_money;

/// Group an integer's digits in thousands (1234567 -> "1,234,567")
pub fn format_grouped_int(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}

/// Format a money amount with two decimal places and thousands separators
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_money(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let unsigned = rounded.abs().to_string();
    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned.as_str(), "00"));
    let grouped = format_grouped_int(whole);

    if negative {
        format!("-{}.{}", grouped, frac)
    } else {
        format!("{}.{}", grouped, frac)
    }
}

/// Format a money amount with the currency symbol
pub fn format_money(value: Decimal, currency_symbol: &str) -> String {
    let amount = format_amount(value);
    match amount.strip_prefix('-') {
        Some(unsigned) => format!("-{}{}", currency_symbol, unsigned),
        None => format!("{}{}", currency_symbol, amount),
    }
}

/// Format a month count to two decimals
pub fn format_months(months: Option<Decimal>) -> String {
    match months {
        Some(m) => round_money(m).to_string(),
        None => "-".to_string(),
    }
}
