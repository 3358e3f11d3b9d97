use chrono::NaiveDate;

use crate::decimal::Money;

/// format an amount with Indian digit grouping and two decimals, e.g. `1,00,000.00`
pub fn format_inr(amount: Money) -> String {
    let mut rounded = amount.as_decimal().round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(2);

    let text = rounded.to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = group_indian(whole);

    if negative {
        format!("-{}.{}", grouped, fraction)
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

/// currency symbol followed by the grouped amount; the sign leads
pub fn format_currency(symbol: &str, amount: Money) -> String {
    let formatted = format_inr(amount);
    match formatted.strip_prefix('-') {
        Some(positive) => format!("-{} {}", symbol, positive),
        None => format!("{} {}", symbol, formatted),
    }
}

/// last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// `01 Jan 2025`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// `01 Jan 2025 → 29 Jan 2025`
pub fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} → {}", format_date(start), format_date(end))
}
