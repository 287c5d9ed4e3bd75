use rust_decimal::{Decimal, RoundingStrategy};

/// Shown in place of a metric that is undefined for an empty upload.
pub const NOT_AVAILABLE: &str = "N/A";

/// `Some(50)` becomes `"50.00%"`.
pub fn format_percent(value: Option<Decimal>) -> String {
    match value {
        Some(pct) => format!("{:.2}%", round2(pct)),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Two decimals with thousands separators, e.g. `"₹1,234.50"` or `"₹-50.00"`.
pub fn format_currency(value: Decimal, symbol: &str) -> String {
    let rounded = round2(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{symbol}{sign}{}.{fraction}", group_thousands(whole))
}

/// `Some(12.34)` becomes `"12.3 mins"`.
pub fn format_minutes(value: Option<f64>) -> String {
    match value {
        Some(minutes) => format!("{minutes:.1} mins"),
        None => NOT_AVAILABLE.to_string(),
    }
}

fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn percent() {
        assert_eq!(format_percent(Some(dec!(50))), "50.00%");
        assert_eq!(format_percent(Some(dec!(66.666666))), "66.67%");
        assert_eq!(format_percent(None), "N/A");
    }

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(dec!(50), "₹"), "₹50.00");
        assert_eq!(format_currency(dec!(1234.5), "₹"), "₹1,234.50");
        assert_eq!(format_currency(dec!(1234567.891), "$"), "$1,234,567.89");
        assert_eq!(format_currency(dec!(-50), "₹"), "₹-50.00");
        assert_eq!(format_currency(dec!(-0.001), "₹"), "₹0.00");
        assert_eq!(format_currency(dec!(100000), ""), "100,000.00");
    }

    #[test]
    fn minutes() {
        assert_eq!(format_minutes(Some(12.34)), "12.3 mins");
        assert_eq!(format_minutes(Some(-60.0)), "-60.0 mins");
        assert_eq!(format_minutes(None), "N/A");
    }
}
