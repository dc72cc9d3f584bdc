//! Brazilian Real formatting.

/// Currency code used across quotes and documents.
pub const CURRENCY_CODE: &str = "BRL";

/// Symbol prefixed to every formatted amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Formats an amount in the pt-BR convention: `R$ 1.234,50`.
///
/// Two decimal places, `.` as thousands separator and `,` as decimal
/// separator. Negative amounts keep the sign after the symbol
/// (`R$ -1.234,50`); amounts that round to zero never show a sign.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{} {}", CURRENCY_SYMBOL, value);
    }

    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };

    format!(
        "{} {}{},{}",
        CURRENCY_SYMBOL,
        sign,
        group_thousands(integer),
        fraction
    )
}

/// Formats a ratio (0.125) as a one-decimal percentage (`12.5%`).
pub fn format_percent(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
