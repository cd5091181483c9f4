//! pt-BR rendering of currency amounts and timestamps

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%d/%m/%Y";
const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats an amount in reais, e.g. `R$ 1.234,56`
///
/// Rounds to cents. The separator after `R$` is a no-break space, as in
/// browsers' pt-BR currency output. Non-finite amounts are rendered as-is.
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$\u{a0}{},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Parses RFC 3339, ISO date-time without offset, or a bare ISO date.
///
/// Offsets are kept as given: `2024-03-05T23:30:00-03:00` stays at 23:30.
fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `dd/mm/yyyy`; unparseable input is returned unchanged
pub fn format_date(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

/// `dd/mm/yyyy HH:MM`; unparseable input is returned unchanged
pub fn format_date_time(value: &str) -> String {
    parse_timestamp(value)
        .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}
