use thiserror::Error;

/// Money is kept as integer cents so balances stay exact; 1 unit = 100
/// cents, so 50.00 = 5000 cents. Never represented as a float.
pub type Cents = i64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid money format")]
pub struct ParseCentsError;

/// Format cents as a decimal string: 5000 -> "50.00", -1234 -> "-12.34".
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Parse a decimal string into cents: "50.00" -> 5000, "12.5" -> 1250,
/// "100" -> 10000. At most two decimal digits are kept; extra digits are
/// truncated, never rounded.
pub fn parse_cents(input: &str) -> Result<Cents, ParseCentsError> {
    let input = input.trim();
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input),
    };

    let (units_str, decimal_str) = match input.split_once('.') {
        Some((units, decimals)) => (units, decimals),
        None => (input, ""),
    };

    if units_str.is_empty() && decimal_str.is_empty() {
        return Err(ParseCentsError);
    }

    let units: i64 = if units_str.is_empty() {
        0
    } else {
        units_str.parse().map_err(|_| ParseCentsError)?
    };

    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        1 => decimal_str.parse::<i64>().map_err(|_| ParseCentsError)? * 10,
        _ => decimal_str[..2].parse().map_err(|_| ParseCentsError)?,
    };

    let cents = units * 100 + decimal_cents;
    Ok(if negative { -cents } else { cents })
}
