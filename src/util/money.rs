//! Currency parsing and formatting for pt-BR ("R$ 1.234,56") amounts.
//!
//! All monetary values are carried as integer cents; conversion to a
//! displayable major-unit string happens only at the formatting boundary.
//! `parse_brl` and `format_brl` are exact inverses for every non-negative
//! integer cent value.

/// Error types for currency parsing
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency string contains no digits")]
    Empty,
    #[error("Currency value too large")]
    Overflow,
}

/// Parses a masked currency string into integer cents.
///
/// Grammar: every ASCII digit in the input is kept, everything else
/// (currency symbol, thousands dots, decimal comma, whitespace) is
/// discarded; the resulting digit string is read with implicit two
/// decimal places. "R$ 49,90" -> 4990, "1.234,56" -> 123456.
pub fn parse_brl(input: &str) -> Result<i64, MoneyError> {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(MoneyError::Empty);
    }
    // 15 digits is already far beyond any realistic quote value.
    if digits.len() > 15 {
        return Err(MoneyError::Overflow);
    }
    digits.parse::<i64>().map_err(|_| MoneyError::Overflow)
}

/// Formats integer cents as "R$ 1.234,56" with dot thousands separators
/// and a comma decimal separator.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = abs / 100;
    let centavos = abs % 100;

    let digits = reais.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("{}R$ {},{:02}", sign, grouped, centavos)
}

/// Formats an optional cent amount, rendering unknown values as "—".
pub fn format_brl_or_dash(cents: Option<i64>) -> String {
    match cents {
        Some(c) => format_brl(c),
        None => "—".to_string(),
    }
}

/// Rounds a non-negative major-unit value to integer cents, half-up.
pub fn to_cents_half_up(value: f64) -> i64 {
    (value * 100.0 + 0.5).floor() as i64
}

/// Integer cents back to a major-unit decimal value.
pub fn cents_to_major(cents: i64) -> f64 {
    cents as f64 / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_value() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(4990), "R$ 49,90");
    }

    #[test]
    fn test_format_thousands_grouping() {
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(123_456_789), "R$ 1.234.567,89");
        assert_eq!(format_brl(100_000_000_00), "R$ 100.000.000,00");
    }

    #[test]
    fn test_parse_masked_input() {
        assert_eq!(parse_brl("R$ 49,90"), Ok(4990));
        assert_eq!(parse_brl("1.234,56"), Ok(123456));
        assert_eq!(parse_brl("450"), Ok(450));
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(parse_brl(""), Err(MoneyError::Empty));
        assert_eq!(parse_brl("R$ "), Err(MoneyError::Empty));
    }

    #[test]
    fn test_parse_rejects_oversized() {
        assert_eq!(parse_brl("1234567890123456"), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_round_trip() {
        for cents in [0i64, 1, 99, 100, 4990, 45000, 123456, 999_999_999] {
            assert_eq!(parse_brl(&format_brl(cents)), Ok(cents));
        }
    }

    #[test]
    fn test_half_up_rounding() {
        assert_eq!(to_cents_half_up(40.0), 4000);
        assert_eq!(to_cents_half_up(0.005), 1);
        assert_eq!(to_cents_half_up(0.004), 0);
        assert_eq!(to_cents_half_up(123.45), 12345);
    }

    #[test]
    fn test_dash_for_unknown() {
        assert_eq!(format_brl_or_dash(None), "—");
        assert_eq!(format_brl_or_dash(Some(4000)), "R$ 40,00");
    }
}
