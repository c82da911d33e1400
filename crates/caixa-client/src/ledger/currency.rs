/// Explicit formatting configuration so rendering never depends on the
/// process locale. Defaults to the pt-BR convention: `.` groups
/// thousands, `,` separates the two decimal places.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormat {
    pub grouping_separator: char,
    pub decimal_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            grouping_separator: '.',
            decimal_separator: ',',
        }
    }
}

/// Rounds to two decimal places, half away from zero. Idempotent.
pub fn round_to_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Renders a monetary value with fixed two decimals and a grouping
/// separator every three digits leftward from the decimal point. The
/// currency symbol is prefixed by callers, never embedded here.
pub fn format_currency(value: f64, format: &CurrencyFormat) -> String {
    let rounded = round_to_2dp(value);
    let negative = rounded < 0.0;
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let digits = whole.chars().collect::<Vec<char>>();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(format.grouping_separator);
        }
        grouped.push(*digit);
    }

    let mut output = String::new();
    if negative {
        output.push('-');
    }
    output.push_str(&grouped);
    output.push(format.decimal_separator);
    output.push_str(cents);
    output
}

#[cfg(test)]
mod tests {
    use super::{CurrencyFormat, format_currency, round_to_2dp};

    fn brl(value: f64) -> String {
        format_currency(value, &CurrencyFormat::default())
    }

    #[test]
    fn groups_every_three_digits_with_comma_decimals() {
        assert_eq!(brl(1234567.5), "1.234.567,50");
    }

    #[test]
    fn small_values_have_no_grouping() {
        assert_eq!(brl(0.0), "0,00");
        assert_eq!(brl(7.0), "7,00");
        assert_eq!(brl(999.99), "999,99");
        assert_eq!(brl(1000.0), "1.000,00");
    }

    #[test]
    fn negative_values_keep_the_sign_outside_the_groups() {
        assert_eq!(brl(-1702.32), "-1.702,32");
        assert_eq!(brl(-0.5), "-0,50");
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 0.125 is exactly representable, so the tie is real.
        assert_eq!(brl(40.125), "40,13");
        assert_eq!(brl(-40.125), "-40,13");
    }

    #[test]
    fn round_to_2dp_is_idempotent() {
        for value in [0.0, 1.005, 1234567.4999, -98.765, 1702.32] {
            let once = round_to_2dp(value);
            assert_eq!(round_to_2dp(once), once, "value: {value}");
        }
    }

    #[test]
    fn alternate_separators_are_respected() {
        let format = CurrencyFormat {
            grouping_separator: ',',
            decimal_separator: '.',
        };
        assert_eq!(format_currency(1234567.5, &format), "1,234,567.50");
    }
}
