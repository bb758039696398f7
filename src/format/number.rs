//! Thousands separators.

/// Fraction digits kept by [`float_with_commas`].
const MAX_FRACTION_DIGITS: usize = 3;

/// Formats an integer with comma thousands separators.
///
/// # Example
/// ```
/// use stopclock::format::number_with_commas;
///
/// assert_eq!(number_with_commas(1000), "1,000");
/// assert_eq!(number_with_commas(-1234567), "-1,234,567");
/// ```
pub fn number_with_commas(number: i64) -> String {
    let grouped = group_digits(&number.unsigned_abs().to_string());
    if number < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats a float with comma separators, rounded to at most three
/// fraction digits with trailing zeros removed.
///
/// Non-finite values are rendered as `NaN`, `∞` and `-∞`.
pub fn float_with_commas(number: f64) -> String {
    if number.is_nan() {
        return "NaN".to_string();
    }
    if number.is_infinite() {
        return if number > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, number.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut result = group_digits(integer);
    if !fraction.is_empty() {
        result.push('.');
        result.push_str(fraction);
    }

    if number < 0.0 && result != "0" {
        result.insert(0, '-');
    }
    result
}

/// Removes every comma from a formatted number.
pub fn remove_commas(text: &str) -> String {
    text.replace(',', "")
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers_untouched() {
        assert_eq!(number_with_commas(0), "0");
        assert_eq!(number_with_commas(999), "999");
        assert_eq!(number_with_commas(-999), "-999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(number_with_commas(1_000), "1,000");
        assert_eq!(number_with_commas(123_456), "123,456");
        assert_eq!(number_with_commas(1_234_567_890), "1,234,567,890");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(number_with_commas(i64::MIN), "-9,223,372,036,854,775,808");
        assert_eq!(number_with_commas(i64::MAX), "9,223,372,036,854,775,807");
    }

    #[test]
    fn test_float_rounds_to_three_digits() {
        assert_eq!(float_with_commas(1234.5678), "1,234.568");
        assert_eq!(float_with_commas(1000.5), "1,000.5");
        assert_eq!(float_with_commas(1000.0), "1,000");
        assert_eq!(float_with_commas(-9876543.21), "-9,876,543.21");
    }

    #[test]
    fn test_float_tiny_negative_is_zero() {
        assert_eq!(float_with_commas(-0.0001), "0");
    }

    #[test]
    fn test_float_non_finite() {
        assert_eq!(float_with_commas(f64::NAN), "NaN");
        assert_eq!(float_with_commas(f64::INFINITY), "∞");
        assert_eq!(float_with_commas(f64::NEG_INFINITY), "-∞");
    }

    #[test]
    fn test_remove_commas() {
        assert_eq!(remove_commas("1,234,567"), "1234567");
        assert_eq!(remove_commas("1,000.5"), "1000.5");
        assert_eq!(remove_commas("plain"), "plain");
    }

    #[test]
    fn test_commas_round_trip() {
        let formatted = number_with_commas(9_876_543);
        assert_eq!(remove_commas(&formatted).parse::<i64>().unwrap(), 9_876_543);
    }
}
