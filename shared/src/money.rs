//! Rupiah amounts: formatting for display and reading digits out of
//! free-typed price inputs.

/// `63000.0` -> `"Rp 63.000"`; cents are rounded away.
pub fn format_rupiah(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Digits grouped in threes with `.` separators, Indonesian style
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Keep only the digits of `input`; `"Rp 63.000"` reads as `63000`.
/// Returns `None` when there are no digits at all.
pub fn parse_digits(input: &str) -> Option<u64> {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Parse a decimal amount typed into a number field
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0.0), "Rp 0");
        assert_eq!(format_rupiah(999.0), "Rp 999");
        assert_eq!(format_rupiah(63000.0), "Rp 63.000");
        assert_eq!(format_rupiah(2000000.0), "Rp 2.000.000");
        assert_eq!(format_rupiah(18500.4), "Rp 18.500");
        assert_eq!(format_rupiah(-400000.0), "-Rp 400.000");
    }

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("Rp 63.000"), Some(63000));
        assert_eq!(parse_digits("21000"), Some(21000));
        assert_eq!(parse_digits(""), None);
        assert_eq!(parse_digits("abc"), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(" 12.5 "), Some(12.5));
        assert_eq!(parse_amount("12,5"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
