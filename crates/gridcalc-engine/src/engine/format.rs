/// Format a number with six decimals, the form substituted into formulas.
pub fn format_fixed(n: f64) -> String {
    format!("{:.6}", n)
}

/// Format a number for display: six decimals, then trailing zeros and a
/// trailing point removed (`12.5` -> "12.5", `80.0` -> "80").
///
/// Precision beyond the sixth decimal is lost.
pub fn format_number(n: f64) -> String {
    let mut s = format_fixed(n);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(12.0), "12.000000");
        assert_eq!(format_fixed(0.8), "0.800000");
    }

    #[test]
    fn test_format_number_strips_zeros() {
        assert_eq!(format_number(12.123), "12.123");
        assert_eq!(format_number(80.0), "80");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-0.5), "-0.5");
        assert_eq!(format_number(8000.8), "8000.8");
    }

    #[test]
    fn test_format_number_truncates_past_six_decimals() {
        assert_eq!(format_number(0.0000001), "0");
        assert_eq!(format_number(1.23456789), "1.234568");
    }
}
