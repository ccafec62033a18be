//! Number formatting for shopper-facing text

/// Round to a fixed number of decimals
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Centimetre value with at most one decimal and no trailing ".0"
///
/// 52.0 → "52", 39.9 → "39.9", -5.1 → "-5.1"
pub fn format_cm(value: f64) -> String {
    let rounded = round_to(value, 1);
    if rounded == 0.0 {
        "0".to_string()
    } else if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

/// Like `format_cm` with an explicit sign: "+2", "-1.5", "0"
pub fn format_signed_cm(value: f64) -> String {
    let rounded = round_to(value, 1);
    if rounded > 0.0 {
        format!("+{}", format_cm(rounded))
    } else if rounded < 0.0 {
        format_cm(rounded)
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.72000000001, 2), 0.72);
        assert_eq!(round_to(0.86, 1), 0.9);
    }

    #[test]
    fn test_format_cm() {
        assert_eq!(format_cm(52.0), "52");
        assert_eq!(format_cm(39.9), "39.9");
        assert_eq!(format_cm(47.04), "47");
        assert_eq!(format_cm(-5.1), "-5.1");
        assert_eq!(format_cm(-0.02), "0");
    }

    #[test]
    fn test_format_signed_cm() {
        assert_eq!(format_signed_cm(2.0), "+2");
        assert_eq!(format_signed_cm(-1.5), "-1.5");
        assert_eq!(format_signed_cm(0.01), "0");
    }
}
