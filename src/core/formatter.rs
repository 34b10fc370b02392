/// Format `value` rounded to `digits` significant decimal digits.
///
/// Mirrors the conventional general number format: positional notation
/// while the decimal exponent stays within `[-4, digits)`, otherwise
/// scientific notation with an explicit sign and at least two exponent
/// digits (`6.022e23` at 4 digits becomes `6.022e+23`). Trailing zeros
/// beyond the requested precision are stripped. Callers guarantee
/// `digits >= 1`.
pub fn format_significant(value: f64, digits: usize) -> String {
    debug_assert!(digits >= 1);
    let digits = digits.max(1);

    // `{:.*e}` renders one digit before the point and `digits - 1`
    // after, so the mantissa carries exactly `digits` digits.
    let rendered = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match rendered.split_once('e') {
        Some(parts) => parts,
        None => return rendered,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return rendered,
    };

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digit_run: String = mantissa.chars().filter(|c| *c != '.').collect();

    if exponent < -4 || exponent >= digits as i32 {
        let trimmed = digit_run.trim_end_matches('0');
        let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
        let mantissa = if trimmed.len() > 1 {
            format!("{}.{}", &trimmed[..1], &trimmed[1..])
        } else {
            trimmed.to_string()
        };
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", sign, mantissa, exponent_sign, exponent.abs())
    } else {
        // Digits in front of the decimal point.
        let point = exponent + 1;
        let positional = if point <= 0 {
            format!("0.{}{}", "0".repeat(-point as usize), digit_run)
        } else if point as usize >= digit_run.len() {
            digit_run
        } else {
            format!(
                "{}.{}",
                &digit_run[..point as usize],
                &digit_run[point as usize..]
            )
        };
        let positional = if positional.contains('.') {
            positional
                .trim_end_matches('0')
                .trim_end_matches('.')
                .to_string()
        } else {
            positional
        };
        format!("{}{}", sign, positional)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_rounding() {
        assert_eq!(format_significant(3.14159, 3), "3.14");
        assert_eq!(format_significant(1.92, 2), "1.9");
        assert_eq!(format_significant(2.71828, 2), "2.7");
        assert_eq!(format_significant(100.0, 3), "100");
        assert_eq!(format_significant(0.5, 2), "0.5");
    }

    #[test]
    fn test_small_magnitudes_stay_positional_until_minus_five() {
        assert_eq!(format_significant(0.00012345, 2), "0.00012");
        assert_eq!(format_significant(0.0001, 1), "0.0001");
        assert_eq!(format_significant(1.5e-5, 2), "1.5e-05");
    }

    #[test]
    fn test_scientific_switchover_at_digit_count() {
        assert_eq!(format_significant(6.022e23, 4), "6.022e+23");
        assert_eq!(format_significant(6.022e23, 1), "6e+23");
        assert_eq!(format_significant(-12345.6789, 3), "-1.23e+04");
        assert_eq!(format_significant(123.456, 2), "1.2e+02");
    }

    #[test]
    fn test_rounding_can_carry_into_the_exponent() {
        assert_eq!(format_significant(999.9, 2), "1e+03");
    }

    #[test]
    fn test_trailing_zeros_are_stripped() {
        assert_eq!(format_significant(1.2, 3), "1.2");
        assert_eq!(format_significant(2.5e10, 3), "2.5e+10");
        assert_eq!(format_significant(0.0, 3), "0");
    }

    #[test]
    fn test_sign_is_preserved() {
        assert_eq!(format_significant(-0.25, 2), "-0.25");
        assert_eq!(format_significant(-6.022e23, 4), "-6.022e+23");
    }

    #[test]
    fn test_output_parses_back_within_rounding_tolerance() {
        let values = [
            3.14159, -12345.6789, 6.022e23, 0.00012345, 1.92, 999.9, 0.5, 42.0,
        ];
        for &value in &values {
            for digits in 1..=6usize {
                let formatted = format_significant(value, digits);
                let parsed: f64 = formatted.parse().unwrap();
                let tolerance = value.abs() * 5.0_f64 * 10f64.powi(-(digits as i32)) + f64::EPSILON;
                assert!(
                    (parsed - value).abs() <= tolerance,
                    "{} @ {} digits -> {} (parsed {})",
                    value,
                    digits,
                    formatted,
                    parsed
                );
            }
        }
    }
}
