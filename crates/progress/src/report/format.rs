//! Numeric label formatting for progress reports.
//!
//! Score labels use significant-digit precision rather than fixed decimal
//! places, and percentages round to the whole percent. Dates are absent on
//! purpose: due dates leave the builder as raw render requests for an
//! external, locale-aware renderer.

/// Formats `value` to `digits` significant digits, `printf` `%g` style.
///
/// Trailing zeros are trimmed ("3.00" renders as "3"), fixed notation is
/// used while the rounded magnitude allows it, and values too large or too
/// small for it fall back to scientific notation ("1e+03").
#[must_use]
pub fn significant(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // {:e} is correctly rounded, so the exponent already accounts for
    // values that round up a magnitude (999.9 at three digits is 1.00e3).
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = sci
        .split_once('e')
        .expect("scientific formatting always carries an exponent");
    let exponent: i32 = exponent
        .parse()
        .expect("scientific exponent is always an integer");

    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let (sign, unsigned) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digit_run: String = unsigned.chars().filter(|c| *c != '.').collect();

    let rendered = if exponent >= 0 {
        let int_len = exponent as usize + 1;
        if digit_run.len() <= int_len {
            digit_run
        } else {
            let (int_part, fraction) = digit_run.split_at(int_len);
            let joined = format!("{int_part}.{fraction}");
            trim_fraction(&joined).to_string()
        }
    } else {
        let zeros = "0".repeat(exponent.unsigned_abs() as usize - 1);
        let joined = format!("0.{zeros}{digit_run}");
        trim_fraction(&joined).to_string()
    };

    format!("{sign}{rendered}")
}

/// Formats a `0.0..=1.0` ratio as a whole percent ("0.5" renders "50%").
///
/// Ratios above one render above 100%; callers withhold the label entirely
/// when the ratio is undefined.
#[must_use]
pub fn percentage(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn trim_fraction(value: &str) -> &str {
    if value.contains('.') {
        value.trim_end_matches('0').trim_end_matches('.')
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn significant_trims_to_three_digits() {
        assert_eq!(significant(3.0, 3), "3");
        assert_eq!(significant(10.0, 3), "10");
        assert_eq!(significant(100.0, 3), "100");
        assert_eq!(significant(33.333, 3), "33.3");
        assert_eq!(significant(66.666, 3), "66.7");
        assert_eq!(significant(0.5, 3), "0.5");
        assert_eq!(significant(0.0, 3), "0");
    }

    #[test]
    fn significant_keeps_leading_zeros_on_small_values() {
        assert_eq!(significant(0.25, 3), "0.25");
        assert_eq!(significant(0.000123456, 3), "0.000123");
    }

    #[test]
    fn significant_falls_back_to_scientific() {
        // four digits before the point no longer fit three significant digits
        assert_eq!(significant(999.9, 3), "1e+03");
        assert_eq!(significant(12345.0, 3), "1.23e+04");
        assert_eq!(significant(0.0000123, 3), "1.23e-05");
    }

    #[test]
    fn significant_carries_the_sign() {
        assert_eq!(significant(-33.333, 3), "-33.3");
        assert_eq!(significant(-12345.0, 3), "-1.23e+04");
    }

    #[test]
    fn significant_survives_non_finite_input() {
        assert_eq!(significant(f64::NAN, 3), "NaN");
        assert_eq!(significant(f64::INFINITY, 3), "inf");
    }

    #[test]
    fn percentage_rounds_to_whole_percent() {
        assert_eq!(percentage(0.5), "50%");
        assert_eq!(percentage(1.0 / 3.0), "33%");
        assert_eq!(percentage(2.0 / 3.0), "67%");
        assert_eq!(percentage(1.0), "100%");
        assert_eq!(percentage(1.2), "120%");
    }
}
