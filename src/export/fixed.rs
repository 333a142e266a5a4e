//! Fixed-point number rendering shared by every text encoder.
//!
//! Existing consumers of the exported files were produced by a
//! `toFixed`-style formatter, which differs from `format!("{:.N}")` in three
//! places: exact ties round away from zero, negative zero has no sign, and
//! non-finite values are spelled out.

/// Render `value` with exactly `digits` digits after the decimal point
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // -0.0 + 0.0 == +0.0
    let value = value + 0.0;

    match round_exact_tie(value, digits) {
        Some(text) => text,
        None => format!("{:.*}", digits, value),
    }
}

/// Render values sitting exactly halfway between two outputs
///
/// A double is an exact tie at `digits` digits iff `|v| * 2^(digits+1)` is an
/// odd integer; multiplying by a power of two is exact, so the test is exact.
/// Returns `None` when `value` is not a tie (or too large to handle here).
fn round_exact_tie(value: f64, digits: usize) -> Option<String> {
    let digits_i32 = i32::try_from(digits).ok()?;
    let magnitude = value.abs();
    let scaled = magnitude * 2f64.powi(digits_i32 + 1);
    if scaled.fract() != 0.0 || scaled >= 2f64.powi(64) {
        return None;
    }
    let odd = scaled as u128;
    if odd % 2 == 0 {
        return None;
    }

    // |v| * 10^d = odd * 5^d / 2, rounded half up
    let five_pow = 5u128.checked_pow(u32::try_from(digits).ok()?)?;
    let rounded = odd.checked_mul(five_pow)?.checked_add(1)? / 2;

    let ten_pow = 10u128.checked_pow(u32::try_from(digits).ok()?)?;
    let int_part = rounded / ten_pow;
    let frac_part = rounded % ten_pow;
    let sign = if value < 0.0 { "-" } else { "" };

    Some(if digits == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part:0digits$}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(to_fixed(1.35, 4), "1.3500");
        assert_eq!(to_fixed(-0.123456789, 6), "-0.123457");
        assert_eq!(to_fixed(335.0, 2), "335.00");
        assert_eq!(to_fixed(0.0, 6), "0.000000");
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(to_fixed(-0.0, 6), "0.000000");
        // Rounds to zero but keeps its sign, as toFixed does
        assert_eq!(to_fixed(-0.00001, 4), "-0.0000");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(-0.125, 2), "-0.13");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.5, 0), "1");
        assert_eq!(to_fixed(1.0625, 3), "1.063");
    }

    #[test]
    fn test_near_ties_follow_the_stored_value() {
        // 1.005 is stored slightly below the tie
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 0.35 is stored slightly below the tie
        assert_eq!(to_fixed(0.35, 1), "0.3");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }
}
