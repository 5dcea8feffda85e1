/// Rounds `x` to `digits` decimals, ties to even.
pub fn round(x: f64, digits: u32) -> f64 {
    let pow1: f64;
    let pow2: f64;

    if digits > 22 {
        // pow1 * pow2 may overflow where each factor alone does not
        pow1 = 10.0_f64.powi((digits - 22) as i32);
        pow2 = 1e22;
    } else {
        pow1 = 10.0_f64.powi(digits as i32);
        pow2 = 1.0;
    }

    let y = (x * pow1) * pow2;
    let mut z = y.round();

    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }

    (z / pow2) / pow1
}

/// Rounds to the nearest integer count, ties to even. Non-finite and
/// non-positive inputs give zero.
pub fn round_to_count(x: f64) -> usize {
    let rounded = round(x, 0);
    if rounded.is_finite() && rounded > 0.0 {
        rounded as usize
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_go_to_even() {
        assert_eq!(round(0.5, 0), 0.0);
        assert_eq!(round(1.5, 0), 2.0);
        assert_eq!(round(2.5, 0), 2.0);
        assert_eq!(round(-2.5, 0), -2.0);
    }

    #[test]
    fn rounds_to_digits() {
        assert!((round(3.14159, 2) - 3.14).abs() < 1e-12);
        assert!((round(2.71828, 3) - 2.718).abs() < 1e-12);
    }

    #[test]
    fn count_rounding() {
        assert_eq!(round_to_count(10_000.0), 10_000);
        assert_eq!(round_to_count(2.4), 2);
        assert_eq!(round_to_count(0.4), 0);
        assert_eq!(round_to_count(-3.0), 0);
        assert_eq!(round_to_count(f64::NAN), 0);
        assert_eq!(round_to_count(f64::INFINITY), 0);
    }
}
