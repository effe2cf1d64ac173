/// Quintic smoothing curve `6w^5 - 15w^4 + 10w^3`.
///
/// Zero first and second derivative at both ends, so noise built from it is C2.
pub fn smootherstep(w: f64) -> f64 {
    (w * (w * 6.0 - 15.0) + 10.0) * w * w * w
}

/// Derivative of [`smootherstep`] with respect to `w`.
pub fn smootherstep_dw(w: f64) -> f64 {
    (w * (w * 30.0 - 60.0) + 30.0) * w * w
}

/// Mathematical modulo: the result is always in `[0, k)` even for negative `n`.
/// `k` must be non-zero.
pub fn positive_mod(n: i32, k: u64) -> u64 {
    i128::from(n).rem_euclid(i128::from(k)) as u64
}

/// Convert a JS-style number to an i32 the way `ToInt32` does:
/// truncate, then wrap modulo 2^32. Returns None for NaN or infinities.
pub fn to_int32(value: f64) -> Option<i32> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    let wrapped = truncated.rem_euclid(4_294_967_296.0);
    Some(wrapped as u32 as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smootherstep_endpoints() {
        assert_eq!(smootherstep(0.0), 0.0);
        assert_eq!(smootherstep(1.0), 1.0);
        assert!((smootherstep(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_smootherstep_flat_at_ends() {
        assert_eq!(smootherstep_dw(0.0), 0.0);
        assert_eq!(smootherstep_dw(1.0), 0.0);
        // Peak slope at the midpoint is 30/16.
        assert!((smootherstep_dw(0.5) - 1.875).abs() < 1e-12);
    }

    #[test]
    fn test_smootherstep_dw_matches_finite_difference() {
        let h = 1e-6;
        for i in 1..10 {
            let w = i as f64 / 10.0;
            let fd = (smootherstep(w + h) - smootherstep(w - h)) / (2.0 * h);
            assert!((fd - smootherstep_dw(w)).abs() < 1e-6, "w={w}");
        }
    }

    #[test]
    fn test_positive_mod_negative_input() {
        assert_eq!(positive_mod(-1, 5), 4);
        assert_eq!(positive_mod(-5, 5), 0);
        assert_eq!(positive_mod(7, 5), 2);
        assert_eq!(positive_mod(i32::MIN, 3), 1);
    }

    #[test]
    fn test_positive_mod_moduli_past_u32() {
        let k = 1u64 << 32;
        assert_eq!(positive_mod(7, k), 7);
        assert_eq!(positive_mod(-1, k), k - 1);
        assert_eq!(positive_mod(i32::MIN, k + 1), k + 1 - (1u64 << 31));
    }

    #[test]
    fn test_to_int32_wraps() {
        assert_eq!(to_int32(42.0), Some(42));
        assert_eq!(to_int32(-3.9), Some(-3));
        assert_eq!(to_int32(4_294_967_296.0), Some(0));
        assert_eq!(to_int32(2_147_483_648.0), Some(i32::MIN));
        assert_eq!(to_int32(f64::NAN), None);
        assert_eq!(to_int32(f64::INFINITY), None);
    }
}
