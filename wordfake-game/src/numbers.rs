//! Numeric conversion helpers centralizing safe numeric casts.

use num_traits::cast::cast;

/// Floor a f64 and clamp it to the usize range, returning 0 for non-finite values.
#[must_use]
pub fn floor_f64_to_usize(value: f64) -> usize {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<usize, f64>(usize::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).floor();
    cast::<f64, usize>(clamped).unwrap_or(0)
}

/// Round a f64 and clamp it to the u32 range, returning 0 for non-finite values.
#[must_use]
pub fn round_f64_to_u32(value: f64) -> u32 {
    if !value.is_finite() {
        return 0;
    }
    let max = cast::<u32, f64>(u32::MAX).unwrap_or(f64::MAX);
    let clamped = value.clamp(0.0, max).round();
    cast::<f64, u32>(clamped).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_handles_non_finite() {
        assert_eq!(floor_f64_to_usize(f64::NAN), 0);
        assert_eq!(floor_f64_to_usize(f64::INFINITY), 0);
        assert_eq!(floor_f64_to_usize(-2.5), 0);
        assert_eq!(floor_f64_to_usize(4.999), 4);
    }

    #[test]
    fn rounders_cover_ranges() {
        assert_eq!(round_f64_to_u32(66.6), 67);
        assert_eq!(round_f64_to_u32(-1.0), 0);
        assert_eq!(round_f64_to_u32(f64::from(u32::MAX) * 2.0), u32::MAX);
        assert_eq!(round_f64_to_u32(f64::NAN), 0);
    }
}
