//! Timing curves shared by the effects.

use std::time::Duration;

/// Linear interpolation between `from` and `to`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Decelerating curve, fast start and gentle landing.
pub fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Symmetric S-curve.
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fraction of the way through `span` at `elapsed`, clamped to `0..=1`.
pub fn progress(elapsed: Duration, span: Duration) -> f32 {
    if span.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / span.as_secs_f32()).clamp(0.0, 1.0)
}

/// Phase of an infinite alternating cycle: rises 0 to 1 over `period`,
/// falls back over the next `period`, and so on.
pub fn alternate(elapsed: Duration, period: Duration) -> f32 {
    if period.is_zero() {
        return 0.0;
    }
    let cycles = elapsed.as_secs_f64() / period.as_secs_f64();
    let within = cycles.fract() as f32;
    if (cycles as u64) % 2 == 0 {
        within
    } else {
        1.0 - within
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternate_bounces() {
        let period = Duration::from_secs(2);
        assert_eq!(alternate(Duration::ZERO, period), 0.0);
        assert!((alternate(Duration::from_secs(1), period) - 0.5).abs() < 1e-6);
        assert!((alternate(Duration::from_secs(3), period) - 0.5).abs() < 1e-6);
        assert!((alternate(Duration::from_millis(3500), period) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_curves_fix_endpoints() {
        for curve in [ease_out, ease_in_out] {
            assert_eq!(curve(0.0), 0.0);
            assert_eq!(curve(1.0), 1.0);
        }
    }
}
