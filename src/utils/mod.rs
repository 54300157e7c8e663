//! Small numeric helpers shared by the scoring stages.

/// Clamp a ratio into the unit interval.
#[must_use]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Scale a 0–1 ratio into an integer band, rounding half away from zero.
#[must_use]
pub fn round_band(ratio: f64, band: i32) -> i32 {
    (f64::from(band) * clamp01(ratio)).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp01_bounds() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(0.0), 0.0);
        assert_eq!(clamp01(0.42), 0.42);
        assert_eq!(clamp01(1.0), 1.0);
        assert_eq!(clamp01(7.3), 1.0);
    }

    #[test]
    fn round_band_scales_and_rounds() {
        assert_eq!(round_band(0.95, 25), 24); // 23.75 rounds up
        assert_eq!(round_band(1.4, 20), 20); // over-unit input clamps first
        assert_eq!(round_band(-1.0, 15), 0);
        assert_eq!(round_band(0.5, 15), 8); // 7.5 rounds away from zero
    }
}
