//! Per-level cell size bounds for the quadratic projection.
//!
//! Purpose
//! - Answer "how big is a level-k cell" and the inverse "which level has cells
//!   of about this size" without touching any cell.
//!
//! Why this design
//! - A metric is a single derivative `deriv`; the value at level `k` is
//!   `deriv · 2^(−DIM·k)`. Length metrics have `DIM = 1`, area metrics `DIM = 2`.
//! - Named metrics are `const` items; there is no lazy initialization.
//! - Level lookups use the binary exponent of a ratio, so they round exactly at
//!   powers of two instead of going through `log2`.

use crate::cfg::K_MAX_LEVEL;
use std::f64::consts::{PI, SQRT_2};

/// Cell metric of dimension `DIM` (1 = length, 2 = area).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metric<const DIM: u8> {
    pub deriv: f64,
}

pub type LengthMetric = Metric<1>;
pub type AreaMetric = Metric<2>;

impl<const DIM: u8> Metric<DIM> {
    pub const fn new(deriv: f64) -> Self {
        Self { deriv }
    }

    #[inline]
    pub const fn dim(&self) -> u8 {
        DIM
    }

    /// Metric value at `level`.
    pub fn get_value(&self, level: u8) -> f64 {
        self.deriv * 2f64.powi(-i32::from(DIM) * i32::from(level))
    }

    /// Level whose value is closest to `value` (geometric rounding).
    pub fn get_closest_level(&self, value: f64) -> u8 {
        let scale = if DIM == 1 { SQRT_2 } else { 2.0 };
        self.get_level_for_max_value(scale * value)
    }

    /// Smallest level whose value is `<= value`; 30 when none fits.
    pub fn get_level_for_max_value(&self, value: f64) -> u8 {
        if value <= 0.0 {
            return K_MAX_LEVEL;
        }
        let level = ilogb(value / self.deriv);
        clamp_level(-(level >> (DIM - 1)))
    }

    /// Largest level whose value is `>= value`; 0 when none fits.
    pub fn get_level_for_min_value(&self, value: f64) -> u8 {
        if value <= 0.0 {
            return K_MAX_LEVEL;
        }
        let level = ilogb(self.deriv / value);
        clamp_level(level >> (DIM - 1))
    }
}

fn clamp_level(level: i32) -> u8 {
    level.clamp(0, i32::from(K_MAX_LEVEL)) as u8
}

/// Unbiased binary exponent of a positive finite `x`, i.e. `floor(log2 x)`.
fn ilogb(x: f64) -> i32 {
    let biased = ((x.to_bits() >> 52) & 0x7ff) as i32;
    match biased {
        0 => x.log2().floor() as i32,
        0x7ff => i32::MAX,
        _ => biased - 1023,
    }
}

// Angle span: largest angle between two opposite edges' great circles.
pub const K_MIN_ANGLE_SPAN: LengthMetric = Metric::new(4.0 / 3.0);
pub const K_MAX_ANGLE_SPAN: LengthMetric = Metric::new(1.704897179199218);
pub const K_AVG_ANGLE_SPAN: LengthMetric = Metric::new(PI / 2.0);

// Width: minimum distance between opposite edges.
pub const K_MIN_WIDTH: LengthMetric = Metric::new(2.0 * SQRT_2 / 3.0);
pub const K_MAX_WIDTH: LengthMetric = Metric::new(1.704897179199218);
pub const K_AVG_WIDTH: LengthMetric = Metric::new(1.4345236728860993);

pub const K_MIN_EDGE: LengthMetric = Metric::new(2.0 * SQRT_2 / 3.0);
pub const K_MAX_EDGE: LengthMetric = Metric::new(1.704897179199218);
pub const K_AVG_EDGE: LengthMetric = Metric::new(1.459213746386106);

pub const K_MIN_DIAG: LengthMetric = Metric::new(8.0 * SQRT_2 / 9.0);
pub const K_MAX_DIAG: LengthMetric = Metric::new(2.438654594434021);
pub const K_AVG_DIAG: LengthMetric = Metric::new(2.060422738998471);

pub const K_MIN_AREA: AreaMetric = Metric::new(8.0 * SQRT_2 / 9.0);
pub const K_MAX_AREA: AreaMetric = Metric::new(2.6357992569631614);
pub const K_AVG_AREA: AreaMetric = Metric::new(4.0 * PI / 6.0);

/// Upper bound on longest edge / shortest edge of any cell.
pub const K_MAX_EDGE_ASPECT: f64 = 1.2010892033702918;
/// Upper bound on longest diagonal / shortest diagonal of any cell.
pub const K_MAX_DIAG_ASPECT: f64 = 1.7320508075688772;

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LENGTHS: [LengthMetric; 12] = [
        K_MIN_ANGLE_SPAN,
        K_MAX_ANGLE_SPAN,
        K_AVG_ANGLE_SPAN,
        K_MIN_WIDTH,
        K_MAX_WIDTH,
        K_AVG_WIDTH,
        K_MIN_EDGE,
        K_MAX_EDGE,
        K_AVG_EDGE,
        K_MIN_DIAG,
        K_MAX_DIAG,
        K_AVG_DIAG,
    ];
    const AREAS: [AreaMetric; 3] = [K_MIN_AREA, K_MAX_AREA, K_AVG_AREA];

    #[test]
    fn values_halve_per_level() {
        assert!((K_AVG_ANGLE_SPAN.get_value(0) - PI / 2.0).abs() < 1e-15);
        assert!((K_AVG_ANGLE_SPAN.get_value(1) - PI / 4.0).abs() < 1e-15);
        assert!((K_AVG_AREA.get_value(1) - K_AVG_AREA.deriv / 4.0).abs() < 1e-15);
        assert_eq!(K_MAX_EDGE.dim(), 1);
        assert_eq!(K_MAX_AREA.dim(), 2);
    }

    #[test]
    fn level_lookups_match_known_values() {
        assert_eq!(K_AVG_ANGLE_SPAN.get_level_for_max_value(0.77), 2);
        assert_eq!(K_AVG_ANGLE_SPAN.get_level_for_min_value(0.77), 1);
        assert_eq!(K_AVG_ANGLE_SPAN.get_level_for_min_value(0.44), 1);
        assert_eq!(K_AVG_ANGLE_SPAN.get_closest_level(0.44), 2);
        assert_eq!(K_AVG_AREA.get_level_for_max_value(0.5), 2);
        assert_eq!(K_AVG_AREA.get_level_for_min_value(0.15), 1);
        assert_eq!(K_MAX_EDGE.get_closest_level(std::f64::consts::FRAC_PI_3), 1);
    }

    #[test]
    fn non_positive_and_extreme_values() {
        assert_eq!(K_AVG_EDGE.get_level_for_max_value(0.0), 30);
        assert_eq!(K_AVG_EDGE.get_level_for_min_value(-1.0), 30);
        assert_eq!(K_AVG_EDGE.get_level_for_max_value(100.0), 0);
        assert_eq!(K_AVG_EDGE.get_level_for_min_value(100.0), 0);
        assert_eq!(K_AVG_EDGE.get_level_for_max_value(1e-300), 30);
        assert_eq!(K_AVG_EDGE.get_level_for_min_value(1e-300), 30);
    }

    #[test]
    fn levels_invert_values_for_every_metric() {
        for level in 0..=30u8 {
            for m in LENGTHS {
                let v = m.get_value(level);
                assert_eq!(m.get_level_for_max_value(v), level, "{m:?} max {level}");
                assert_eq!(m.get_level_for_min_value(v), level, "{m:?} min {level}");
                assert_eq!(m.get_closest_level(v), level, "{m:?} closest {level}");
            }
            for m in AREAS {
                let v = m.get_value(level);
                assert_eq!(m.get_level_for_max_value(v), level, "{m:?} max {level}");
                assert_eq!(m.get_level_for_min_value(v), level, "{m:?} min {level}");
                assert_eq!(m.get_closest_level(v), level, "{m:?} closest {level}");
            }
        }
    }

    #[test]
    fn ilogb_is_floor_log2() {
        assert_eq!(ilogb(1.0), 0);
        assert_eq!(ilogb(1.999), 0);
        assert_eq!(ilogb(2.0), 1);
        assert_eq!(ilogb(0.5), -1);
        assert_eq!(ilogb(0.49), -2);
        assert_eq!(ilogb(f64::MIN_POSITIVE / 4.0), -1024);
    }

    proptest! {
        #[test]
        fn max_value_level_is_tight(v in 1e-9f64..4.0) {
            let level = K_MAX_EDGE.get_level_for_max_value(v);
            if level < 30 && level > 0 {
                prop_assert!(K_MAX_EDGE.get_value(level) <= v);
                prop_assert!(K_MAX_EDGE.get_value(level - 1) > v);
            }
        }

        #[test]
        fn min_value_level_is_tight(v in 1e-9f64..4.0) {
            let level = K_MIN_EDGE.get_level_for_min_value(v);
            if level < 30 && level > 0 {
                prop_assert!(K_MIN_EDGE.get_value(level) >= v);
                prop_assert!(K_MIN_EDGE.get_value(level + 1) < v);
            }
        }
    }
}
