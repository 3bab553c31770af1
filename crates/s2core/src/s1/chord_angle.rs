use super::angle::{angle_from_km, angle_from_meters, angle_to_km, angle_to_meters, S1Angle};
use crate::point::VectorPoint;
use std::f64::consts::PI;

/// Largest squared chord length, reached at a straight angle.
pub const K_MAX_LENGTH_2: f64 = 4.0;

/// Angle stored as the squared length of its chord on the unit sphere.
///
/// Invariants:
/// - Finite values lie in `[0, 4]` (`2·(1 − cos θ)`).
/// - `-1` is the negative (empty) sentinel, `+∞` the infinity sentinel.
///
/// Comparisons are monotone in the underlying angle, so caps compare
/// chord values directly without trigonometry.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct S1ChordAngle(f64);

/// Tagged view of a chord angle's sentinel state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChordAngleKind {
    Negative,
    Finite(f64),
    Infinity,
}

impl S1ChordAngle {
    pub const ZERO: S1ChordAngle = S1ChordAngle(0.0);
    pub const NEGATIVE: S1ChordAngle = S1ChordAngle(-1.0);
    pub const RIGHT: S1ChordAngle = S1ChordAngle(2.0);
    pub const STRAIGHT: S1ChordAngle = S1ChordAngle(K_MAX_LENGTH_2);
    pub const INFINITY: S1ChordAngle = S1ChordAngle(f64::INFINITY);

    #[inline]
    pub const fn negative() -> Self {
        Self::NEGATIVE
    }

    #[inline]
    pub const fn right() -> Self {
        Self::RIGHT
    }

    #[inline]
    pub const fn straight() -> Self {
        Self::STRAIGHT
    }

    /// Chord angle for `angle` radians. Negative input gives the negative
    /// sentinel; anything past π saturates at a straight angle.
    pub fn from_angle(angle: S1Angle) -> Self {
        if angle < 0.0 {
            Self::NEGATIVE
        } else if angle == f64::INFINITY {
            Self::INFINITY
        } else {
            let length = 2.0 * (0.5 * angle.min(PI)).sin();
            Self(length * length)
        }
    }

    /// Wrap a squared chord length, capped at 4.
    #[inline]
    pub fn from_length2(length2: f64) -> Self {
        Self(length2.min(K_MAX_LENGTH_2))
    }

    /// Chord between two unit points. Roundoff can push `|a-b|²` past 4,
    /// hence the cap.
    pub fn from_s2_points<M, N>(a: &VectorPoint<M>, b: &VectorPoint<N>) -> Self {
        Self::from_length2(a.sub(b).norm2())
    }

    /// Upper bound using the arc length as the chord length.
    pub fn fast_upper_bound_from(angle: S1Angle) -> Self {
        Self::from_length2(angle * angle)
    }

    pub fn from_meters(meters: f64, radius: f64) -> Self {
        Self::from_angle(angle_from_meters(meters, radius))
    }

    pub fn from_km(km: f64, radius: f64) -> Self {
        Self::from_angle(angle_from_km(km, radius))
    }

    /// Raw squared chord length, sentinels included.
    #[inline]
    pub const fn length2(self) -> f64 {
        self.0
    }

    pub fn kind(self) -> ChordAngleKind {
        if self.0 < 0.0 {
            ChordAngleKind::Negative
        } else if self.0 == f64::INFINITY {
            ChordAngleKind::Infinity
        } else {
            ChordAngleKind::Finite(self.0)
        }
    }

    #[inline]
    pub fn is_special(self) -> bool {
        self.0 < 0.0 || self.0 == f64::INFINITY
    }

    /// Angle in radians; `-1` for negative, `∞` for infinity.
    pub fn to_angle(self) -> S1Angle {
        match self.kind() {
            ChordAngleKind::Negative => -1.0,
            ChordAngleKind::Infinity => f64::INFINITY,
            ChordAngleKind::Finite(length2) => 2.0 * (0.5 * length2.sqrt()).asin(),
        }
    }

    pub fn to_meters(self, radius: f64) -> f64 {
        angle_to_meters(self.to_angle(), radius)
    }

    pub fn to_km(self, radius: f64) -> f64 {
        angle_to_km(self.to_angle(), radius)
    }

    // The trig helpers work on the squared chord directly and skip asin.

    /// `sin²θ`, from `sin(2A) = 2 sin A cos A` with `a = 2 sin A`.
    #[inline]
    pub fn sin2(self) -> f64 {
        self.0 * (1.0 - 0.25 * self.0)
    }

    #[inline]
    pub fn sin(self) -> f64 {
        self.sin2().sqrt()
    }

    #[inline]
    pub fn cos(self) -> f64 {
        1.0 - 0.5 * self.0
    }

    #[inline]
    pub fn tan(self) -> f64 {
        self.sin() / self.cos()
    }
}
