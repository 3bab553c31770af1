use crate::cfg::EARTH_RADIUS;
use crate::ll;
use crate::point::VectorPoint;
use std::f64::consts::TAU;

/// Angle in radians.
pub type S1Angle = f64;

#[inline]
pub fn angle_from_degrees(degrees: f64) -> S1Angle {
    degrees.to_radians()
}

#[inline]
pub fn angle_to_degrees(angle: S1Angle) -> f64 {
    angle.to_degrees()
}

/// Angle from degrees scaled by 1e5.
pub fn angle_from_e5(e5: i64) -> S1Angle {
    angle_from_degrees(e5 as f64 * 1e-5)
}

/// Angle from degrees scaled by 1e6.
pub fn angle_from_e6(e6: i64) -> S1Angle {
    angle_from_degrees(e6 as f64 * 1e-6)
}

/// Angle from degrees scaled by 1e7.
pub fn angle_from_e7(e7: i64) -> S1Angle {
    angle_from_degrees(e7 as f64 * 1e-7)
}

pub fn angle_e5(angle: S1Angle) -> f64 {
    angle_to_degrees(angle) * 1e5
}

pub fn angle_e6(angle: S1Angle) -> f64 {
    angle_to_degrees(angle) * 1e6
}

pub fn angle_e7(angle: S1Angle) -> f64 {
    angle_to_degrees(angle) * 1e7
}

/// Angle between two points; they need not be unit length.
pub fn angle_from_s2_points<M, N>(a: &VectorPoint<M>, b: &VectorPoint<N>) -> S1Angle {
    a.angle(b)
}

/// Surface angle between two lon/lat points (haversine).
pub fn angle_from_lon_lat<M, N>(a: &VectorPoint<M>, b: &VectorPoint<N>) -> S1Angle {
    ll::ll_get_distance(a, b)
}

/// Arc length on a sphere of `radius` meters.
pub fn angle_to_meters(angle: S1Angle, radius: f64) -> f64 {
    angle * radius
}

pub fn angle_from_meters(meters: f64, radius: f64) -> S1Angle {
    meters / radius
}

pub fn angle_to_km(angle: S1Angle, radius: f64) -> f64 {
    angle * radius / 1_000.0
}

pub fn angle_from_km(km: f64, radius: f64) -> S1Angle {
    km * 1_000.0 / radius
}

/// Arc length on Earth in meters.
pub fn angle_to_earth_meters(angle: S1Angle) -> f64 {
    angle_to_meters(angle, EARTH_RADIUS)
}

pub fn angle_from_earth_meters(meters: f64) -> S1Angle {
    angle_from_meters(meters, EARTH_RADIUS)
}

pub fn angle_to_earth_km(angle: S1Angle) -> f64 {
    angle_to_km(angle, EARTH_RADIUS)
}

pub fn angle_from_earth_km(km: f64) -> S1Angle {
    angle_from_km(km, EARTH_RADIUS)
}

/// Remainder modulo 2π; keeps the sign of the input.
pub fn angle_normalize(angle: S1Angle) -> S1Angle {
    angle % TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn degree_and_e_formats() {
        assert!((angle_from_degrees(180.0) - PI).abs() < 1e-15);
        assert!((angle_to_degrees(FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((angle_from_e5(9_000_000) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_from_e6(90_000_000) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_from_e7(900_000_000) - FRAC_PI_2).abs() < 1e-12);
        assert!((angle_e5(FRAC_PI_2) - 9e6).abs() < 1e-6);
        assert!((angle_e6(FRAC_PI_2) - 9e7).abs() < 1e-5);
        assert!((angle_e7(FRAC_PI_2) - 9e8).abs() < 1e-4);
    }

    #[test]
    fn distance_conversions() {
        assert_eq!(angle_to_meters(2.0, 10.0), 20.0);
        assert_eq!(angle_from_meters(20.0, 10.0), 2.0);
        assert_eq!(angle_to_km(1.0, 5_000.0), 5.0);
        assert_eq!(angle_from_km(5.0, 5_000.0), 1.0);
        let one_km = angle_from_earth_km(1.0);
        assert!((angle_to_earth_meters(one_km) - 1_000.0).abs() < 1e-9);
        assert!((angle_to_earth_km(angle_from_earth_meters(2_500.0)) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn angles_between_points() {
        let a = VectorPoint::new(1.0, 0.0, 0.0);
        let b = VectorPoint::new(0.0, 0.0, 2.0);
        assert!((angle_from_s2_points(&a, &b) - FRAC_PI_2).abs() < 1e-15);
        let la = VectorPoint::new_2d(0.0, 0.0);
        let lb = VectorPoint::new_2d(90.0, 0.0);
        assert!((angle_from_lon_lat(&la, &lb) - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn normalize_wraps_full_turns() {
        assert!((angle_normalize(3.0 * PI) - PI).abs() < 1e-12);
        assert!((angle_normalize(-3.0 * PI) + PI).abs() < 1e-12);
        assert_eq!(angle_normalize(1.0), 1.0);
    }
}
