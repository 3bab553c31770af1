//! Lon/lat helpers. Points use `x` = longitude, `y` = latitude, in degrees.

use crate::coords;
use crate::point::VectorPoint;
use crate::s1::S1Angle;

/// Unit point for a lon/lat (left-handed).
pub fn ll_to_s2_point<M: Clone>(ll: &VectorPoint<M>) -> VectorPoint<M> {
    coords::lon_lat_to_xyz(ll)
}

/// Lon/lat of a direction vector (need not be unit length).
pub fn ll_from_s2_point<M: Clone>(p: &VectorPoint<M>) -> VectorPoint<M> {
    coords::xyz_to_lon_lat(p)
}

/// `(lon, lat)` in radians.
pub fn ll_to_angles<M>(ll: &VectorPoint<M>) -> (S1Angle, S1Angle) {
    (ll.x.to_radians(), ll.y.to_radians())
}

/// Wrap longitude into `[-180, 180)` and clamp latitude to `[-90, 90]`.
pub fn ll_normalize_mut<M>(ll: &mut VectorPoint<M>) -> &mut VectorPoint<M> {
    ll.x = (ll.x + 180.0).rem_euclid(360.0) - 180.0;
    ll.y = ll.y.clamp(-90.0, 90.0);
    ll
}

/// Surface distance in radians (haversine).
///
/// Stable for short distances; about 8 digits near antipodes, which is still
/// ~10cm on Earth. Use `S1ChordAngle::from_s2_points` when that matters.
pub fn ll_get_distance<M, N>(a: &VectorPoint<M>, b: &VectorPoint<N>) -> S1Angle {
    let (lon_a, lat_a) = ll_to_angles(a);
    let (lon_b, lat_b) = ll_to_angles(b);
    let dlat = (0.5 * (lat_b - lat_a)).sin();
    let dlon = (0.5 * (lon_b - lon_a)).sin();
    let x = dlat * dlat + dlon * dlon * lat_a.cos() * lat_b.cos();
    2.0 * x.min(1.0).sqrt().asin()
}

/// Initial bearing from `a` to `b`, degrees in `[0, 360)`.
pub fn ll_get_bearing<M, N>(a: &VectorPoint<M>, b: &VectorPoint<N>) -> f64 {
    let (lon_a, lat_a) = ll_to_angles(a);
    let (lon_b, lat_b) = ll_to_angles(b);
    let y = (lon_b - lon_a).sin() * lat_b.cos();
    let x = lat_a.cos() * lat_b.sin() - lat_a.sin() * lat_b.cos() * (lon_b - lon_a).cos();
    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn normalize_wraps_and_clamps() {
        let mut ll = VectorPoint::new_2d(190.0, 95.0);
        ll_normalize_mut(&mut ll);
        assert!((ll.x + 170.0).abs() < 1e-12);
        assert_eq!(ll.y, 90.0);

        let mut west = VectorPoint::new_2d(-540.0, -100.0);
        ll_normalize_mut(&mut west);
        assert!((west.x + 180.0).abs() < 1e-12);
        assert_eq!(west.y, -90.0);
    }

    #[test]
    fn distance_matches_point_angle() {
        let a = VectorPoint::new_2d(-122.4, 37.8);
        let b = VectorPoint::new_2d(2.35, 48.85);
        let via_points = ll_to_s2_point(&a).angle(&ll_to_s2_point(&b));
        assert!((ll_get_distance(&a, &b) - via_points).abs() < 1e-9);
        assert!(
            (ll_get_distance(&VectorPoint::new_2d(0.0, 0.0), &VectorPoint::new_2d(0.0, 90.0))
                - FRAC_PI_2)
                .abs()
                < 1e-12
        );
        assert!(
            (ll_get_distance(&VectorPoint::new_2d(0.0, 0.0), &VectorPoint::new_2d(180.0, 0.0))
                - PI)
                .abs()
                < 1e-7
        );
    }

    #[test]
    fn bearing_cardinal_directions() {
        let origin = VectorPoint::new_2d(0.0, 0.0);
        assert!(ll_get_bearing(&origin, &VectorPoint::new_2d(0.0, 10.0)).abs() < 1e-9);
        assert!((ll_get_bearing(&origin, &VectorPoint::new_2d(10.0, 0.0)) - 90.0).abs() < 1e-9);
        assert!((ll_get_bearing(&origin, &VectorPoint::new_2d(0.0, -10.0)) - 180.0).abs() < 1e-9);
        assert!((ll_get_bearing(&origin, &VectorPoint::new_2d(-10.0, 0.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn point_round_trip_keeps_payload() {
        let ll = VectorPoint::from_parts(45.0, -30.0, None, Some(3u8));
        let back = ll_from_s2_point(&ll_to_s2_point(&ll));
        assert!((back.x - 45.0).abs() < 1e-9 && (back.y + 30.0).abs() < 1e-9);
        assert_eq!(back.m, Some(3));
        let (lon, lat) = ll_to_angles(&ll);
        assert!((lon - PI / 4.0).abs() < 1e-15 && (lat + PI / 6.0).abs() < 1e-15);
    }
}
