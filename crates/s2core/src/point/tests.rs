use super::*;
use crate::cfg::K_LIMIT_IJ;
use nalgebra::Vector3;
use proptest::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn binary_algebra_reads_missing_z_as_zero() {
    let a = VectorPoint::new(1.0, 2.0, 3.0);
    let b = VectorPoint::new_2d(4.0, 5.0);
    assert_eq!(a.add(&b), VectorPoint::new(5.0, 7.0, 3.0));
    assert_eq!(a.sub(&b), VectorPoint::new(-3.0, -3.0, 3.0));
    assert_eq!(a.mul(&b), VectorPoint::new(4.0, 10.0, 0.0));
    assert_eq!(a.add_scalar(1.0), VectorPoint::new(2.0, 3.0, 4.0));
    assert_eq!(b.sub_scalar(1.0), VectorPoint::new(3.0, 4.0, -1.0));
    assert_eq!(a.mul_scalar(2.0), VectorPoint::new(2.0, 4.0, 6.0));
    assert_eq!(a.div_scalar(2.0), VectorPoint::new(0.5, 1.0, 1.5));
    assert_eq!(
        a.div(&VectorPoint::new(2.0, 4.0, 6.0)),
        VectorPoint::new(0.5, 0.5, 0.5)
    );
    assert_eq!(a.dot(&b), 14.0);
}

#[test]
fn operators_match_methods() {
    let a = VectorPoint::new(1.0, 2.0, 3.0);
    let b = VectorPoint::new(0.5, 0.5, 0.5);
    assert_eq!(a + b, a.add(&b));
    assert_eq!(a - b, a.sub(&b));
    assert_eq!(-a, VectorPoint::new(-1.0, -2.0, -3.0));
    assert_eq!(a * 2.0, a.mul_scalar(2.0));
    assert_eq!(a / 2.0, a.div_scalar(2.0));
}

#[test]
fn add_mut_only_touches_z_when_both_have_it() {
    let mut a = VectorPoint::new_2d(1.0, 1.0);
    a.add_mut(&VectorPoint::new(1.0, 2.0, 3.0));
    assert_eq!(a, VectorPoint::new_2d(2.0, 3.0));

    let mut b = VectorPoint::new(1.0, 1.0, 1.0);
    b.add_mut(&VectorPoint::new_2d(1.0, 1.0));
    assert_eq!(b, VectorPoint::new(2.0, 2.0, 1.0));
    b.add_mut(&VectorPoint::new(0.0, 0.0, 1.0));
    assert_eq!(b.z, Some(2.0));
}

#[test]
fn normalize_and_length() {
    let mut p = VectorPoint::new(3.0, 0.0, 4.0);
    assert_eq!(p.length(), 5.0);
    assert_eq!(p.norm2(), 25.0);
    p.normalize_mut();
    assert!(close(p.length(), 1.0));
    assert!(close(p.x, 0.6) && close(p.z.unwrap_or(0.0), 0.8));

    let mut q = VectorPoint::new_2d(3.0, 4.0);
    q.div_scalar_mut(5.0);
    assert_eq!(q.z, None);
    assert!(close(q.y, 0.8));
}

#[test]
fn invert_and_normalized_keep_payload() {
    let p = VectorPoint::from_parts(2.0, 0.0, Some(0.0), Some(7u32));
    let inv = p.invert();
    assert_eq!(inv.m, Some(7));
    assert_eq!((inv.x, inv.y, inv.z), (-2.0, -0.0, Some(-0.0)));
    let n = p.normalized();
    assert_eq!(n.m, Some(7));
    assert_eq!(n.x, 1.0);
    assert_eq!(p.add(&p).m, None);
}

#[test]
fn cross_angle_and_distance() {
    let x = VectorPoint::new(1.0, 0.0, 0.0);
    let y = VectorPoint::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(&y), VectorPoint::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(&x), VectorPoint::new(0.0, 0.0, -1.0));
    assert!(close(x.angle(&y), FRAC_PI_2));
    assert!(close(x.angle(&x.invert()), PI));
    assert!(close(x.distance(&y), 2f64.sqrt()));
    // 2D cross treats z as 0
    let c = VectorPoint::new_2d(1.0, 0.0).cross(&VectorPoint::new_2d(0.0, 1.0));
    assert_eq!(c, VectorPoint::new(0.0, 0.0, 1.0));
}

#[test]
fn distance_planet_scales_inputs_in_place() {
    let mut a = VectorPoint::new(1.0, 0.0, 0.0);
    let mut b = VectorPoint::new(0.0, 0.0, 1.0);
    let d = distance_planet_mut(&mut a, &mut b, 2.0, 3.0);
    assert_eq!(a, VectorPoint::new(2.0, 0.0, 0.0));
    assert_eq!(b, VectorPoint::new(0.0, 0.0, 3.0));
    assert!(close(d, 13f64.sqrt()));

    let mut e1 = VectorPoint::new(1.0, 0.0, 0.0);
    let mut e2 = VectorPoint::new(-1.0, 0.0, 0.0);
    assert!(close(distance_earth_mut(&mut e1, &mut e2), 2.0 * 6_378_137.0));
}

#[test]
fn nalgebra_interop() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    let p = VectorPoint::from(v);
    let back: Vector3<f64> = (&p).into();
    assert_eq!(back, v);
    assert_eq!(VectorPoint::new_2d(1.0, 2.0).to_vector3(), Vector3::new(1.0, 2.0, 0.0));
}

#[test]
fn face_of_axis_points() {
    assert_eq!(VectorPoint::new(0.0, -2.0, 0.5).face(), Face::NegY);
    assert_eq!(VectorPoint::new(0.1, 0.2, -0.9).face(), Face::NegZ);
}

#[test]
fn uv_conversions_round_trip() {
    for face in Face::ALL {
        let p = point_from_uv::<()>(face, 0.25, -0.5, None);
        assert!(close(p.length(), 1.0));
        let (f, u, v) = point_to_uv(&p);
        assert_eq!(f, face);
        assert!(close(u, 0.25) && close(v, -0.5));

        let q = point_from_st::<()>(face, 0.3, 0.6, None);
        let (f, s, t) = point_to_st(&q);
        assert_eq!(f, face);
        assert!(close(s, 0.3) && close(t, 0.6));

        let gl = point_from_st_gl(face, 0.3, 0.6);
        assert!(close(gl.length(), 1.0));
        let (gu, gv) = crate::coords::face_xyz_gl_to_uv(face, &point_from_uv_gl(face, 0.1, 0.2));
        assert!(close(gu, 0.1) && close(gv, 0.2));
    }
}

#[test]
fn ij_conversions() {
    let p = point_from_ij(Face::PosZ, 1 << 29, 1 << 29);
    assert!(close(p.z.unwrap_or(0.0), 1.0));
    assert_eq!(point_to_ij(&p, None), (Face::PosZ, 1 << 29, 1 << 29));
    assert_eq!(point_to_ij(&p, Some(1)), (Face::PosZ, 1, 1));
    assert_eq!(point_to_ij(&p, Some(0)), (Face::PosZ, 0, 0));

    let far = point_from_st::<()>(Face::PosX, 0.99999, 0.5, None);
    let (f, i, _) = point_to_ij(&far, None);
    assert_eq!(f, Face::PosX);
    assert!(i < K_LIMIT_IJ && i > K_LIMIT_IJ - 20_000);
}

#[test]
fn lon_lat_and_cell_id_conversions() {
    let ll = VectorPoint::new_2d(10.0, 20.0);
    let p = point_from_lon_lat(&ll);
    let back = point_to_lon_lat(&p);
    assert!((back.x - 10.0).abs() < 1e-9 && (back.y - 20.0).abs() < 1e-9);

    let gl = point_from_lon_lat_gl(&VectorPoint::new_2d(90.0, 0.0));
    assert!(close(gl.x, 1.0));

    let id = point_to_s2_cell_id(&VectorPoint::new(1.0, 0.0, 0.0));
    assert_eq!(id.0, 1_152_921_504_606_846_977);
    let center = point_from_s2_cell_id(id);
    assert!(center.angle(&VectorPoint::new(1.0, 0.0, 0.0)) < 1e-8);
}

proptest! {
    #[test]
    fn normalized_points_have_unit_length(
        x in -10.0f64..10.0, y in -10.0f64..10.0, z in 0.1f64..10.0
    ) {
        let p = VectorPoint::new(x, y, z).normalized();
        prop_assert!((p.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cross_is_orthogonal(
        ax in -1.0f64..1.0, ay in -1.0f64..1.0, az in -1.0f64..1.0,
        bx in -1.0f64..1.0, by in -1.0f64..1.0, bz in -1.0f64..1.0
    ) {
        let a = VectorPoint::new(ax, ay, az);
        let b = VectorPoint::new(bx, by, bz);
        let c = a.cross(&b);
        prop_assert!(c.dot(&a).abs() < 1e-12);
        prop_assert!(c.dot(&b).abs() < 1e-12);
    }
}
