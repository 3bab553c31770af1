//! Coordinate transforms between lon/lat, unit-sphere XYZ and per-face spaces.
//!
//! Purpose
//! - Pure, stateless conversions used by every other layer.
//!
//! Coordinate systems
//! - `(s,t) ∈ [0,1]²`: cell space on a face; cells are uniform squares here.
//! - `(u,v) ∈ [-1,1]²`: gnomonic face coordinates; `(u,v)` and the face
//!   determine a point on the cube surface.
//! - `(i,j) ∈ [0, 2^30)²`: discrete leaf-cell coordinates, `s·2^30` floored.
//! - `(si,ti) ∈ [0, 2^31]²`: half-leaf resolution, used for cell centers.
//!
//! Handedness
//! - `face_uv_to_xyz` and friends are left-handed (`x` toward lon 0 on the
//!   equator, `z` toward the north pole). The `_gl` family is the right-handed
//!   variant used by GPU consumers. Mixing the two yields wrong results.
//!
//! Missing `z`
//! - Face selection, face projection and `xyz_to_lon_lat` read a missing `z`
//!   as `1`. Point algebra (see `crate::point`) reads it as `0`.

mod types;

pub use types::{Face, Projection};

use crate::cfg::{K_LIMIT_IJ, K_MAX_LEVEL};
use crate::point::VectorPoint;
use std::f64::consts::{FRAC_1_PI, FRAC_PI_2, FRAC_PI_4};

#[inline]
pub fn linear_st_to_uv(s: f64) -> f64 {
    2.0 * s - 1.0
}

#[inline]
pub fn linear_uv_to_st(u: f64) -> f64 {
    0.5 * (u + 1.0)
}

#[inline]
pub fn tan_st_to_uv(s: f64) -> f64 {
    (FRAC_PI_2 * s - FRAC_PI_4).tan()
}

#[inline]
pub fn tan_uv_to_st(u: f64) -> f64 {
    2.0 * FRAC_1_PI * (u.atan() + FRAC_PI_4)
}

/// Quadratic curve `s → u`. Maps `0 → -1`, `0.5 → 0`, `1 → 1`.
#[inline]
pub fn quadratic_st_to_uv(s: f64) -> f64 {
    if s >= 0.5 {
        (1.0 / 3.0) * (4.0 * s * s - 1.0)
    } else {
        (1.0 / 3.0) * (1.0 - 4.0 * (1.0 - s) * (1.0 - s))
    }
}

/// Inverse of [`quadratic_st_to_uv`].
#[inline]
pub fn quadratic_uv_to_st(u: f64) -> f64 {
    if u >= 0.0 {
        0.5 * (1.0 + 3.0 * u).sqrt()
    } else {
        1.0 - 0.5 * (1.0 - 3.0 * u).sqrt()
    }
}

/// Default projection (`Projection::Quadratic`).
#[inline]
pub fn st_to_uv(s: f64) -> f64 {
    quadratic_st_to_uv(s)
}

/// Default inverse projection (`Projection::Quadratic`).
#[inline]
pub fn uv_to_st(u: f64) -> f64 {
    quadratic_uv_to_st(u)
}

/// Leaf index containing `s`, clamped to `[0, 2^30 - 1]`.
#[inline]
pub fn st_to_ij(s: f64) -> u32 {
    let scaled = (f64::from(K_LIMIT_IJ) * s).floor();
    scaled.clamp(0.0, f64::from(K_LIMIT_IJ - 1)) as u32
}

#[inline]
pub fn ij_to_st(i: u32) -> f64 {
    f64::from(i) / f64::from(K_LIMIT_IJ)
}

#[inline]
pub fn siti_to_st(si: u32) -> f64 {
    (1.0 / 2_147_483_648.0) * f64::from(si)
}

/// Left-handed face point; not unit length.
pub fn face_uv_to_xyz<M>(face: Face, u: f64, v: f64, m: Option<M>) -> VectorPoint<M> {
    let (x, y, z) = match face {
        Face::PosX => (1.0, u, v),
        Face::PosY => (-u, 1.0, v),
        Face::PosZ => (-u, -v, 1.0),
        Face::NegX => (-1.0, -v, -u),
        Face::NegY => (v, -1.0, -u),
        Face::NegZ => (v, u, -1.0),
    };
    VectorPoint::from_parts(x, y, Some(z), m)
}

/// Right-handed face point; not unit length.
pub fn face_uv_to_xyz_gl<M>(face: Face, u: f64, v: f64, m: Option<M>) -> VectorPoint<M> {
    let (x, y, z) = match face {
        Face::PosX => (u, v, 1.0),
        Face::PosY => (1.0, v, -u),
        Face::PosZ => (-v, 1.0, -u),
        Face::NegX => (-v, -u, -1.0),
        Face::NegY => (-1.0, -u, v),
        Face::NegZ => (u, -1.0, v),
    };
    VectorPoint::from_parts(x, y, Some(z), m)
}

/// `(u,v)` of `p` relative to `face`. Meaningful only when `p` projects onto it.
pub fn face_xyz_to_uv<M>(face: Face, p: &VectorPoint<M>) -> (f64, f64) {
    let (x, y, z) = (p.x, p.y, p.z.unwrap_or(1.0));
    match face {
        Face::PosX => (y / x, z / x),
        Face::PosY => (-x / y, z / y),
        Face::PosZ => (-x / z, -y / z),
        Face::NegX => (z / x, y / x),
        Face::NegY => (z / y, -x / y),
        Face::NegZ => (-y / z, -x / z),
    }
}

/// Right-handed counterpart of [`face_xyz_to_uv`].
pub fn face_xyz_gl_to_uv<M>(face: Face, p: &VectorPoint<M>) -> (f64, f64) {
    let (x, y, z) = (p.x, p.y, p.z.unwrap_or(1.0));
    match face {
        Face::PosX => (x / z, y / z),
        Face::PosY => (-z / x, y / x),
        Face::PosZ => (-z / y, -x / y),
        Face::NegX => (y / z, x / z),
        Face::NegY => (y / x, -z / x),
        Face::NegZ => (-x / y, -z / y),
    }
}

/// Face whose axis has the largest absolute component.
///
/// Ties use strict `>`: `|x| == |y|` picks the `y`/`z` branch, so
/// `(0.5, 0.5, 0.5)` lands on face 2. Negative components add 3.
pub fn xyz_to_face<M>(p: &VectorPoint<M>) -> Face {
    let z = p.z.unwrap_or(1.0);
    let (ax, ay, az) = (p.x.abs(), p.y.abs(), z.abs());
    let axis: u8 = if ax > ay {
        if ax > az {
            0
        } else {
            2
        }
    } else if ay > az {
        1
    } else {
        2
    };
    let component = match axis {
        0 => p.x,
        1 => p.y,
        _ => z,
    };
    Face::from_bits(if component < 0.0 { axis + 3 } else { axis })
}

pub fn xyz_to_face_uv<M>(p: &VectorPoint<M>) -> (Face, f64, f64) {
    let face = xyz_to_face(p);
    let (u, v) = face_xyz_to_uv(face, p);
    (face, u, v)
}

/// XYZ to lon/lat in degrees (`x` = lon, `y` = lat). Carries `m` through.
pub fn xyz_to_lon_lat<M: Clone>(p: &VectorPoint<M>) -> VectorPoint<M> {
    let (x, y, z) = (p.x, p.y, p.z.unwrap_or(1.0));
    let lon = y.atan2(x).to_degrees();
    let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
    VectorPoint::from_parts(lon, lat, None, p.m.clone())
}

/// Lon/lat in degrees to a left-handed unit point. Carries `m` through.
pub fn lon_lat_to_xyz<M: Clone>(ll: &VectorPoint<M>) -> VectorPoint<M> {
    let (lon, lat) = (ll.x.to_radians(), ll.y.to_radians());
    VectorPoint::from_parts(
        lat.cos() * lon.cos(),
        lat.cos() * lon.sin(),
        Some(lat.sin()),
        ll.m.clone(),
    )
}

/// Lon/lat in degrees to a right-handed (GL) unit point.
pub fn lon_lat_to_xyz_gl<M: Clone>(ll: &VectorPoint<M>) -> VectorPoint<M> {
    let (lon, lat) = (ll.x.to_radians(), ll.y.to_radians());
    VectorPoint::from_parts(
        lat.cos() * lon.sin(),
        lat.sin(),
        Some(lat.cos() * lon.cos()),
        ll.m.clone(),
    )
}

/// Tile containing face coordinates `(u,v)` at `zoom`.
pub fn tile_xy_from_uv_zoom(u: f64, v: f64, zoom: u8) -> (u32, u32) {
    tile_xy_from_st_zoom(quadratic_uv_to_st(u), quadratic_uv_to_st(v), zoom)
}

/// Tile containing cell-space `(s,t)` at `zoom`.
pub fn tile_xy_from_st_zoom(s: f64, t: f64, zoom: u8) -> (u32, u32) {
    let division_factor = tile_span(zoom) * 0.5;
    (
        (s / division_factor).floor() as u32,
        (t / division_factor).floor() as u32,
    )
}

/// `[min_u, min_v, max_u, max_v]` of tile `(x,y)` at `zoom`.
pub fn bbox_uv(x: u32, y: u32, zoom: u8) -> [f64; 4] {
    let df = tile_span(zoom);
    let (x, y) = (f64::from(x), f64::from(y));
    [
        df * x - 1.0,
        df * y - 1.0,
        df * (x + 1.0) - 1.0,
        df * (y + 1.0) - 1.0,
    ]
}

/// `[min_s, min_t, max_s, max_t]` of tile `(x,y)` at `zoom`.
pub fn bbox_st(x: u32, y: u32, zoom: u8) -> [f64; 4] {
    let df = tile_span(zoom) * 0.5;
    let (x, y) = (f64::from(x), f64::from(y));
    [df * x, df * y, df * (x + 1.0), df * (y + 1.0)]
}

/// Width of one tile in uv units.
#[inline]
fn tile_span(zoom: u8) -> f64 {
    2.0 / 2f64.powi(i32::from(zoom))
}

/// Edge neighbors of the level-`level` cell `(face, i, j)`.
///
/// Order: bottom (−j), right (+i), top (+j), left (−i). Steps that leave the
/// face are re-projected through XYZ onto the adjacent face, so the returned
/// `(i,j)` may be expressed in a different orientation.
pub fn get_neighbors_ij(face: Face, i: u32, j: u32, level: u8) -> [(Face, u32, u32); 4] {
    let level = level.min(K_MAX_LEVEL);
    let shift = K_MAX_LEVEL - level;
    let size = 1i64 << shift;
    let (i, j) = (i64::from(i) << shift, i64::from(j) << shift);
    let limit = i64::from(K_LIMIT_IJ);
    [
        from_ij_wrap(face, i, j - size, level, j - size >= 0),
        from_ij_wrap(face, i + size, j, level, i + size < limit),
        from_ij_wrap(face, i, j + size, level, j + size < limit),
        from_ij_wrap(face, i - size, j, level, i - size >= 0),
    ]
}

fn from_ij_wrap(face: Face, i: i64, j: i64, level: u8, same_face: bool) -> (Face, u32, u32) {
    let shift = K_MAX_LEVEL - level;
    if same_face {
        return (face, (i >> shift) as u32, (j >> shift) as u32);
    }
    let (n_face, n_i, n_j) = wrap_leaf_ij(face, i, j);
    (n_face, n_i >> shift, n_j >> shift)
}

/// Re-project a leaf coordinate just outside `face` onto the face it lands on.
///
/// `(i,j)` are clamped to one leaf beyond the face, mapped through the linear
/// projection and clamped to barely outside `[-1,1]²` so the re-projection
/// cannot drift into the wrong leaf.
pub(crate) fn wrap_leaf_ij(face: Face, i: i64, j: i64) -> (Face, u32, u32) {
    let max_size = i64::from(K_LIMIT_IJ);
    let i = i.clamp(-1, max_size);
    let j = j.clamp(-1, max_size);

    let scale = 1.0 / max_size as f64;
    let limit = 1.0 + f64::EPSILON;
    let u = (scale * (2 * (i - max_size / 2) + 1) as f64).clamp(-limit, limit);
    let v = (scale * (2 * (j - max_size / 2) + 1) as f64).clamp(-limit, limit);

    let (n_face, n_u, n_v) = xyz_to_face_uv(&face_uv_to_xyz::<()>(face, u, v, None));
    tracing::trace!(from = %face, to = %n_face, i, j, "wrapped leaf across face edge");
    (
        n_face,
        st_to_ij(0.5 * (n_u + 1.0)),
        st_to_ij(0.5 * (n_v + 1.0)),
    )
}

/// Right-handed normal of the edge running along +v at `u` on `face`.
/// Not unit length.
pub fn get_u_norm(face: Face, u: f64) -> VectorPoint {
    match face {
        Face::PosX => VectorPoint::new(u, -1.0, 0.0),
        Face::PosY => VectorPoint::new(1.0, u, 0.0),
        Face::PosZ => VectorPoint::new(1.0, 0.0, u),
        Face::NegX => VectorPoint::new(-u, 0.0, 1.0),
        Face::NegY => VectorPoint::new(0.0, -u, 1.0),
        Face::NegZ => VectorPoint::new(0.0, -1.0, -u),
    }
}

/// Right-handed normal of the edge running along +u at `v` on `face`.
/// Not unit length.
pub fn get_v_norm(face: Face, v: f64) -> VectorPoint {
    match face {
        Face::PosX => VectorPoint::new(-v, 0.0, 1.0),
        Face::PosY => VectorPoint::new(0.0, -v, 1.0),
        Face::PosZ => VectorPoint::new(0.0, -1.0, -v),
        Face::NegX => VectorPoint::new(v, -1.0, 0.0),
        Face::NegY => VectorPoint::new(1.0, v, 0.0),
        Face::NegZ => VectorPoint::new(1.0, 0.0, v),
    }
}
