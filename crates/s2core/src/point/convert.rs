use super::VectorPoint;
use crate::cfg::K_MAX_LEVEL;
use crate::coords::{self, Face};
use crate::id::CellId;

/// Lon/lat (degrees) to a left-handed unit point.
pub fn point_from_lon_lat<M: Clone>(ll: &VectorPoint<M>) -> VectorPoint<M> {
    coords::lon_lat_to_xyz(ll)
}

/// Lon/lat (degrees) to a right-handed unit point.
pub fn point_from_lon_lat_gl<M: Clone>(ll: &VectorPoint<M>) -> VectorPoint<M> {
    coords::lon_lat_to_xyz_gl(ll)
}

/// Unit point at face coordinates `(u,v)`.
pub fn point_from_uv<M>(face: Face, u: f64, v: f64, m: Option<M>) -> VectorPoint<M> {
    coords::face_uv_to_xyz(face, u, v, m).normalized()
}

pub fn point_from_st<M>(face: Face, s: f64, t: f64, m: Option<M>) -> VectorPoint<M> {
    point_from_uv(face, coords::st_to_uv(s), coords::st_to_uv(t), m)
}

pub fn point_from_ij(face: Face, i: u32, j: u32) -> VectorPoint {
    point_from_st(face, coords::ij_to_st(i), coords::ij_to_st(j), None)
}

/// Unit point at the center of the leaf addressed by `id`'s decoded `(i,j)`.
pub fn point_from_s2_cell_id(id: CellId) -> VectorPoint {
    id.to_s2_point::<()>(None)
}

pub fn point_from_uv_gl(face: Face, u: f64, v: f64) -> VectorPoint {
    coords::face_uv_to_xyz_gl::<()>(face, u, v, None).normalized()
}

pub fn point_from_st_gl(face: Face, s: f64, t: f64) -> VectorPoint {
    point_from_uv_gl(face, coords::st_to_uv(s), coords::st_to_uv(t))
}

pub fn point_to_uv<M>(p: &VectorPoint<M>) -> (Face, f64, f64) {
    coords::xyz_to_face_uv(p)
}

pub fn point_to_st<M>(p: &VectorPoint<M>) -> (Face, f64, f64) {
    let (face, u, v) = point_to_uv(p);
    (face, coords::uv_to_st(u), coords::uv_to_st(v))
}

/// Face and leaf `(i,j)`; with `level`, coordinates are reduced to that level.
pub fn point_to_ij<M>(p: &VectorPoint<M>, level: Option<u8>) -> (Face, u32, u32) {
    let (face, s, t) = point_to_st(p);
    let (mut i, mut j) = (coords::st_to_ij(s), coords::st_to_ij(t));
    if let Some(level) = level {
        let shift = K_MAX_LEVEL - level.min(K_MAX_LEVEL);
        i >>= shift;
        j >>= shift;
    }
    (face, i, j)
}

pub fn point_to_lon_lat<M: Clone>(p: &VectorPoint<M>) -> VectorPoint<M> {
    coords::xyz_to_lon_lat(p)
}

/// Leaf cell containing `p`.
pub fn point_to_s2_cell_id<M>(p: &VectorPoint<M>) -> CellId {
    CellId::from_s2_point(p, None)
}
