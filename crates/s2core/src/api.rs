//! Curated API for callers that want one import path.
//!
//! Grouped by layer. Names are re-exported unchanged, except where a short
//! alias reads better at call sites.

// Coordinates
pub use crate::coords::{
    face_uv_to_xyz, face_uv_to_xyz_gl, face_xyz_to_uv, lon_lat_to_xyz, lon_lat_to_xyz_gl,
    st_to_ij, st_to_uv, uv_to_st, xyz_to_face, xyz_to_face_uv, xyz_to_lon_lat, Face, Projection,
};
// Points
pub use crate::point::{
    point_from_lon_lat, point_from_s2_cell_id, point_from_st, point_from_uv, point_to_lon_lat,
    point_to_s2_cell_id, point_to_st, point_to_uv, VectorPoint,
};
// Cells
pub use crate::id::{compare_ids, CellId, Vertices as CellVertices};
pub use crate::metrics::{
    AreaMetric, LengthMetric, Metric, K_AVG_AREA, K_AVG_EDGE, K_MAX_AREA, K_MAX_EDGE, K_MIN_AREA,
    K_MIN_EDGE,
};
// Angles and caps
pub use crate::cap::S2Cap;
pub use crate::ll::{ll_get_bearing, ll_get_distance, ll_normalize_mut};
pub use crate::s1::{angle_from_degrees, angle_to_degrees, S1Angle, S1ChordAngle};
// Constants and errors
pub use crate::cfg::{EARTH_RADIUS, K_MAX_LEVEL};
pub use crate::error::{check_level, S2Error};
