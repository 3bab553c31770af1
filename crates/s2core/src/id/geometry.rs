use super::CellId;
use crate::coords::{self, Face};
use crate::point::VectorPoint;

/// Four points (or normals), counter-clockwise in `(u,v)`.
pub type Vertices = [VectorPoint; 4];

impl CellId {
    /// `[u_low, u_high, v_low, v_high]`.
    pub fn get_bound_uv(self) -> [f64; 4] {
        let (_, i, j, _) = self.to_ij(None);
        let size = self.get_size_ij();
        let i_low = i & size.wrapping_neg();
        let j_low = j & size.wrapping_neg();
        [i_low, i_low + size, j_low, j_low + size]
            .map(|n| coords::st_to_uv(coords::ij_to_st(n)))
    }

    /// Corners on the cube surface (not unit length): lower left, lower
    /// right, upper right, upper left.
    pub fn get_vertices_raw(self) -> Vertices {
        let face = self.face();
        let [u_low, u_high, v_low, v_high] = self.get_bound_uv();
        [
            corner(face, u_low, v_low),
            corner(face, u_high, v_low),
            corner(face, u_high, v_high),
            corner(face, u_low, v_high),
        ]
    }

    /// Unit-length corners.
    pub fn get_vertices(self) -> Vertices {
        self.get_vertices_raw().map(|v| v.normalized())
    }

    /// Inward normals of the edge great circles; edge `k` runs from vertex
    /// `k` to vertex `k+1 (mod 4)`. Not unit length.
    pub fn get_edges_raw(self) -> Vertices {
        let face = self.face();
        let [u_low, u_high, v_low, v_high] = self.get_bound_uv();
        [
            coords::get_v_norm(face, v_low),
            coords::get_u_norm(face, u_high),
            coords::get_v_norm(face, v_high).invert(),
            coords::get_u_norm(face, u_low).invert(),
        ]
    }

    /// Unit-length inward edge normals.
    pub fn get_edges(self) -> Vertices {
        self.get_edges_raw().map(|e| e.normalized())
    }
}

#[inline]
fn corner(face: Face, u: f64, v: f64) -> VectorPoint {
    coords::face_uv_to_xyz::<()>(face, u, v, None)
}
