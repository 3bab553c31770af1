use super::CellId;
use crate::cfg::{K_MAX_LEVEL, K_MAX_SIZE};
use crate::coords::{self, Face};

impl CellId {
    /// Edge neighbors at the same level: bottom, right, top, left.
    ///
    /// Neighbors across a face edge come from the adjacent face.
    pub fn neighbors(self) -> [CellId; 4] {
        let level = self.level();
        let size = i64::from(CellId::size_ij(level));
        let (face, i, j, _) = self.to_ij(None);
        edge_neighbors(face, i64::from(i), i64::from(j), size, level)
    }

    /// Edge neighbors of the level-`level` cell `(i,j)`, in the same order as
    /// [`CellId::neighbors`].
    ///
    /// `(i,j)` are coordinates at `level` (as returned by
    /// [`CellId::to_face_ij`]), not leaf coordinates; they are shifted up to
    /// leaf space here.
    pub fn neighbors_ij(face: Face, i: u32, j: u32, level: u8) -> [CellId; 4] {
        let level = level.min(K_MAX_LEVEL);
        let shift = K_MAX_LEVEL - level;
        let size = 1i64 << shift;
        edge_neighbors(face, i64::from(i) << shift, i64::from(j) << shift, size, level)
    }

    /// Leaf at `(i,j)`; coordinates off the face are wrapped onto the
    /// adjacent face unless `same_face` says they are in range.
    pub fn from_ij_same(face: Face, i: i64, j: i64, same_face: bool) -> CellId {
        if same_face {
            CellId::from_ij(face, i as u32, j as u32, None)
        } else {
            CellId::from_ij_wrap(face, i, j)
        }
    }

    /// Leaf at `(i,j)` where `(i,j)` may lie up to one leaf beyond the face.
    pub fn from_ij_wrap(face: Face, i: i64, j: i64) -> CellId {
        let (face, i, j) = coords::wrap_leaf_ij(face, i, j);
        CellId::from_ij(face, i, j, None)
    }

    /// Cells sharing the vertex of this cell's `level` ancestor closest to
    /// this cell, the ancestor itself first.
    ///
    /// Three cells come back when the vertex is a cube corner, four
    /// otherwise. `level` defaults to the cell's own level and must be below
    /// 30 for the quadrant test to be meaningful.
    pub fn vertex_neighbors(self, level: Option<u8>) -> Vec<CellId> {
        let level = level.unwrap_or_else(|| self.level()).min(K_MAX_LEVEL);
        let (face, i, j, _) = self.to_ij(None);
        let (i, j) = (i64::from(i), i64::from(j));
        let limit = i64::from(K_MAX_SIZE);

        // The next bit of i and j tells which quadrant of the ancestor we are in.
        let halfsize = 1i64 << (K_MAX_LEVEL - level).saturating_sub(1);
        let size = halfsize << 1;
        let (ioffset, isame) = if i & halfsize != 0 {
            (size, i + size < limit)
        } else {
            (-size, i - size >= 0)
        };
        let (joffset, jsame) = if j & halfsize != 0 {
            (size, j + size < limit)
        } else {
            (-size, j - size >= 0)
        };

        let mut out = Vec::with_capacity(4);
        out.push(self.parent_at(level));
        out.push(CellId::from_ij_same(face, i + ioffset, j, isame).parent_at(level));
        out.push(CellId::from_ij_same(face, i, j + joffset, jsame).parent_at(level));
        if isame || jsame {
            out.push(
                CellId::from_ij_same(face, i + ioffset, j + joffset, isame && jsame)
                    .parent_at(level),
            );
        }
        out
    }
}

fn edge_neighbors(face: Face, i: i64, j: i64, size: i64, level: u8) -> [CellId; 4] {
    let limit = i64::from(K_MAX_SIZE);
    [
        CellId::from_ij_same(face, i, j - size, j - size >= 0),
        CellId::from_ij_same(face, i + size, j, i + size < limit),
        CellId::from_ij_same(face, i, j + size, j + size < limit),
        CellId::from_ij_same(face, i - size, j, i - size >= 0),
    ]
    .map(|id| id.parent_at(level))
}
