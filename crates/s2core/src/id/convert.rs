use super::lookup::{LOOKUP, LOOKUP_BITS, SWAP_MASK};
use super::CellId;
use crate::cfg::{K_MAX_LEVEL, K_POS_BITS};
use crate::coords::{self, Face, Projection};
use crate::point::{self, VectorPoint};

/// Sentinels at these bit positions flip the reported orientation.
const ORIENTATION_FLIP_LSB: u64 = 0x1111_1111_1111_1100;

const LOOKUP_MASK: u64 = (1 << LOOKUP_BITS) - 1;

impl CellId {
    /// Leaf cell containing a lon/lat in degrees.
    pub fn from_lon_lat<M: Clone>(ll: &VectorPoint<M>) -> CellId {
        CellId::from_s2_point(&coords::lon_lat_to_xyz(ll), None)
    }

    pub fn from_s2_point<M>(p: &VectorPoint<M>, level: Option<u8>) -> CellId {
        let (face, i, j) = point::point_to_ij(p, None);
        let id = CellId::from_ij(face, i, j, None);
        match level {
            Some(level) => id.parent_at(level),
            None => id,
        }
    }

    pub fn from_st(face: Face, s: f64, t: f64, level: Option<u8>) -> CellId {
        let id = CellId::from_ij(face, coords::st_to_ij(s), coords::st_to_ij(t), None);
        match level {
            Some(level) => id.parent_at(level),
            None => id,
        }
    }

    /// Cell at face coordinates `(u,v)` using the quadratic projection.
    pub fn from_uv(face: Face, u: f64, v: f64, level: Option<u8>) -> CellId {
        CellId::from_uv_with(Projection::Quadratic, face, u, v, level)
    }

    pub fn from_uv_with(
        projection: Projection,
        face: Face,
        u: f64,
        v: f64,
        level: Option<u8>,
    ) -> CellId {
        CellId::from_st(face, projection.uv_to_st(u), projection.uv_to_st(v), level)
    }

    /// Cell from discrete coordinates.
    ///
    /// Without `level`, `(i,j)` are leaf coordinates and a leaf is returned.
    /// With `level`, `(i,j)` are coordinates at that level.
    pub fn from_ij(face: Face, i: u32, j: u32, level: Option<u8>) -> CellId {
        let (i, j) = match level {
            Some(level) => {
                let shift = u32::from(K_MAX_LEVEL - level.min(K_MAX_LEVEL));
                (u64::from(i) << shift, u64::from(j) << shift)
            }
            None => (u64::from(i), u64::from(j)),
        };
        // Each round maps 4 bits of i and j (key `iiiijjjjoo`) to 8 bits of
        // position (value `ppppppppoo`). Odd faces start in swapped orientation.
        let mut n = u64::from(face.index()) << (K_POS_BITS - 1);
        let mut bits = u64::from(face.index() & 1);
        for k in (0..8u32).rev() {
            bits += ((i >> (LOOKUP_BITS * k)) & LOOKUP_MASK) << (LOOKUP_BITS + 2);
            bits += ((j >> (LOOKUP_BITS * k)) & LOOKUP_MASK) << 2;
            bits = u64::from(LOOKUP.pos[bits as usize]);
            n |= (bits >> 2) << (8 * k);
            bits &= 3;
        }
        let id = CellId(n * 2 + 1);
        match level {
            Some(level) => id.parent_at(level),
            None => id,
        }
    }

    /// Face, `(i,j)` and Hilbert orientation.
    ///
    /// `(i,j)` are leaf coordinates of the cell's center-most leaf, or are
    /// reduced to `level` when given.
    pub fn to_ij(self, level: Option<u8>) -> (Face, u32, u32, u8) {
        let face = self.face();
        let (mut i, mut j) = (0u32, 0u32);
        let mut bits = u64::from(face.index() & 1);
        for k in (0..8u32).rev() {
            // The first round only takes the 2 levels below the face bits.
            let nbits = if k == 7 { 2 } else { 4 };
            bits += ((self.0 >> (8 * k + 1)) & ((1 << (2 * nbits)) - 1)) << 2;
            bits = u64::from(LOOKUP.ij[bits as usize]);
            i += ((bits >> (LOOKUP_BITS + 2)) as u32) << (LOOKUP_BITS * k);
            j += (((bits >> 2) & LOOKUP_MASK) as u32) << (LOOKUP_BITS * k);
            bits &= 3;
        }
        if self.lsb() & ORIENTATION_FLIP_LSB != 0 {
            bits ^= u64::from(SWAP_MASK);
        }
        if let Some(level) = level {
            let shift = u32::from(K_MAX_LEVEL - level.min(K_MAX_LEVEL));
            i >>= shift;
            j >>= shift;
        }
        (face, i, j, bits as u8)
    }

    /// `(face, level, i, j)` with `(i,j)` at the cell's own level.
    pub fn to_face_ij(self) -> (Face, u8, u32, u32) {
        let level = self.level();
        let (face, i, j, _) = self.to_ij(Some(level));
        (face, level, i, j)
    }

    pub fn to_st(self) -> (Face, f64, f64) {
        let (face, i, j, _) = self.to_ij(None);
        (face, coords::ij_to_st(i), coords::ij_to_st(j))
    }

    pub fn to_uv(self) -> (Face, f64, f64) {
        let (face, s, t) = self.to_st();
        (face, coords::st_to_uv(s), coords::st_to_uv(t))
    }

    /// Unit point at the leaf returned by [`CellId::to_ij`].
    pub fn to_s2_point<M>(self, m: Option<M>) -> VectorPoint<M> {
        let (face, u, v) = self.to_uv();
        point::point_from_uv(face, u, v, m)
    }

    pub fn to_lon_lat<M: Clone>(self, m: Option<M>) -> VectorPoint<M> {
        coords::xyz_to_lon_lat(&self.to_s2_point(m))
    }

    /// Whether the leaf containing `p` lies inside this cell.
    pub fn contains_s2_point<M>(self, p: &VectorPoint<M>) -> bool {
        self.contains(CellId::from_s2_point(p, None))
    }

    /// Exact `(s,t)` center of the cell.
    pub fn center_st(self) -> (Face, f64, f64) {
        let (face, i, j, _) = self.to_ij(None);
        // Leaves sit half a leaf off their corner; other cells are centered
        // on a leaf corner, which one depends on the curve's parity here.
        let delta = if self.is_leaf() {
            1
        } else if (u64::from(i) ^ (self.0 >> 2)) & 1 != 0 {
            2
        } else {
            0
        };
        let si = 2 * i + delta;
        let ti = 2 * j + delta;
        (face, coords::siti_to_st(si), coords::siti_to_st(ti))
    }

    /// `[s_min, t_min, s_max, t_max]` of the cell (or of a cell of `level`
    /// sharing its center).
    pub fn bounds_st(self, level: Option<u8>) -> [f64; 4] {
        let level = level.unwrap_or_else(|| self.level());
        let (_, s, t) = self.center_st();
        let half = CellId::size_st(level) * 0.5;
        [s - half, t - half, s + half, t + half]
    }

    /// Edge length of a level-`level` cell in `(s,t)`.
    pub fn size_st(level: u8) -> f64 {
        coords::ij_to_st(CellId::size_ij(level))
    }

    /// Edge length of a level-`level` cell in `(i,j)`.
    pub fn size_ij(level: u8) -> u32 {
        1 << (K_MAX_LEVEL - level.min(K_MAX_LEVEL))
    }

    pub fn get_size_ij(self) -> u32 {
        CellId::size_ij(self.level())
    }
}
