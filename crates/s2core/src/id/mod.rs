//! 64-bit Hilbert-curve cell identifiers.
//!
//! Purpose
//! - Address every cell of the six-face quadtree with one `u64` whose integer
//!   order follows the Hilbert curve, so ranges, containment and iteration are
//!   plain integer arithmetic.
//!
//! Layout
//! - Bits 61..64: face (0..6).
//! - Then two bits per level (child position along the curve), followed by a
//!   single sentinel `1` bit. The sentinel's position encodes the level: a
//!   leaf (level 30) has it at bit 0, a face cell (level 0) at bit 60.
//!
//! Why this design
//! - `CellId` is a transparent newtype. All bit operations use wrapping
//!   arithmetic where the id may exceed `2^63`; comparisons are unsigned.
//! - Hilbert tables are built at compile time (`lookup`), so nothing here
//!   allocates or locks.
//!
//! References
//! - Hilbert curve orientation tables: `lookup.rs`.

mod convert;
mod geometry;
mod lookup;
mod neighbors;

pub use geometry::Vertices;

use crate::cfg::{K_MAX_LEVEL, K_NUM_FACES, K_POS_BITS, K_WRAP_OFFSET};
use crate::coords::Face;
use crate::error::S2Error;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Hilbert-ordered cell identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub u64);

const POS_MASK: u64 = (1 << K_POS_BITS) - 1;
const FACE_CHILD_MASK: u64 = (1 << 60) - 1;
/// Sentinel may only sit on an even bit.
const VALID_LSB_MASK: u64 = 0x1555_5555_5555_5555;

impl CellId {
    /// Invalid id `0`; the token form is `"X"`.
    pub const NONE: CellId = CellId(0);

    /// Level-0 cell covering `face`.
    #[inline]
    pub const fn from_face(face: Face) -> CellId {
        CellId(((face as u64) << K_POS_BITS) + (1 << 60))
    }

    /// Cell at `level` containing Hilbert position `pos` on `face`.
    pub fn from_face_pos_level(face: Face, pos: u64, level: u8) -> CellId {
        CellId(((face as u64) << K_POS_BITS).wrapping_add(pos | 1)).parent_at(level)
    }

    /// `distance`-th cell at `level` along the whole curve.
    pub fn from_distance(distance: u64, level: u8) -> CellId {
        let shift = 2 * u32::from(K_MAX_LEVEL - level.min(K_MAX_LEVEL));
        CellId((distance << (shift + 1)).wrapping_add(1 << shift))
    }

    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn face(self) -> Face {
        Face::from_bits((self.0 >> K_POS_BITS) as u8)
    }

    /// Position along the face's curve, sentinel included.
    #[inline]
    pub const fn pos(self) -> u64 {
        self.0 & POS_MASK
    }

    /// Level in `0..=30`; `NONE` reads as level 0.
    #[inline]
    pub const fn level(self) -> u8 {
        let pairs = self.0.trailing_zeros() / 2;
        K_MAX_LEVEL - if pairs > 30 { 30 } else { pairs as u8 }
    }

    /// Lowest set bit (the sentinel).
    #[inline]
    pub const fn lsb(self) -> u64 {
        self.0 & self.0.wrapping_neg()
    }

    #[inline]
    pub const fn is_face(self) -> bool {
        self.0 & FACE_CHILD_MASK == 0
    }

    #[inline]
    pub const fn is_leaf(self) -> bool {
        self.0 & 1 == 1
    }

    /// Face in range and sentinel on an even bit.
    pub const fn is_valid(self) -> bool {
        ((self.0 >> K_POS_BITS) as usize) < K_NUM_FACES && self.lsb() & VALID_LSB_MASK != 0
    }

    /// Number of same-level cells preceding this one on the curve.
    pub fn distance(self, level: Option<u8>) -> u64 {
        let level = level.unwrap_or_else(|| self.level()).min(K_MAX_LEVEL);
        self.0 >> (2 * u32::from(K_MAX_LEVEL - level) + 1)
    }

    /// Child `pos` (`0..4`) in Hilbert order.
    pub fn child(self, pos: u8) -> CellId {
        let new_lsb = self.lsb() >> 2;
        let step = (2 * i64::from(pos & 3) - 3) as u64;
        CellId(self.0.wrapping_add(step.wrapping_mul(new_lsb)))
    }

    /// All four children in Hilbert order.
    pub fn children(self) -> [CellId; 4] {
        [self.child(0), self.child(1), self.child(2), self.child(3)]
    }

    /// Children ordered for `orientation`: `0` keeps Hilbert order, anything
    /// else walks the other way round (`c0, c3, c2, c1`).
    pub fn children_with_orientation(self, orientation: u8) -> [CellId; 4] {
        let [c0, c1, c2, c3] = self.children();
        if orientation == 0 {
            [c0, c1, c2, c3]
        } else {
            [c0, c3, c2, c1]
        }
    }

    /// Children of the level-`level` cell `(i,j)`: bottom-left, bottom-right,
    /// top-left, top-right.
    pub fn children_ij(face: Face, level: u8, i: u32, j: u32) -> [CellId; 4] {
        let (i, j) = (i << 1, j << 1);
        let level = Some(level + 1);
        [
            CellId::from_ij(face, i, j, level),
            CellId::from_ij(face, i + 1, j, level),
            CellId::from_ij(face, i, j + 1, level),
            CellId::from_ij(face, i + 1, j + 1, level),
        ]
    }

    /// Which child of its `level` ancestor lies on the path to this cell.
    pub fn child_position(self, level: u8) -> u8 {
        let shift = 2 * u32::from(K_MAX_LEVEL - level.min(K_MAX_LEVEL)) + 1;
        ((self.0 >> shift) & 3) as u8
    }

    /// Immediate parent. Face cells have no parent; the result is then not
    /// a valid id.
    pub fn parent(self) -> CellId {
        Self::with_lsb(self.0, self.lsb() << 2)
    }

    /// Ancestor (or self) at `level`.
    pub fn parent_at(self, level: u8) -> CellId {
        let new_lsb = 1u64 << (2 * u32::from(K_MAX_LEVEL - level.min(K_MAX_LEVEL)));
        Self::with_lsb(self.0, new_lsb)
    }

    #[inline]
    fn with_lsb(id: u64, new_lsb: u64) -> CellId {
        CellId((id & new_lsb.wrapping_neg()) | new_lsb)
    }

    /// Smallest and largest leaf ids inside this cell.
    pub fn range(self) -> (CellId, CellId) {
        let half = self.lsb().wrapping_sub(1);
        (CellId(self.0.wrapping_sub(half)), CellId(self.0.wrapping_add(half)))
    }

    pub fn contains(self, other: CellId) -> bool {
        let (min, max) = self.range();
        other >= min && other <= max
    }

    pub fn intersects(self, other: CellId) -> bool {
        let (a_min, a_max) = self.range();
        let (b_min, b_max) = other.range();
        b_min <= a_max && b_max >= a_min
    }

    /// Next cell at the same level, wrapping from face 5 back to face 0.
    pub fn next(self) -> CellId {
        let n = self.0.wrapping_add(self.lsb() << 1);
        if n < K_WRAP_OFFSET {
            CellId(n)
        } else {
            CellId(n.wrapping_sub(K_WRAP_OFFSET))
        }
    }

    /// Previous cell at the same level, wrapping from face 0 back to face 5.
    pub fn prev(self) -> CellId {
        let p = self.0.wrapping_sub(self.lsb() << 1);
        if p < K_WRAP_OFFSET {
            CellId(p)
        } else {
            CellId(p.wrapping_add(K_WRAP_OFFSET))
        }
    }

    /// Hex token with trailing zeros stripped; `"X"` for `NONE`.
    pub fn to_token(self) -> String {
        if self.0 == 0 {
            return "X".to_string();
        }
        let hex = format!("{:016x}", self.0);
        hex.trim_end_matches('0').to_string()
    }

    /// Inverse of [`CellId::to_token`]. Does not check validity.
    pub fn from_token(token: &str) -> Result<CellId, S2Error> {
        if token == "X" || token == "x" {
            return Ok(CellId::NONE);
        }
        if token.is_empty() || token.len() > 16 || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(S2Error::InvalidToken(token.to_string()));
        }
        let value = u64::from_str_radix(token, 16)
            .map_err(|_| S2Error::InvalidToken(token.to_string()))?;
        Ok(CellId(value << (4 * (16 - token.len()))))
    }
}

/// Three-way unsigned comparison.
pub fn compare_ids(a: CellId, b: CellId) -> Ordering {
    a.0.cmp(&b.0)
}

impl TryFrom<u64> for CellId {
    type Error = S2Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let id = CellId(value);
        if id.is_valid() {
            Ok(id)
        } else {
            Err(S2Error::InvalidCellId(value))
        }
    }
}

impl From<CellId> for u64 {
    fn from(id: CellId) -> u64 {
        id.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Decimal first, then token form.
impl FromStr for CellId {
    type Err = S2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<u64>() {
            Ok(value) => Ok(CellId(value)),
            Err(_) => CellId::from_token(s),
        }
    }
}
