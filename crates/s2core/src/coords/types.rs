use crate::error::S2Error;
use std::fmt;

/// One of the six cube faces. Faces 0..3 are the positive axes, 3..6 the
/// negative ones, in `x, y, z` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Face {
    PosX = 0,
    PosY = 1,
    PosZ = 2,
    NegX = 3,
    NegY = 4,
    NegZ = 5,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::PosX,
        Face::PosY,
        Face::PosZ,
        Face::NegX,
        Face::NegY,
        Face::NegZ,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Face from the top bits of a cell id. Callers guarantee `bits < 6`;
    /// larger values collapse onto `NegZ`.
    #[inline]
    pub(crate) const fn from_bits(bits: u8) -> Face {
        match bits {
            0 => Face::PosX,
            1 => Face::PosY,
            2 => Face::PosZ,
            3 => Face::NegX,
            4 => Face::NegY,
            _ => Face::NegZ,
        }
    }
}

impl TryFrom<u8> for Face {
    type Error = S2Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (value as usize) < crate::cfg::K_NUM_FACES {
            Ok(Face::from_bits(value))
        } else {
            Err(S2Error::InvalidFace(value))
        }
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.index()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Curve mapping cell-space `s,t ∈ [0,1]` to face coordinates `u,v ∈ [-1,1]`.
///
/// `Quadratic` is the default used throughout the cell-id system; the other
/// two exist for callers that need them explicitly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Projection {
    Linear,
    Tan,
    #[default]
    Quadratic,
}

impl Projection {
    #[inline]
    pub fn st_to_uv(self, s: f64) -> f64 {
        match self {
            Projection::Linear => super::linear_st_to_uv(s),
            Projection::Tan => super::tan_st_to_uv(s),
            Projection::Quadratic => super::quadratic_st_to_uv(s),
        }
    }

    #[inline]
    pub fn uv_to_st(self, u: f64) -> f64 {
        match self {
            Projection::Linear => super::linear_uv_to_st(u),
            Projection::Tan => super::tan_uv_to_st(u),
            Projection::Quadratic => super::quadratic_uv_to_st(u),
        }
    }
}
