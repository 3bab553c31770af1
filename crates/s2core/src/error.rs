//! Errors raised at typed boundaries (face indices, cell ids, tokens, levels).

use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum S2Error {
    /// Face index outside `0..6`.
    InvalidFace(u8),
    /// Subdivision level above 30.
    InvalidLevel(u8),
    /// Bit pattern that is not a cell: bad face bits or misplaced sentinel.
    InvalidCellId(u64),
    /// Token that is not a hex-encoded cell id.
    InvalidToken(String),
}

impl fmt::Display for S2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            S2Error::InvalidFace(face) => write!(f, "face {face} is out of range (expected 0..6)"),
            S2Error::InvalidLevel(level) => {
                write!(f, "level {level} is out of range (expected 0..=30)")
            }
            S2Error::InvalidCellId(id) => write!(f, "{id} is not a valid cell id"),
            S2Error::InvalidToken(token) => write!(f, "{token:?} is not a valid cell token"),
        }
    }
}

impl std::error::Error for S2Error {}

/// Validate a subdivision level.
#[inline]
pub fn check_level(level: u8) -> Result<u8, S2Error> {
    if level > crate::cfg::K_MAX_LEVEL {
        Err(S2Error::InvalidLevel(level))
    } else {
        Ok(level)
    }
}
