//! Fixed constants shared across modules.
//!
//! Policy
//! - Everything here is a compile-time constant. Run-time choices (projection
//!   curve, target level) are passed as typed arguments instead.

/// Deepest subdivision level; leaf cells live here.
pub const K_MAX_LEVEL: u8 = 30;
/// Number of cube faces.
pub const K_NUM_FACES: usize = 6;
/// Discrete (i,j) coordinates span `0..K_LIMIT_IJ` on each face.
pub const K_LIMIT_IJ: u32 = 1 << K_MAX_LEVEL;
/// Leaf cells along one face edge.
pub const K_MAX_SIZE: u32 = 1 << K_MAX_LEVEL;
/// Bits left for the Hilbert position once the face is stored.
pub(crate) const K_POS_BITS: u32 = 2 * K_MAX_LEVEL as u32 + 1;
/// Distance from the end of face 5 back to the start of face 0.
pub const K_WRAP_OFFSET: u64 = (K_NUM_FACES as u64) << K_POS_BITS;
/// Mean Earth radius in meters.
pub const EARTH_RADIUS: f64 = 6_371_008.8;
/// Equatorial Earth radius in meters (WGS84).
pub const EARTH_RADIUS_EQUATORIAL: f64 = 6_378_137.0;
/// Polar Earth radius in meters.
pub const EARTH_RADIUS_POLAR: f64 = 6_356_752.3;
