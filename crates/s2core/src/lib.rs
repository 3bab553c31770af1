//! S2 spherical geometry core.
//!
//! The sphere is projected onto the six faces of a cube; each face is split
//! recursively into four children along a Hilbert curve, giving every cell a
//! 64-bit identifier whose numeric order follows the curve.
//!
//! Layers (leaf first)
//! - `coords`: lon/lat, XYZ, face (s,t)/(u,v)/(i,j) transforms.
//! - `point`: `VectorPoint` value type and vector algebra.
//! - `s1`, `ll`: one-dimensional angles and lon/lat helpers.
//! - `metrics`: per-level cell size bounds.
//! - `id`: Hilbert-curve cell identifiers.
//! - `cap`: spherical discs, containment and coverage.
//!
//! Conventions
//! - Angles are radians internally; degrees appear only at the lon/lat boundary.
//! - Points are expected to be unit length wherever face or cap math is involved.
//!   This is not enforced.
//! - The numeric core never fails. Typed boundaries (faces, cell ids, tokens)
//!   report [`S2Error`].

pub mod api;
pub mod cap;
pub mod cfg;
pub mod coords;
pub mod error;
pub mod id;
pub mod ll;
pub mod metrics;
pub mod point;
pub mod s1;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cap::S2Cap;
pub use coords::{Face, Projection};
pub use error::S2Error;
pub use id::CellId;
pub use point::VectorPoint;
pub use s1::{S1Angle, S1ChordAngle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cap::S2Cap;
    pub use crate::coords::{Face, Projection};
    pub use crate::id::CellId;
    pub use crate::metrics::{AreaMetric, LengthMetric, K_AVG_EDGE, K_MAX_EDGE, K_MIN_EDGE};
    pub use crate::point::VectorPoint;
    pub use crate::s1::{S1Angle, S1ChordAngle};
    pub use nalgebra::Vector3 as Vec3;
}
