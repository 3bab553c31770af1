//! One-dimensional angles: plain radians and squared chord lengths.

mod angle;
mod chord_angle;

pub use angle::*;
pub use chord_angle::{ChordAngleKind, S1ChordAngle, K_MAX_LENGTH_2};
