//! `VectorPoint` and its vector algebra.
//!
//! Purpose
//! - One value type for XYZ points, lon/lat pairs (`x` = lon, `y` = lat) and
//!   face-plane points.
//!
//! Why this design
//! - `z` is optional so 2D lon/lat values share the type. Binary algebra reads
//!   a missing `z` as `0` and always produces a `z`.
//! - `m` is an opaque payload, `t` an opaque marker. Neither is interpreted;
//!   pure binary ops drop them, `invert`/`normalized` keep `m`.
//! - Mutation is explicit: only `_mut` methods change their receiver.
//!
//! References
//! - `crate::coords` for the face/lon-lat conversions these points flow through.

mod convert;
#[cfg(test)]
mod tests;

pub use convert::*;

use crate::cfg::{EARTH_RADIUS_EQUATORIAL, EARTH_RADIUS_POLAR};
use crate::coords::{self, Face};
use crate::s1::S1Angle;
use nalgebra::Vector3;
use std::ops;

/// Point in R³ (or R² when `z` is `None`) with an optional payload.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VectorPoint<M = ()> {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub m: Option<M>,
    pub t: Option<f64>,
}

impl VectorPoint<()> {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z: Some(z),
            m: None,
            t: None,
        }
    }

    /// Point without `z`, typically a lon/lat pair in degrees.
    #[inline]
    pub const fn new_2d(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            m: None,
            t: None,
        }
    }
}

impl<M> VectorPoint<M> {
    #[inline]
    pub const fn from_parts(x: f64, y: f64, z: Option<f64>, m: Option<M>) -> Self {
        Self { x, y, z, m, t: None }
    }

    /// Replace the payload, keeping coordinates and `t`.
    pub fn with_m<N>(self, m: Option<N>) -> VectorPoint<N> {
        VectorPoint {
            x: self.x,
            y: self.y,
            z: self.z,
            m,
            t: self.t,
        }
    }

    /// Coordinates only; payload and marker dropped.
    #[inline]
    pub fn xyz(&self) -> VectorPoint {
        VectorPoint::from_parts(self.x, self.y, self.z, None)
    }

    #[inline]
    fn z0(&self) -> f64 {
        self.z.unwrap_or(0.0)
    }

    pub fn add<N>(&self, b: &VectorPoint<N>) -> VectorPoint {
        VectorPoint::new(self.x + b.x, self.y + b.y, self.z0() + b.z0())
    }

    /// In-place add. `z` only changes when both points carry one.
    pub fn add_mut<N>(&mut self, b: &VectorPoint<N>) {
        self.x += b.x;
        self.y += b.y;
        if let (Some(z), Some(bz)) = (self.z.as_mut(), b.z) {
            *z += bz;
        }
    }

    pub fn add_scalar(&self, n: f64) -> VectorPoint {
        VectorPoint::new(self.x + n, self.y + n, self.z0() + n)
    }

    pub fn sub<N>(&self, b: &VectorPoint<N>) -> VectorPoint {
        VectorPoint::new(self.x - b.x, self.y - b.y, self.z0() - b.z0())
    }

    pub fn sub_scalar(&self, n: f64) -> VectorPoint {
        VectorPoint::new(self.x - n, self.y - n, self.z0() - n)
    }

    /// Component-wise product.
    pub fn mul<N>(&self, b: &VectorPoint<N>) -> VectorPoint {
        VectorPoint::new(self.x * b.x, self.y * b.y, self.z0() * b.z0())
    }

    pub fn mul_scalar(&self, n: f64) -> VectorPoint {
        VectorPoint::new(self.x * n, self.y * n, self.z0() * n)
    }

    /// Component-wise quotient. A missing `z` on either side gives `0/0`.
    pub fn div<N>(&self, b: &VectorPoint<N>) -> VectorPoint {
        VectorPoint::new(self.x / b.x, self.y / b.y, self.z0() / b.z0())
    }

    pub fn div_scalar(&self, n: f64) -> VectorPoint {
        VectorPoint::new(self.x / n, self.y / n, self.z0() / n)
    }

    pub fn div_scalar_mut(&mut self, n: f64) {
        self.x /= n;
        self.y /= n;
        if let Some(z) = self.z.as_mut() {
            *z /= n;
        }
    }

    /// Scale to unit length in place. The zero vector becomes NaN.
    pub fn normalize_mut(&mut self) -> &mut Self {
        let len = self.length();
        self.div_scalar_mut(len);
        self
    }

    /// Unit-length copy, payload kept.
    pub fn normalized(mut self) -> Self {
        self.normalize_mut();
        self
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.norm2().sqrt()
    }

    #[inline]
    pub fn norm2(&self) -> f64 {
        self.dot(self)
    }

    /// Negated coordinates; keeps `m`.
    pub fn invert(&self) -> VectorPoint<M>
    where
        M: Clone,
    {
        VectorPoint::from_parts(-self.x, -self.y, Some(-self.z0()), self.m.clone())
    }

    #[inline]
    pub fn dot<N>(&self, b: &VectorPoint<N>) -> f64 {
        self.x * b.x + self.y * b.y + self.z0() * b.z0()
    }

    pub fn cross<N>(&self, b: &VectorPoint<N>) -> VectorPoint {
        let (az, bz) = (self.z0(), b.z0());
        VectorPoint::new(
            self.y * bz - az * b.y,
            az * b.x - self.x * bz,
            self.x * b.y - self.y * b.x,
        )
    }

    /// Straight-line distance. Loses precision for nearly coincident points.
    pub fn distance<N>(&self, b: &VectorPoint<N>) -> f64 {
        b.sub(self).length()
    }

    /// Angle between the two directions, in `[0, π]`.
    pub fn angle<N>(&self, b: &VectorPoint<N>) -> S1Angle {
        let (a, b) = (self.to_vector3(), b.to_vector3());
        a.cross(&b).norm().atan2(a.dot(&b))
    }

    /// Cube face this point projects onto.
    #[inline]
    pub fn face(&self) -> Face {
        coords::xyz_to_face(self)
    }

    /// `nalgebra` view with a missing `z` read as `0`.
    #[inline]
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z0())
    }
}

/// Scale two unit points to an ellipsoidal planet in place and return their
/// straight-line distance in the radius units.
///
/// Both inputs are left scaled: `x`,`y` by `equatorial`, `z` (if any) by `polar`.
pub fn distance_planet_mut<M, N>(
    a: &mut VectorPoint<M>,
    b: &mut VectorPoint<N>,
    equatorial: f64,
    polar: f64,
) -> f64 {
    a.x *= equatorial;
    b.x *= equatorial;
    a.y *= equatorial;
    b.y *= equatorial;
    if let Some(z) = a.z.as_mut() {
        *z *= polar;
    }
    if let Some(z) = b.z.as_mut() {
        *z *= polar;
    }
    a.distance(&*b)
}

/// [`distance_planet_mut`] with Earth's WGS84 radii.
pub fn distance_earth_mut<M, N>(a: &mut VectorPoint<M>, b: &mut VectorPoint<N>) -> f64 {
    distance_planet_mut(a, b, EARTH_RADIUS_EQUATORIAL, EARTH_RADIUS_POLAR)
}

impl From<Vector3<f64>> for VectorPoint {
    fn from(v: Vector3<f64>) -> Self {
        VectorPoint::new(v.x, v.y, v.z)
    }
}

impl<M> From<&VectorPoint<M>> for Vector3<f64> {
    fn from(p: &VectorPoint<M>) -> Self {
        p.to_vector3()
    }
}

impl<M, N> ops::Add<VectorPoint<N>> for VectorPoint<M> {
    type Output = VectorPoint;
    fn add(self, rhs: VectorPoint<N>) -> VectorPoint {
        VectorPoint::add(&self, &rhs)
    }
}

impl<M, N> ops::Sub<VectorPoint<N>> for VectorPoint<M> {
    type Output = VectorPoint;
    fn sub(self, rhs: VectorPoint<N>) -> VectorPoint {
        VectorPoint::sub(&self, &rhs)
    }
}

impl<M: Clone> ops::Neg for VectorPoint<M> {
    type Output = VectorPoint<M>;
    fn neg(self) -> VectorPoint<M> {
        self.invert()
    }
}

impl<M> ops::Mul<f64> for VectorPoint<M> {
    type Output = VectorPoint;
    fn mul(self, rhs: f64) -> VectorPoint {
        self.mul_scalar(rhs)
    }
}

impl<M> ops::Div<f64> for VectorPoint<M> {
    type Output = VectorPoint;
    fn div(self, rhs: f64) -> VectorPoint {
        self.div_scalar(rhs)
    }
}
