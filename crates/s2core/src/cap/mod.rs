//! Spherical caps: the disc of points within a chord distance of a center.
//!
//! Purpose
//! - Cheap containment and intersection tests against points and cells, and
//!   a coarse cell covering of a cap.
//!
//! Why this design
//! - The radius is an `S1ChordAngle`, so point containment is one squared
//!   distance and a comparison, with no trigonometry.
//! - `S2Cap<T>` carries an opaque `data: T` through every transform; nothing
//!   here inspects it.
//! - Cell containment is conservative: it may answer `false` for a cell that
//!   only touches the cap boundary from inside.

mod covering;

use crate::id::{CellId, Vertices};
use crate::point::VectorPoint;
use crate::s1::{S1Angle, S1ChordAngle, K_MAX_LENGTH_2};
use std::f64::consts::PI;

/// Disc on the unit sphere with attached payload.
///
/// `radius < 0` means empty, `radius == 4` means full. Canonical empty and
/// full caps are centered at `(1,0,0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct S2Cap<T> {
    pub center: VectorPoint,
    pub radius: S1ChordAngle,
    pub data: T,
}

fn origin() -> VectorPoint {
    VectorPoint::new(1.0, 0.0, 0.0)
}

impl<T> S2Cap<T> {
    pub fn new(center: VectorPoint, radius: S1ChordAngle, data: T) -> Self {
        Self {
            center,
            radius,
            data,
        }
    }

    /// Cap containing no points.
    pub fn empty(data: T) -> Self {
        Self::new(origin(), S1ChordAngle::NEGATIVE, data)
    }

    /// Cap containing every point.
    pub fn full(data: T) -> Self {
        Self::new(origin(), S1ChordAngle::STRAIGHT, data)
    }

    /// Cap of angular radius `radius` (radians) around a unit `center`.
    pub fn from_s1_angle(center: VectorPoint, radius: S1Angle, data: T) -> Self {
        Self::new(center, S1ChordAngle::from_angle(radius), data)
    }

    pub fn from_s1_chord_angle(center: VectorPoint, radius: S1ChordAngle, data: T) -> Self {
        Self::new(center, radius, data)
    }

    /// Single-point cap.
    pub fn from_s2_point(center: VectorPoint, data: T) -> Self {
        Self::new(center, S1ChordAngle::ZERO, data)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.radius.length2() < 0.0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.radius.length2() == K_MAX_LENGTH_2
    }

    /// Distance from the center to the cap's base plane, in `[0, 2]` for
    /// non-empty caps.
    pub fn height(&self) -> f64 {
        0.5 * self.radius.length2()
    }

    /// Surface area in steradians; `0` for empty caps.
    pub fn area(&self) -> f64 {
        2.0 * PI * self.height().max(0.0)
    }

    /// Angular radius; `-1` for empty caps.
    pub fn radius(&self) -> S1Angle {
        self.radius.to_angle()
    }

    pub fn contains_s2_point<M>(&self, p: &VectorPoint<M>) -> bool {
        S1ChordAngle::from_s2_points(&self.center, p) <= self.radius
    }

    /// Cap covering everything outside this one (boundary shared).
    pub fn complement(&self) -> S2Cap<T>
    where
        T: Clone,
    {
        let shape = self.complement_shape();
        S2Cap::new(shape.center, shape.radius, self.data.clone())
    }

    fn complement_shape(&self) -> S2Cap<()> {
        if self.is_full() {
            S2Cap::empty(())
        } else if self.is_empty() {
            S2Cap::full(())
        } else {
            S2Cap::new(
                self.center.invert(),
                S1ChordAngle::from_length2(K_MAX_LENGTH_2 - self.radius.length2()),
                (),
            )
        }
    }

    /// How many of the cell's four vertices lie in the cap.
    pub fn contains_s2_cell_vertex_count(&self, cell: CellId) -> usize {
        cell.get_vertices()
            .iter()
            .filter(|v| self.contains_s2_point(*v))
            .count()
    }

    /// Whether the whole cell lies in the cap. Conservative.
    pub fn contains_s2_cell(&self, cell: CellId) -> bool {
        let vertices = cell.get_vertices();
        if !vertices.iter().all(|v| self.contains_s2_point(v)) {
            return false;
        }
        // The vertex test runs first: the complement of a tiny cap cannot be
        // represented accurately.
        !self.complement_shape().intersects_s2_cell(cell, &vertices)
    }

    /// Intersection test assuming no vertex of `cell` lies in the cap.
    /// `vertices` must be `cell.get_vertices()`.
    pub fn intersects_s2_cell(&self, cell: CellId, vertices: &Vertices) -> bool {
        // Hemisphere or larger: cell and complement are both convex, so a cell
        // with no contained vertex has no contained interior point either.
        if self.radius >= S1ChordAngle::RIGHT || self.is_empty() {
            return false;
        }
        if cell.contains_s2_point(&self.center) {
            return true;
        }

        // Only an edge interior can still cross the cap.
        let sin2_angle = self.radius.sin2();
        let edges = cell.get_edges_raw();
        for (k, edge) in edges.iter().enumerate() {
            let dot = self.center.dot(edge);
            if dot > 0.0 {
                // Center on the inner side; the opposite edge decides.
                continue;
            }
            // `edge` is not unit length.
            if dot * dot > sin2_angle * edge.norm2() {
                return false;
            }
            let dir = edge.cross(&self.center);
            if dir.dot(&vertices[k]) < 0.0 && dir.dot(&vertices[(k + 1) & 3]) > 0.0 {
                return true;
            }
        }
        false
    }

    /// Intersection test that checks vertices before edges.
    pub fn intersects_s2_cell_fast(&self, cell: CellId) -> bool {
        let vertices = cell.get_vertices();
        if vertices.iter().any(|v| self.contains_s2_point(v)) {
            return true;
        }
        self.intersects_s2_cell(cell, &vertices)
    }
}
