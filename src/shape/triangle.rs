use crate::math::{Point, Real, Vector};
use crate::shape::Plane;

/// A triangle defined by its three vertices.
#[derive(PartialEq, Debug, Copy, Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The non-normalized counter-clockwise normal of this triangle.
    ///
    /// Its norm is twice the triangle area.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        (self.b - self.a).cross(&(self.c - self.a))
    }

    /// The squared area of this triangle.
    ///
    /// Cheaper than the area itself and sufficient for comparisons.
    #[inline]
    pub fn area_squared(&self) -> Real {
        self.scaled_normal().norm_squared() * 0.25
    }

    /// The plane containing this triangle, oriented counter-clockwise.
    #[inline]
    pub fn plane(&self) -> Option<Plane> {
        Plane::from_points(&self.a, &self.b, &self.c)
    }

    /// The barycenter of this triangle.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        Point::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }
}
