use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use na::Unit;

/// An oriented plane with a unit normal.
///
/// The plane is the set of points `x` such that `normal.dot(x) == offset`. Points for which
/// [`Plane::signed_distance`] is positive lie on the side the normal points to.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Plane {
    /// The plane's outward unit normal.
    pub normal: Unit<Vector<Real>>,
    /// The signed distance of the plane from the origin, along `normal`.
    pub offset: Real,
}

impl Plane {
    /// Builds a plane from its unit normal and a point it passes through.
    #[inline]
    pub fn new(normal: Unit<Vector<Real>>, point: &Point<Real>) -> Plane {
        Plane {
            normal,
            offset: normal.dot(&point.coords),
        }
    }

    /// Builds the plane passing through three points.
    ///
    /// The normal follows the right-hand rule: it points toward the side from which
    /// `a`, `b`, `c` appear counter-clockwise. Returns `None` if the points are
    /// collinear up to numerical precision.
    pub fn from_points(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Option<Plane> {
        let n = (b - a).cross(&(c - a));
        let normal = Unit::try_new(n, DEFAULT_EPSILON * DEFAULT_EPSILON)?;
        Some(Plane::new(normal, a))
    }

    /// The signed distance of `point` to this plane.
    #[inline]
    pub fn signed_distance(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) - self.offset
    }
}
