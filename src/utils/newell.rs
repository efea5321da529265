use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::shape::Plane;
use na::Unit;

/// Computes the plane and the centroid of a closed polygon with Newell's method.
///
/// The vertices are expected in counter-clockwise order when seen from the side the
/// resulting normal points to. Unlike a cross product of two edges, Newell's method
/// averages over every edge of the loop, which gives a stable normal for polygons that
/// are only approximately planar (as produced by merging nearly-coplanar faces).
///
/// The plane passes through the centroid (the average of the vertices).
/// Returns `None` if the polygon has less than three vertices or a vanishing area.
pub fn newell_plane(vertices: &[Point<Real>]) -> Option<(Plane, Point<Real>)> {
    if vertices.len() < 3 {
        return None;
    }

    let mut normal = Vector::zeros();
    let mut center = Vector::zeros();

    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];

        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
        center += a.coords;
    }

    if relative_eq!(
        normal.norm_squared(),
        0.0,
        epsilon = DEFAULT_EPSILON * DEFAULT_EPSILON
    ) {
        return None;
    }

    let center = Point::from(center / vertices.len() as Real);
    let normal = Unit::new_normalize(normal);

    Some((Plane::new(normal, &center), center))
}
