use super::half_edge::{HalfEdgeMesh, PendingEdges, VertexState};
use super::{ConvexHullError, HullCapacity, InvariantViolation, QuickHullOptions, ValidationPolicy};
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::shape::{Plane, Triangle};
use crate::utils::{hull_tolerance, PointCloudExtrema};
use arrayvec::ArrayVec;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Four input points spanning a tetrahedron of non-negligible volume.
#[derive(Clone, Debug)]
pub(crate) struct InitialSimplex {
    /// Indices of the simplex vertices in the input slice. The first three span the base.
    pub ids: ArrayVec<usize, 4>,
    /// The plane of the base triangle, oriented counter-clockwise.
    pub base: Plane,
    /// The distance tolerance used for the rest of the construction.
    pub tolerance: Real,
}

impl InitialSimplex {
    /// Is the apex on the negative side of the base plane?
    fn apex_below(&self, points: &[Point<Real>]) -> bool {
        self.base.signed_distance(&points[self.ids[3]]) < 0.0
    }
}

/// Selects four extremal points spanning the initial tetrahedron.
pub(crate) fn select_initial_simplex(
    points: &[Point<Real>],
    tolerance: Option<Real>,
) -> Result<InitialSimplex, ConvexHullError> {
    if points.len() < 4 {
        return Err(ConvexHullError::InsufficientPoints(points.len()));
    }

    if let Some(i) = points
        .iter()
        .position(|pt| pt.coords.iter().any(|x| !x.is_finite()))
    {
        return Err(ConvexHullError::NonFinitePoint(i));
    }

    let extrema = PointCloudExtrema::from_points(points)
        .ok_or(ConvexHullError::InsufficientPoints(points.len()))?;
    let tolerance = tolerance.unwrap_or_else(|| hull_tolerance(&extrema));
    let mut ids = ArrayVec::new();

    /*
     * Base segment: the farthest pair of axis-extremal points.
     */
    let (i1, i2, dist) = extrema.farthest_pair(points);

    if dist <= DEFAULT_EPSILON * DEFAULT_EPSILON {
        return Err(ConvexHullError::CoincidentExtrema);
    }

    ids.push(i1);
    ids.push(i2);

    /*
     * Base triangle: the point maximizing the area with the base segment.
     */
    let (a, b) = (points[i1], points[i2]);
    let mut best_area = 0.0;
    let mut i3 = None;

    for (i, c) in points.iter().enumerate() {
        if ids.contains(&i) {
            continue;
        }

        let area = Triangle::new(a, b, *c).area_squared();
        if area > best_area {
            best_area = area;
            i3 = Some(i);
        }
    }

    let i3 = match i3 {
        Some(i3) if best_area > (2.0 * DEFAULT_EPSILON) * (2.0 * DEFAULT_EPSILON) => i3,
        _ => return Err(ConvexHullError::Collinear),
    };
    ids.push(i3);

    let base = Triangle::new(a, b, points[i3])
        .plane()
        .ok_or(ConvexHullError::Collinear)?;

    /*
     * Apex: the point farthest from the base plane, on either side.
     */
    let mut best_dist = 0.0;
    let mut i4 = None;

    for (i, pt) in points.iter().enumerate() {
        if ids.contains(&i) {
            continue;
        }

        let dist = base.signed_distance(pt).abs();
        if dist > best_dist {
            best_dist = dist;
            i4 = Some(i);
        }
    }

    match i4 {
        Some(i4) if best_dist > tolerance => ids.push(i4),
        _ => return Err(ConvexHullError::Coplanar),
    }

    Ok(InitialSimplex {
        ids,
        base,
        tolerance,
    })
}

/// Builds the tetrahedron spanned by `simplex` and files every other input point into the
/// conflict list of the face it is farthest above.
///
/// Returns the mesh and the number of points found inside of the tetrahedron, which are
/// discarded.
pub(crate) fn build_initial_hull(
    points: &[Point<Real>],
    simplex: &InitialSimplex,
    options: &QuickHullOptions,
) -> Result<(HalfEdgeMesh, usize), ConvexHullError> {
    let mut mesh = HalfEdgeMesh::new(
        HullCapacity::from_point_count(points.len()),
        options.capacity,
        simplex.tolerance,
    );

    let vertices = simplex
        .ids
        .iter()
        .map(|&i| mesh.add_vertex(points[i], i as u32, VertexState::Hull))
        .collect::<Result<ArrayVec<_, 4>, _>>()?;
    let (v1, v2, v3, v4) = (vertices[0], vertices[1], vertices[2], vertices[3]);

    // Wind every face counter-clockwise when seen from outside.
    let triangles = if simplex.apex_below(points) {
        [[v1, v2, v3], [v4, v2, v1], [v4, v3, v2], [v4, v1, v3]]
    } else {
        [[v1, v3, v2], [v4, v1, v2], [v4, v2, v3], [v4, v3, v1]]
    };

    let mut pending = PendingEdges::default();
    let faces = triangles
        .iter()
        .map(|tri| mesh.add_triangle(*tri, &mut pending))
        .collect::<Result<ArrayVec<_, 4>, _>>()?;

    if let Some(edge) = pending.values().next() {
        return Err(InvariantViolation::UnmatchedHalfEdge(*edge).into());
    }

    if options.validation != ValidationPolicy::Never {
        mesh.validate()?;
    }

    let conflict_face = |(i, pt): (usize, &Point<Real>)| {
        if simplex.ids.contains(&i) {
            None
        } else {
            Some(mesh.best_face(&faces, pt))
        }
    };

    #[cfg(feature = "parallel")]
    let assignments: Vec<_> = points.par_iter().enumerate().map(conflict_face).collect();
    #[cfg(not(feature = "parallel"))]
    let assignments: Vec<_> = points.iter().enumerate().map(conflict_face).collect();

    let mut discarded = 0;

    for (i, assignment) in assignments.into_iter().enumerate() {
        match assignment {
            Some(Some(face)) => {
                let vertex = mesh.add_vertex(points[i], i as u32, VertexState::Orphan)?;
                mesh.push_conflict(vertex, face);
            }
            Some(None) => discarded += 1,
            None => {}
        }
    }

    log::debug!(
        "Initial tetrahedron {:?}: {} outside points, {} inside points.",
        simplex.ids,
        mesh.vertices.len() - 4,
        discarded
    );

    Ok((mesh, discarded))
}
