use super::{FaceKey, HalfEdgeKey, VertexKey};

/// Errors that can occur during convex hull computation.
///
/// # Overview
///
/// The hull is built incrementally, starting from a tetrahedron spanned by four extremal
/// input points. Construction fails early, before any mesh is exposed, when no such
/// tetrahedron exists: too few points, all points (nearly) equal, collinear, or coplanar.
/// Once the initial tetrahedron exists, every remaining point is classified against the
/// hull with a distance tolerance and no further input-related failure is possible.
///
/// The remaining variants report resource limits configured through
/// [`QuickHullOptions`](super::QuickHullOptions), or an internal inconsistency of the
/// half-edge mesh.
///
/// # How to Handle Errors
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use quickhull3d::math::Point;
/// use quickhull3d::transformation::{ConvexHull, ConvexHullError};
///
/// let points = vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
/// ];
///
/// match ConvexHull::try_new(&points) {
///     Ok(hull) => println!("Hull with {} faces", hull.face_count()),
///     Err(ConvexHullError::Coplanar) => println!("The points are flat."),
///     Err(err) => println!("Unexpected error: {}", err),
/// }
/// # }
/// ```
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConvexHullError {
    /// Less than four points were given.
    ///
    /// A 3D convex hull needs at least four non-coplanar points to enclose a volume.
    #[error("At least 4 points are needed to compute a 3D convex hull, {0} were given.")]
    InsufficientPoints(usize),

    /// The point at the given index has a NaN or infinite coordinate.
    #[error("Input point {0} has a non-finite coordinate.")]
    NonFinitePoint(usize),

    /// The two points farthest apart along any canonical axis coincide.
    ///
    /// This happens if all the input points are equal, up to machine precision.
    #[error("The extremal input points coincide.")]
    CoincidentExtrema,

    /// No input point forms a triangle of non-negligible area with the two extremal points.
    #[error("The input points are collinear.")]
    Collinear,

    /// No input point lies farther than the tolerance from the plane of the initial triangle.
    #[error("The input points are coplanar.")]
    Coplanar,

    /// One of the mesh arenas reached its capacity while the
    /// [`CapacityPolicy::Fixed`](super::CapacityPolicy::Fixed) policy was selected.
    #[error("The {arena} arena exceeded its capacity of {capacity} elements.")]
    CapacityExceeded {
        /// The name of the arena that overflowed.
        arena: &'static str,
        /// The capacity that was exceeded.
        capacity: usize,
    },

    /// The construction performed the maximum number of iterations allowed by
    /// [`QuickHullOptions::max_iterations`](super::QuickHullOptions::max_iterations) while
    /// points were still outside of the hull.
    #[error("The hull construction did not complete within {0} iterations.")]
    IterationLimit(usize),

    /// The half-edge mesh became inconsistent.
    ///
    /// This indicates a bug in the hull construction algorithm, not an invalid input. If you
    /// encounter this error, please report it with the input points.
    #[error("Internal error: {0}")]
    InvariantViolation(#[from] InvariantViolation),
}

/// A broken structural invariant of a hull mesh.
///
/// Returned by [`ConvexHull::validate`](super::ConvexHull::validate) and
/// [`check_convex_hull`](super::check_convex_hull). Each variant names the element on which
/// the inconsistency was detected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvariantViolation {
    /// A key refers to a vertex that was released.
    #[error("vertex {0:?} was released")]
    StaleVertex(VertexKey),
    /// A key refers to a half-edge that was released.
    #[error("half-edge {0:?} was released")]
    StaleHalfEdge(HalfEdgeKey),
    /// A key refers to a face that was released.
    #[error("face {0:?} was released")]
    StaleFace(FaceKey),
    /// The twin of the twin of a half-edge is not the half-edge itself.
    #[error("half-edge {0:?} is not the twin of its twin")]
    TwinMismatch(HalfEdgeKey),
    /// The `next`/`prev` links around a half-edge are not reciprocal.
    #[error("the next/prev links of half-edge {0:?} are not reciprocal")]
    BrokenLink(HalfEdgeKey),
    /// A half-edge and its twin disagree on their shared endpoints.
    #[error("half-edge {0:?} and its twin disagree on their endpoints")]
    EndpointMismatch(HalfEdgeKey),
    /// Both endpoints of a half-edge are the same vertex or the same position.
    #[error("half-edge {0:?} has coincident endpoints")]
    DegenerateEdge(HalfEdgeKey),
    /// Chasing `next.twin` from a half-edge does not come back to it.
    #[error("the vertex fan around half-edge {0:?} does not close")]
    OpenVertexFan(HalfEdgeKey),
    /// The boundary cycle of a face does not close.
    #[error("the edge cycle of face {0:?} does not close")]
    OpenFaceCycle(FaceKey),
    /// A half-edge of the boundary cycle of a face refers to another face.
    #[error("half-edge {edge:?} on the boundary of face {face:?} refers to another face")]
    ForeignEdge {
        /// The face whose cycle was traversed.
        face: FaceKey,
        /// The half-edge pointing to another face.
        edge: HalfEdgeKey,
    },
    /// A face has less than three edges, or no well-defined plane.
    #[error("face {0:?} is degenerate")]
    DegenerateFace(FaceKey),
    /// A conflict-list entry and the vertex it names disagree on the owning face.
    #[error("vertex {vertex:?} in the conflict list of face {face:?} is not owned by it")]
    ConflictMismatch {
        /// The face whose conflict list was traversed.
        face: FaceKey,
        /// The vertex with the wrong back-reference.
        vertex: VertexKey,
    },
    /// A vertex is marked as a hull vertex but no half-edge starts from it, or a half-edge
    /// starts from a vertex that is not a hull vertex.
    #[error("vertex {0:?} is not properly connected to the hull boundary")]
    DisconnectedVertex(VertexKey),
    /// A vertex was left without an owner outside of an expansion step.
    #[error("vertex {0:?} has no owner")]
    OrphanedVertex(VertexKey),
    /// The mesh does not satisfy Euler's formula `V - E + F = 2`.
    #[error("Euler characteristic mismatch: {vertices} - {edges} + {faces} != 2")]
    EulerCharacteristic {
        /// The number of hull vertices.
        vertices: usize,
        /// The number of (undirected) edges.
        edges: usize,
        /// The number of faces.
        faces: usize,
    },
    /// The eye vertex is not owned by any conflict list.
    #[error("the eye vertex {0:?} is not in a conflict list")]
    MisplacedEye(VertexKey),
    /// The horizon seen from the eye vertex is empty or is not a single closed loop.
    #[error("the horizon seen from vertex {0:?} is not a closed loop")]
    OpenHorizon(VertexKey),
    /// The horizon seen from the eye vertex visits the same vertex twice.
    #[error("the horizon seen from vertex {0:?} is not manifold")]
    NonManifoldHorizon(VertexKey),
    /// A half-edge created while fanning new faces around the eye vertex never received
    /// a face.
    #[error("half-edge {0:?} was left without a face")]
    UnmatchedHalfEdge(HalfEdgeKey),
    /// Two faces share two consecutive edges around a vertex touched by other faces.
    #[error("vertex {0:?} is not manifold")]
    NonManifoldVertex(VertexKey),
    /// Two points of an exported triangle mesh are equal.
    #[error("duplicate points {0} and {1}")]
    DuplicatePoints(usize, usize),
    /// A triangle of an exported triangle mesh references the same vertex twice.
    #[error("triangle {0} is degenerate")]
    DegenerateTriangle(usize),
    /// An edge of an exported triangle mesh is shared by more than two triangles.
    #[error("t-junction on triangle {0}, edge ({1}, {2})")]
    TJunction(usize, u32, u32),
    /// An edge of an exported triangle mesh belongs to a single triangle.
    #[error("unfinished triangle: edge ({0}, {1}) has a single adjacent triangle")]
    UnfinishedTriangle(u32, u32),
}
