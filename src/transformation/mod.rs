//! Computation of 3D convex hulls and export of their boundary.

pub use self::convex_hull3::{
    check_convex_hull, try_convex_hull, CapacityPolicy, ConstructionStats, ConvexHull,
    ConvexHullError, FaceKey, HalfEdgeKey, HullCapacity, HullFace, InvariantViolation,
    QuickHullOptions, ValidationPolicy, VertexKey,
};

mod convex_hull3;
