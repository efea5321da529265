//! Incremental 3D convex hull computation on a half-edge mesh.

pub use self::arena::HullCapacity;
pub use self::builder::ConstructionStats;
pub use self::convex_hull::{try_convex_hull, ConvexHull, HullFace};
pub use self::error::{ConvexHullError, InvariantViolation};
pub use self::half_edge::{FaceKey, HalfEdgeKey, VertexKey};
pub use self::options::{CapacityPolicy, QuickHullOptions, ValidationPolicy};
pub use self::validation::check_convex_hull;

mod arena;
mod builder;
mod convex_hull;
mod error;
mod expansion;
mod half_edge;
mod initial_mesh;
mod merge;
mod options;
mod validation;
