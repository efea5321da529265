use crate::math::Real;

/// When the hull construction checks the structural invariants of its mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ValidationPolicy {
    /// Never validate the mesh.
    Never,
    /// Validate the initial tetrahedron and the final hull.
    Final,
    /// Validate the initial tetrahedron, the mesh before every point insertion, and the
    /// final hull. Quadratic in the number of iterations.
    EveryIteration,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            ValidationPolicy::EveryIteration
        } else {
            ValidationPolicy::Final
        }
    }
}

/// What happens when a mesh arena is full.
///
/// Arenas are pre-sized from Euler's formula (see [`HullCapacity`](super::HullCapacity)),
/// which is enough for any input.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum CapacityPolicy {
    /// Let the arena grow beyond its initial capacity.
    #[default]
    Grow,
    /// Fail with [`ConvexHullError::CapacityExceeded`](super::ConvexHullError::CapacityExceeded).
    Fixed,
}

/// Parameters of the convex hull construction.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use quickhull3d::transformation::{QuickHullOptions, ValidationPolicy};
///
/// let options = QuickHullOptions::default()
///     .with_max_iterations(1000)
///     .with_validation(ValidationPolicy::Final);
/// assert_eq!(options.max_iterations, Some(1000));
/// # }
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct QuickHullOptions {
    /// The distance below which a point is considered to lie on a face plane.
    ///
    /// If `None`, it is derived from the magnitude of the input's bounding box.
    pub tolerance: Option<Real>,
    /// The maximum number of points inserted after the initial tetrahedron.
    ///
    /// If `None`, the construction runs until every point is inside the hull, which is
    /// guaranteed to happen in at most `n - 4` iterations for `n` input points.
    pub max_iterations: Option<usize>,
    /// When the mesh invariants are checked.
    pub validation: ValidationPolicy,
    /// What happens when a mesh arena is full.
    pub capacity: CapacityPolicy,
}

impl QuickHullOptions {
    /// Overrides the distance tolerance.
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Caps the number of point insertions.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets when the mesh invariants are checked.
    pub fn with_validation(mut self, validation: ValidationPolicy) -> Self {
        self.validation = validation;
        self
    }

    /// Sets what happens when a mesh arena is full.
    pub fn with_capacity_policy(mut self, capacity: CapacityPolicy) -> Self {
        self.capacity = capacity;
        self
    }
}
