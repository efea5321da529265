use super::half_edge::{HalfEdgeKey, HalfEdgeMesh, PendingEdges};
use super::initial_mesh::{build_initial_hull, select_initial_simplex};
use super::{ConvexHullError, FaceKey, QuickHullOptions, ValidationPolicy, VertexKey};
use crate::math::{Point, Real};

/// Statistics gathered while building a convex hull.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ConstructionStats {
    /// The number of points inserted after the initial tetrahedron.
    pub iterations: usize,
    /// The number of face pairs merged into a single face.
    pub merged_faces: usize,
    /// The number of input points found inside of the hull and dropped.
    pub discarded_points: usize,
    /// The largest number of vertices simultaneously alive.
    pub peak_vertices: usize,
    /// The largest number of half-edges simultaneously alive.
    pub peak_half_edges: usize,
    /// The largest number of faces simultaneously alive.
    pub peak_faces: usize,
}

/// The state of an ongoing hull construction.
///
/// Owns the mesh and the scratch buffers reused by every expansion step.
pub(crate) struct HullBuilder {
    pub(super) mesh: HalfEdgeMesh,
    pub(super) stats: ConstructionStats,
    pub(super) horizon: Vec<HalfEdgeKey>,
    pub(super) horizon_vertices: Vec<VertexKey>,
    pub(super) visible_faces: Vec<FaceKey>,
    pub(super) new_faces: Vec<FaceKey>,
    pub(super) orphans: Vec<VertexKey>,
    pub(super) pending: PendingEdges,
}

impl HullBuilder {
    fn new(mesh: HalfEdgeMesh) -> Self {
        HullBuilder {
            mesh,
            stats: ConstructionStats::default(),
            horizon: Vec::new(),
            horizon_vertices: Vec::new(),
            visible_faces: Vec::new(),
            new_faces: Vec::new(),
            orphans: Vec::new(),
            pending: PendingEdges::default(),
        }
    }

    /// Drops the points still filed in conflict lists: none of them is farther than the
    /// tolerance from its face.
    fn discard_remaining_conflicts(&mut self) {
        let remaining: Vec<_> = self
            .mesh
            .faces
            .iter_mut()
            .flat_map(|(_, face)| core::mem::take(&mut face.conflicts))
            .collect();

        for vertex in remaining {
            let _ = self.mesh.vertices.remove(vertex);
            self.stats.discarded_points += 1;
        }
    }
}

/// Runs the whole construction: initial tetrahedron, then one expansion step per eye vertex
/// until no point is left outside of the hull.
pub(crate) fn construct(
    points: &[Point<Real>],
    options: &QuickHullOptions,
) -> Result<(HalfEdgeMesh, ConstructionStats), ConvexHullError> {
    log::debug!("Computing the convex hull of {} points.", points.len());

    let simplex = select_initial_simplex(points, options.tolerance)?;
    let (mesh, discarded) = build_initial_hull(points, &simplex, options)?;
    let mut builder = HullBuilder::new(mesh);
    builder.stats.discarded_points = discarded;

    while let Some(eye) = builder.find_eye_vertex() {
        if let Some(max_iterations) = options.max_iterations {
            if builder.stats.iterations >= max_iterations {
                log::warn!(
                    "Convex hull construction stopped after {} iterations with points left outside.",
                    max_iterations
                );
                return Err(ConvexHullError::IterationLimit(max_iterations));
            }
        }

        if options.validation == ValidationPolicy::EveryIteration {
            builder.mesh.validate()?;
        }

        builder.add_eye_vertex(eye)?;
        builder.stats.iterations += 1;
    }

    builder.discard_remaining_conflicts();

    if options.validation != ValidationPolicy::Never {
        builder.mesh.validate()?;
    }

    let HullBuilder {
        mesh, mut stats, ..
    } = builder;
    stats.peak_vertices = mesh.vertices.peak();
    stats.peak_half_edges = mesh.edges.peak();
    stats.peak_faces = mesh.faces.peak();

    log::debug!(
        "Convex hull complete: {} vertices, {} faces, {} iterations, {} merges, {} discarded points.",
        mesh.vertices.len(),
        mesh.faces.len(),
        stats.iterations,
        stats.merged_faces,
        stats.discarded_points
    );

    Ok((mesh, stats))
}
