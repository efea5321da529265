use super::builder::{construct, ConstructionStats};
use super::half_edge::{Face, HalfEdgeMesh};
use super::{ConvexHullError, FaceKey, InvariantViolation, QuickHullOptions};
use crate::math::{Point, Real, Vector};
use crate::shape::Plane;
use crate::utils::hashmap::{Entry, HashMap};
use na::Unit;

/// The convex hull of a 3D point cloud, as a closed polyhedral mesh.
///
/// Faces are convex polygons with outward normals. Adjacent coplanar triangles are merged
/// during construction, so a box yields six quadrilaterals rather than twelve triangles.
/// Every vertex of the hull is one of the input points.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use quickhull3d::math::Point;
/// use quickhull3d::transformation::ConvexHull;
///
/// let mut points = Vec::new();
/// for x in [-1.0, 1.0] {
///     for y in [-1.0, 1.0] {
///         for z in [-1.0, 1.0] {
///             points.push(Point::new(x, y, z));
///         }
///     }
/// }
/// points.push(Point::origin());
///
/// let hull = ConvexHull::try_new(&points).unwrap();
/// assert_eq!(hull.vertex_count(), 8);
/// assert_eq!(hull.edge_count(), 12);
/// assert_eq!(hull.face_count(), 6);
/// assert!(hull.faces().all(|face| face.edge_count() == 4));
/// assert!(hull.contains_point(&Point::new(0.5, 0.5, 0.5)));
/// # }
/// ```
pub struct ConvexHull {
    mesh: HalfEdgeMesh,
    stats: ConstructionStats,
}

impl ConvexHull {
    /// Computes the convex hull of `points` with the default options.
    pub fn try_new(points: &[Point<Real>]) -> Result<Self, ConvexHullError> {
        Self::try_new_with_options(points, &QuickHullOptions::default())
    }

    /// Computes the convex hull of `points`.
    ///
    /// Fails if `points` does not span a volume (see [`ConvexHullError`]) or if a limit set in
    /// `options` is exceeded. No partial hull is returned on failure.
    pub fn try_new_with_options(
        points: &[Point<Real>],
        options: &QuickHullOptions,
    ) -> Result<Self, ConvexHullError> {
        let (mesh, stats) = construct(points, options)?;
        Ok(ConvexHull { mesh, stats })
    }

    /// The faces of this hull.
    pub fn faces(&self) -> impl Iterator<Item = HullFace<'_>> + '_ {
        self.mesh.faces.iter().map(move |(key, face)| HullFace {
            mesh: &self.mesh,
            key,
            face,
        })
    }

    /// The face with the given key, if it is part of this hull.
    pub fn face(&self, key: FaceKey) -> Option<HullFace<'_>> {
        self.mesh.faces.get(key).map(|face| HullFace {
            mesh: &self.mesh,
            key,
            face,
        })
    }

    /// The vertices of this hull, as pairs of an input point index and its position.
    pub fn vertices(&self) -> impl Iterator<Item = (u32, Point<Real>)> + '_ {
        self.mesh.vertices.values().map(|v| (v.id, v.position))
    }

    /// The number of vertices of this hull.
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len()
    }

    /// The number of edges of this hull.
    pub fn edge_count(&self) -> usize {
        self.mesh.edges.len() / 2
    }

    /// The number of faces of this hull.
    pub fn face_count(&self) -> usize {
        self.mesh.faces.len()
    }

    /// The distance tolerance used to build this hull.
    pub fn tolerance(&self) -> Real {
        self.mesh.tolerance
    }

    /// The number of points inserted after the initial tetrahedron.
    pub fn iterations(&self) -> usize {
        self.stats.iterations
    }

    /// Statistics gathered during the construction of this hull.
    pub fn stats(&self) -> &ConstructionStats {
        &self.stats
    }

    /// Checks the structural invariants of the hull mesh.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        self.mesh.validate()
    }

    /// Does the hull mesh satisfy all its structural invariants?
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Is `point` inside of this hull, up to its tolerance?
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        let tolerance = self.mesh.tolerance;
        self.mesh
            .faces
            .values()
            .all(|face| face.distance(point) <= tolerance)
    }

    /// Exports this hull as an indexed polygon soup.
    ///
    /// Each polygon lists its vertex indices counter-clockwise, seen from outside of the hull.
    pub fn to_polygons(&self) -> (Vec<Point<Real>>, Vec<Vec<u32>>) {
        let mut points = Vec::with_capacity(self.vertex_count());
        let mut indices = HashMap::default();
        let mut polygons = Vec::with_capacity(self.face_count());

        for key in self.mesh.faces.keys() {
            let polygon = self
                .mesh
                .face_edges(key)
                .map(|e| {
                    let vertex = self.mesh.edges[e].tail;
                    match indices.entry(vertex) {
                        Entry::Occupied(entry) => *entry.get(),
                        Entry::Vacant(entry) => {
                            let id = points.len() as u32;
                            points.push(self.mesh.vertices[vertex].position);
                            *entry.insert(id)
                        }
                    }
                })
                .collect();
            polygons.push(polygon);
        }

        (points, polygons)
    }

    /// Exports this hull as a triangle mesh, fanning each face from its first vertex.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (points, polygons) = self.to_polygons();
        let mut triangles = Vec::with_capacity(2 * points.len());

        for polygon in &polygons {
            for i in 1..polygon.len() - 1 {
                triangles.push([polygon[0], polygon[i], polygon[i + 1]]);
            }
        }

        (points, triangles)
    }
}

/// A face of a [`ConvexHull`].
#[derive(Copy, Clone)]
pub struct HullFace<'a> {
    mesh: &'a HalfEdgeMesh,
    key: FaceKey,
    face: &'a Face,
}

impl<'a> HullFace<'a> {
    /// The key of this face.
    pub fn key(&self) -> FaceKey {
        self.key
    }

    /// The outward unit normal of this face.
    pub fn normal(&self) -> Unit<Vector<Real>> {
        self.face.plane.normal
    }

    /// The plane of this face, oriented outward.
    pub fn plane(&self) -> Plane {
        self.face.plane
    }

    /// The centroid of the vertices of this face.
    pub fn center(&self) -> Point<Real> {
        self.face.center
    }

    /// The number of edges (and vertices) on the boundary of this face.
    pub fn edge_count(&self) -> usize {
        self.mesh.face_degree(self.key)
    }

    /// The positions of the boundary vertices, counter-clockwise seen from outside.
    pub fn vertices(&self) -> impl Iterator<Item = Point<Real>> + 'a {
        let mesh = self.mesh;
        mesh.face_edges(self.key)
            .map(move |e| mesh.vertices[mesh.edges[e].tail].position)
    }

    /// The input indices of the boundary vertices, in the same order as
    /// [`HullFace::vertices`].
    pub fn vertex_ids(&self) -> impl Iterator<Item = u32> + 'a {
        let mesh = self.mesh;
        mesh.face_edges(self.key)
            .map(move |e| mesh.vertices[mesh.edges[e].tail].id)
    }
}

/// Computes the convex hull of a set of 3D points as a triangle mesh.
///
/// Coplanar faces of the hull are fan-triangulated. The returned indices refer to the
/// returned points, which are the hull vertices.
pub fn try_convex_hull(
    points: &[Point<Real>],
) -> Result<(Vec<Point<Real>>, Vec<[u32; 3]>), ConvexHullError> {
    ConvexHull::try_new(points).map(|hull| hull.to_trimesh())
}
