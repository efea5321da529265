use super::arena::Arena;
use super::{CapacityPolicy, ConvexHullError, HullCapacity, InvariantViolation};
use crate::math::{Point, Real, Vector};
use crate::shape::Plane;
use crate::utils::hashmap::HashMap;
use crate::utils::newell_plane;
use arrayvec::ArrayVec;
use slotmap::Key;
use smallvec::SmallVec;

slotmap::new_key_type! {
    /// Key of a vertex of a hull mesh.
    pub struct VertexKey;
    /// Key of a half-edge of a hull mesh.
    pub struct HalfEdgeKey;
    /// Key of a face of a hull mesh.
    pub struct FaceKey;
}

/// Pending half-edges awaiting their face, indexed by `(tail, head)`.
pub(crate) type PendingEdges = HashMap<(VertexKey, VertexKey), HalfEdgeKey>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum VertexState {
    /// The vertex lies on the hull boundary.
    Hull,
    /// The vertex is outside of the hull, in the conflict list of the given face.
    Conflict(FaceKey),
    /// The vertex lost its conflict face and awaits redistribution.
    Orphan,
}

#[derive(Clone, Debug)]
pub(crate) struct Vertex {
    pub position: Point<Real>,
    /// Index of the input point this vertex was created from.
    pub id: u32,
    pub state: VertexState,
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct HalfEdge {
    pub tail: VertexKey,
    pub face: FaceKey,
    pub next: HalfEdgeKey,
    pub prev: HalfEdgeKey,
    pub twin: HalfEdgeKey,
}

impl HalfEdge {
    fn new(tail: VertexKey) -> Self {
        HalfEdge {
            tail,
            face: FaceKey::null(),
            next: HalfEdgeKey::null(),
            prev: HalfEdgeKey::null(),
            twin: HalfEdgeKey::null(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum FaceMark {
    Visible,
    Invisible,
}

#[derive(Clone, Debug)]
pub(crate) struct Face {
    pub edge: HalfEdgeKey,
    pub plane: Plane,
    pub center: Point<Real>,
    pub conflicts: Vec<VertexKey>,
    pub mark: FaceMark,
}

impl Face {
    fn new() -> Self {
        Face {
            edge: HalfEdgeKey::null(),
            plane: Plane::new(Vector::z_axis(), &Point::origin()),
            center: Point::origin(),
            conflicts: Vec::new(),
            mark: FaceMark::Invisible,
        }
    }

    #[inline]
    pub fn distance(&self, point: &Point<Real>) -> Real {
        self.plane.signed_distance(point)
    }
}

/// A closed polyhedral mesh together with the conflict graph of the points outside of it.
pub(crate) struct HalfEdgeMesh {
    pub vertices: Arena<VertexKey, Vertex>,
    pub edges: Arena<HalfEdgeKey, HalfEdge>,
    pub faces: Arena<FaceKey, Face>,
    pub tolerance: Real,
}

impl HalfEdgeMesh {
    pub fn new(capacity: HullCapacity, policy: CapacityPolicy, tolerance: Real) -> Self {
        HalfEdgeMesh {
            vertices: Arena::new("vertex", capacity.vertices, policy),
            edges: Arena::new("half-edge", capacity.half_edges, policy),
            faces: Arena::new("face", capacity.faces, policy),
            tolerance,
        }
    }

    pub fn add_vertex(
        &mut self,
        position: Point<Real>,
        id: u32,
        state: VertexState,
    ) -> Result<VertexKey, ConvexHullError> {
        self.vertices.insert(Vertex {
            position,
            id,
            state,
        })
    }

    /// The vertex a half-edge points to.
    #[cfg(test)]
    pub fn head(&self, edge: HalfEdgeKey) -> VertexKey {
        self.edges[self.edges[edge].next].tail
    }

    /// Iterates through the boundary cycle of `face`, starting at its reference edge.
    ///
    /// The iteration stops at the first released half-edge, and after visiting as many edges
    /// as the mesh contains, so it terminates even on a corrupted cycle.
    pub fn face_edges(&self, face: FaceKey) -> FaceEdges<'_> {
        let first = self
            .faces
            .get(face)
            .map(|f| f.edge)
            .unwrap_or_else(HalfEdgeKey::null);

        FaceEdges {
            mesh: self,
            first,
            curr: Some(first),
            remaining: self.edges.len(),
        }
    }

    /// The positions of the boundary vertices of `face`, in counter-clockwise order.
    pub fn face_positions(&self, face: FaceKey) -> SmallVec<[Point<Real>; 8]> {
        self.face_edges(face)
            .map(|e| self.vertices[self.edges[e].tail].position)
            .collect()
    }

    /// The number of edges on the boundary of `face`.
    pub fn face_degree(&self, face: FaceKey) -> usize {
        self.face_edges(face).count()
    }

    /// Recomputes the plane and centroid of `face` from its boundary with Newell's method.
    pub fn recompute_face_plane(&mut self, face: FaceKey) -> Result<(), ConvexHullError> {
        let positions = self.face_positions(face);
        let (mut plane, center) =
            newell_plane(&positions).ok_or(InvariantViolation::DegenerateFace(face))?;

        // Support plane: every vertex of the polygon lies on or below it.
        plane.offset = positions
            .iter()
            .map(|pt| plane.normal.dot(&pt.coords))
            .fold(plane.offset, Real::max);

        let face = &mut self.faces[face];
        face.plane = plane;
        face.center = center;
        Ok(())
    }

    /// Adds the triangle `(a, b, c)`, counter-clockwise when seen from outside of the hull.
    ///
    /// A half-edge `tail -> head` registered in `pending` is reused for the matching side of
    /// the triangle. Otherwise a new pair of twin half-edges is allocated and the twin is
    /// registered in `pending` for the triangle on the other side of that edge.
    pub fn add_triangle(
        &mut self,
        vertices: [VertexKey; 3],
        pending: &mut PendingEdges,
    ) -> Result<FaceKey, ConvexHullError> {
        let face = self.faces.insert(Face::new())?;
        let mut edges = ArrayVec::<HalfEdgeKey, 3>::new();

        for i in 0..3 {
            let (tail, head) = (vertices[i], vertices[(i + 1) % 3]);
            let edge = match pending.remove(&(tail, head)) {
                Some(edge) => edge,
                None => {
                    let edge = self.edges.insert(HalfEdge::new(tail))?;
                    let twin = self.edges.insert(HalfEdge::new(head))?;
                    self.edges[edge].twin = twin;
                    self.edges[twin].twin = edge;
                    let _ = pending.insert((head, tail), twin);
                    edge
                }
            };

            self.edges[edge].face = face;
            edges.push(edge);
        }

        for i in 0..3 {
            let edge = &mut self.edges[edges[i]];
            edge.next = edges[(i + 1) % 3];
            edge.prev = edges[(i + 2) % 3];
        }

        self.faces[face].edge = edges[0];
        self.recompute_face_plane(face)?;
        Ok(face)
    }

    /// The face with the largest signed distance to `point`, if it exceeds the tolerance.
    ///
    /// Ties are resolved in favor of the first face of `faces`.
    pub fn best_face(&self, faces: &[FaceKey], point: &Point<Real>) -> Option<FaceKey> {
        let mut best = None;
        let mut best_dist = self.tolerance;

        for &face in faces {
            let dist = self.faces[face].distance(point);
            if dist > best_dist {
                best_dist = dist;
                best = Some(face);
            }
        }

        best
    }

    /// Files the vertex into the conflict list of `face`.
    pub fn push_conflict(&mut self, vertex: VertexKey, face: FaceKey) {
        self.vertices[vertex].state = VertexState::Conflict(face);
        self.faces[face].conflicts.push(vertex);
    }
}

pub(crate) struct FaceEdges<'a> {
    mesh: &'a HalfEdgeMesh,
    first: HalfEdgeKey,
    curr: Option<HalfEdgeKey>,
    remaining: usize,
}

impl Iterator for FaceEdges<'_> {
    type Item = HalfEdgeKey;

    fn next(&mut self) -> Option<HalfEdgeKey> {
        let curr = self.curr?;
        if self.remaining == 0 {
            self.curr = None;
            return None;
        }

        let edge = self.mesh.edges.get(curr)?;
        self.remaining -= 1;
        self.curr = (edge.next != self.first).then_some(edge.next);
        Some(curr)
    }
}
