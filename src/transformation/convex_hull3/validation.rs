use super::half_edge::{Face, HalfEdge, HalfEdgeMesh, VertexState};
use super::{FaceKey, HalfEdgeKey, InvariantViolation};
use crate::math::{Point, Real, DEFAULT_EPSILON};
use crate::utils::hashmap::{Entry, HashMap};
use crate::utils::hashset::HashSet;

impl HalfEdgeMesh {
    /// Checks every structural invariant of the mesh and of its conflict graph.
    ///
    /// Runs in time linear in the size of the mesh times its maximum vertex degree. Must not
    /// be called in the middle of an expansion step, while some vertices are orphans.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let mut tails = HashSet::default();

        for (key, edge) in self.edges.iter() {
            self.validate_edge(key, edge)?;
            let _ = tails.insert(edge.tail);
        }

        let mut filed = HashSet::default();

        for (key, face) in self.faces.iter() {
            self.validate_face(key, face)?;

            for &vertex in &face.conflicts {
                if !filed.insert(vertex) {
                    return Err(InvariantViolation::ConflictMismatch { face: key, vertex });
                }
            }
        }

        let mut hull_vertices = 0;

        for (key, vertex) in self.vertices.iter() {
            match vertex.state {
                VertexState::Hull => {
                    if !tails.contains(&key) {
                        return Err(InvariantViolation::DisconnectedVertex(key));
                    }
                    hull_vertices += 1;
                }
                VertexState::Conflict(face) => {
                    if !self.faces.contains_key(face) {
                        return Err(InvariantViolation::StaleFace(face));
                    }
                    if !filed.contains(&key) {
                        return Err(InvariantViolation::ConflictMismatch { face, vertex: key });
                    }
                }
                VertexState::Orphan => return Err(InvariantViolation::OrphanedVertex(key)),
            }
        }

        for &tail in &tails {
            if self.vertices.get(tail).map(|v| v.state) != Some(VertexState::Hull) {
                return Err(InvariantViolation::DisconnectedVertex(tail));
            }
        }

        let (vertices, edges, faces) = (hull_vertices, self.edges.len() / 2, self.faces.len());
        if vertices + faces != edges + 2 {
            return Err(InvariantViolation::EulerCharacteristic {
                vertices,
                edges,
                faces,
            });
        }

        Ok(())
    }

    fn validate_edge(&self, key: HalfEdgeKey, edge: &HalfEdge) -> Result<(), InvariantViolation> {
        let twin = self
            .edges
            .get(edge.twin)
            .ok_or(InvariantViolation::StaleHalfEdge(edge.twin))?;
        let next = self
            .edges
            .get(edge.next)
            .ok_or(InvariantViolation::StaleHalfEdge(edge.next))?;
        let prev = self
            .edges
            .get(edge.prev)
            .ok_or(InvariantViolation::StaleHalfEdge(edge.prev))?;
        let tail = self
            .vertices
            .get(edge.tail)
            .ok_or(InvariantViolation::StaleVertex(edge.tail))?;
        let head = self
            .vertices
            .get(twin.tail)
            .ok_or(InvariantViolation::StaleVertex(twin.tail))?;

        if !self.faces.contains_key(edge.face) {
            return Err(InvariantViolation::StaleFace(edge.face));
        }

        if twin.twin != key {
            return Err(InvariantViolation::TwinMismatch(key));
        }

        if next.prev != key || prev.next != key {
            return Err(InvariantViolation::BrokenLink(key));
        }

        if twin.tail != next.tail {
            return Err(InvariantViolation::EndpointMismatch(key));
        }

        if edge.tail == twin.tail
            || na::distance_squared(&tail.position, &head.position)
                <= DEFAULT_EPSILON * DEFAULT_EPSILON
        {
            return Err(InvariantViolation::DegenerateEdge(key));
        }

        // Turn around the head of the edge.
        let mut curr = key;
        for _ in 0..self.edges.len() {
            let next = self
                .edges
                .get(curr)
                .map(|e| e.next)
                .ok_or(InvariantViolation::StaleHalfEdge(curr))?;
            curr = self
                .edges
                .get(next)
                .map(|e| e.twin)
                .ok_or(InvariantViolation::StaleHalfEdge(next))?;

            if curr == key {
                return Ok(());
            }
        }

        Err(InvariantViolation::OpenVertexFan(key))
    }

    fn validate_face(&self, key: FaceKey, face: &Face) -> Result<(), InvariantViolation> {
        let mut curr = face.edge;
        let mut count = 0;

        loop {
            let edge = self
                .edges
                .get(curr)
                .ok_or(InvariantViolation::StaleHalfEdge(curr))?;

            if edge.face != key {
                return Err(InvariantViolation::ForeignEdge {
                    face: key,
                    edge: curr,
                });
            }

            count += 1;
            curr = edge.next;

            if curr == face.edge {
                break;
            }

            if count > self.edges.len() {
                return Err(InvariantViolation::OpenFaceCycle(key));
            }
        }

        if count < 3 {
            return Err(InvariantViolation::DegenerateFace(key));
        }

        for &vertex in &face.conflicts {
            let state = self
                .vertices
                .get(vertex)
                .ok_or(InvariantViolation::StaleVertex(vertex))?
                .state;

            if state != VertexState::Conflict(key) {
                return Err(InvariantViolation::ConflictMismatch { face: key, vertex });
            }
        }

        Ok(())
    }
}

/// Checks if a triangle mesh is a closed, manifold, genus-0 surface, as expected from an
/// exported convex hull.
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use quickhull3d::math::Point;
/// use quickhull3d::transformation::{check_convex_hull, try_convex_hull};
///
/// let points = [
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 1.0),
/// ];
/// let (vertices, triangles) = try_convex_hull(&points).unwrap();
/// assert!(check_convex_hull(&vertices, &triangles).is_ok());
/// # }
/// ```
pub fn check_convex_hull(
    points: &[Point<Real>],
    triangles: &[[u32; 3]],
) -> Result<(), InvariantViolation> {
    struct EdgeData {
        adjacent_triangles: [usize; 2],
    }

    let mut edges = HashMap::default();

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if points[i] == points[j] {
                return Err(InvariantViolation::DuplicatePoints(i, j));
            }
        }
    }

    for (itri, tri) in triangles.iter().enumerate() {
        if tri[0] == tri[1] || tri[0] == tri[2] || tri[1] == tri[2] {
            return Err(InvariantViolation::DegenerateTriangle(itri));
        }

        for i in 0..3 {
            let ivtx1 = tri[i];
            let ivtx2 = tri[(i + 1) % 3];
            let edge_key = (ivtx1.min(ivtx2), ivtx1.max(ivtx2));

            match edges.entry(edge_key) {
                Entry::Vacant(e) => {
                    let _ = e.insert(EdgeData {
                        adjacent_triangles: [itri, usize::MAX],
                    });
                }
                Entry::Occupied(mut e) => {
                    if e.get().adjacent_triangles[1] != usize::MAX {
                        return Err(InvariantViolation::TJunction(itri, ivtx1, ivtx2));
                    }

                    e.get_mut().adjacent_triangles[1] = itri;
                }
            }
        }
    }

    for (&(ivtx1, ivtx2), edge) in &edges {
        if edge.adjacent_triangles[1] == usize::MAX {
            return Err(InvariantViolation::UnfinishedTriangle(ivtx1, ivtx2));
        }
    }

    if points.len() + triangles.len() != edges.len() + 2 {
        return Err(InvariantViolation::EulerCharacteristic {
            vertices: points.len(),
            edges: edges.len(),
            faces: triangles.len(),
        });
    }

    Ok(())
}
