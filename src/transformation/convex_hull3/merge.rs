use super::builder::HullBuilder;
use super::half_edge::{HalfEdge, HalfEdgeMesh, VertexState};
use super::{ConvexHullError, FaceKey, HalfEdgeKey, InvariantViolation};
use smallvec::SmallVec;

impl HullBuilder {
    /// Merges each face created by the last expansion step with its neighbors until all its
    /// edges are strictly convex.
    ///
    /// Returns the number of merges performed.
    pub(super) fn merge_new_faces(&mut self) -> Result<usize, ConvexHullError> {
        let mut merged = 0;

        for &face in &self.new_faces {
            // A new face absorbed by an earlier one is gone.
            while self.mesh.faces.contains_key(face) && self.mesh.merge_face(face)? {
                merged += 1;
            }
        }

        self.stats.merged_faces += merged;
        Ok(merged)
    }
}

impl HalfEdgeMesh {
    /// Absorbs the first neighbor of `face` across an edge that is not strictly convex.
    ///
    /// An edge is strictly convex if the centroid of each adjacent face lies farther than the
    /// tolerance below the plane of the other. Returns `false` if every edge of `face` is
    /// strictly convex.
    pub fn merge_face(&mut self, face: FaceKey) -> Result<bool, ConvexHullError> {
        let tolerance = self.tolerance;
        let mut non_convex = None;

        for edge in self.face_edges(face) {
            let other = self.edges[self.edges[edge].twin].face;
            if other == face {
                continue;
            }

            let (right, left) = (&self.faces[face], &self.faces[other]);
            let d1 = right.distance(&left.center);
            let d2 = left.distance(&right.center);
            let convex = d1 < -tolerance && d2 < -tolerance;

            if !convex {
                non_convex = Some(edge);
                break;
            }
        }

        match non_convex {
            Some(edge) => {
                self.absorb_neighbor(edge)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Removes `edge` and its twin, absorbing the face on the other side into the face of
    /// `edge`.
    fn absorb_neighbor(&mut self, edge: HalfEdgeKey) -> Result<(), ConvexHullError> {
        let HalfEdge {
            face: right,
            twin,
            next,
            prev,
            ..
        } = self.edges[edge];
        let HalfEdge {
            face: left,
            next: twin_next,
            prev: twin_prev,
            ..
        } = self.edges[twin];

        let conflicts = core::mem::take(&mut self.faces[left].conflicts);
        for &vertex in &conflicts {
            self.vertices[vertex].state = VertexState::Conflict(right);
        }
        self.faces[right].conflicts.extend(conflicts);

        let left_edges: SmallVec<[HalfEdgeKey; 8]> = self.face_edges(left).collect();
        for e in left_edges {
            self.edges[e].face = right;
        }

        self.edges[prev].next = twin_next;
        self.edges[next].prev = twin_prev;
        self.edges[twin_prev].next = next;
        self.edges[twin_next].prev = prev;
        self.faces[right].edge = prev;

        let _ = self.edges.remove(edge);
        let _ = self.edges.remove(twin);
        let _ = self.faces.remove(left);

        self.repair_face(right)?;
        self.recompute_face_plane(right)
    }

    /// Restores a valid topology around `face` after it absorbed a neighbor.
    fn repair_face(&mut self, face: FaceKey) -> Result<(), ConvexHullError> {
        'repair: loop {
            let edges: SmallVec<[HalfEdgeKey; 8]> = self.face_edges(face).collect();

            // An edge followed by its own twin leads to a dangling vertex.
            for &edge in &edges {
                if self.edges[edge].next == self.edges[edge].twin {
                    self.remove_antenna(face, edge)?;
                    continue 'repair;
                }
            }

            // Two consecutive edges shared with the same face meet at a vertex touched by no
            // other face.
            for &edge in &edges {
                let next = self.edges[edge].next;
                let other = self.edges[self.edges[edge].twin].face;

                if other != face && other == self.edges[self.edges[next].twin].face {
                    if self.face_degree(face) == 3 || self.face_degree(other) == 3 {
                        self.absorb_neighbor(edge)?;
                    } else {
                        self.join_edges(edge)?;
                    }
                    continue 'repair;
                }
            }

            return Ok(());
        }
    }

    fn remove_antenna(&mut self, face: FaceKey, edge: HalfEdgeKey) -> Result<(), ConvexHullError> {
        let HalfEdge { prev, twin, .. } = self.edges[edge];
        let HalfEdge {
            next: after,
            tail: dangling,
            ..
        } = self.edges[twin];

        if prev == twin || after == edge {
            return Err(InvariantViolation::DegenerateFace(face).into());
        }

        self.edges[prev].next = after;
        self.edges[after].prev = prev;
        self.faces[face].edge = prev;

        let _ = self.edges.remove(edge);
        let _ = self.edges.remove(twin);
        let _ = self.vertices.remove(dangling);
        Ok(())
    }

    /// Replaces `edge` and its successor by a single edge, removing the vertex between them.
    ///
    /// Both edges must be shared with the same neighbor face.
    fn join_edges(&mut self, edge: HalfEdgeKey) -> Result<(), ConvexHullError> {
        let HalfEdge {
            face,
            next,
            twin: edge_twin,
            ..
        } = self.edges[edge];
        let HalfEdge {
            next: after,
            twin: next_twin,
            tail: vertex,
            ..
        } = self.edges[next];
        let HalfEdge {
            face: other,
            next: edge_twin_next,
            ..
        } = self.edges[edge_twin];

        if self.edges[next_twin].next != edge_twin {
            return Err(InvariantViolation::NonManifoldVertex(vertex).into());
        }

        self.edges[edge].next = after;
        self.edges[after].prev = edge;
        self.edges[next_twin].next = edge_twin_next;
        self.edges[edge_twin_next].prev = next_twin;
        self.edges[edge].twin = next_twin;
        self.edges[next_twin].twin = edge;

        if self.faces[face].edge == next {
            self.faces[face].edge = edge;
        }
        if self.faces[other].edge == edge_twin {
            self.faces[other].edge = next_twin;
        }

        let _ = self.edges.remove(next);
        let _ = self.edges.remove(edge_twin);
        let _ = self.vertices.remove(vertex);

        self.recompute_face_plane(other)
    }

    /// Merges faces across the whole mesh until every edge is strictly convex.
    #[cfg(test)]
    pub fn merge_all_faces(&mut self) -> Result<usize, ConvexHullError> {
        let faces: Vec<_> = self.faces.keys().collect();
        let mut merged = 0;

        for face in faces {
            while self.faces.contains_key(face) && self.merge_face(face)? {
                merged += 1;
            }
        }

        Ok(merged)
    }
}
