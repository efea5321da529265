use super::builder::HullBuilder;
use super::half_edge::{Face, FaceMark, VertexState};
use super::{ConvexHullError, InvariantViolation, VertexKey};
use crate::math::Real;
use crate::utils::hashset::HashSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

impl HullBuilder {
    /// The conflict vertex farthest from the plane of its face, if any is farther than the
    /// tolerance.
    ///
    /// Ties go to the first candidate in face order, then in conflict-list order.
    pub(super) fn find_eye_vertex(&self) -> Option<VertexKey> {
        let mesh = &self.mesh;
        let farthest_conflict = |face: &Face| {
            let mut best = None;
            let mut best_dist = mesh.tolerance;

            for &vertex in &face.conflicts {
                let dist = face.distance(&mesh.vertices[vertex].position);
                if dist > best_dist {
                    best_dist = dist;
                    best = Some((dist, vertex));
                }
            }

            best
        };

        #[cfg(feature = "parallel")]
        let candidates: Vec<Option<(Real, VertexKey)>> = {
            let faces: Vec<&Face> = mesh.faces.values().collect();
            faces.par_iter().map(|f| farthest_conflict(f)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let candidates = mesh.faces.values().map(farthest_conflict);

        candidates
            .into_iter()
            .flatten()
            .fold(None, |best: Option<(Real, VertexKey)>, (dist, vertex)| {
                match best {
                    Some((best_dist, _)) if best_dist >= dist => best,
                    _ => Some((dist, vertex)),
                }
            })
            .map(|(_, vertex)| vertex)
    }

    /// Inserts `eye` into the hull: replaces the faces it can see by a fan of triangles
    /// around it, then merges the new faces that are not strictly convex.
    pub(super) fn add_eye_vertex(&mut self, eye: VertexKey) -> Result<(), ConvexHullError> {
        self.find_horizon(eye)?;
        self.add_new_faces(eye)?;
        let merged = self.merge_new_faces()?;

        log::trace!(
            "Added eye vertex {} ({:?}): {} visible faces, horizon of length {}, {} merges.",
            self.mesh.vertices[eye].id,
            eye,
            self.visible_faces.len(),
            self.horizon.len(),
            merged
        );

        Ok(())
    }

    /// Marks the faces visible from `eye` and collects the edges on the boundary of the
    /// visible region, as a counter-clockwise loop.
    fn find_horizon(&mut self, eye: VertexKey) -> Result<(), ConvexHullError> {
        let eye_pos = self.mesh.vertices[eye].position;
        let tolerance = self.mesh.tolerance;

        self.visible_faces.clear();
        for (key, face) in self.mesh.faces.iter_mut() {
            if face.distance(&eye_pos) > tolerance {
                face.mark = FaceMark::Visible;
                self.visible_faces.push(key);
            } else {
                face.mark = FaceMark::Invisible;
            }
        }

        self.horizon.clear();
        for &face in &self.visible_faces {
            for edge in self.mesh.face_edges(face) {
                let twin = self.mesh.edges[edge].twin;
                let other = self.mesh.edges[twin].face;

                if self.mesh.faces[other].mark == FaceMark::Invisible {
                    self.horizon.push(edge);
                }
            }
        }

        if self.horizon.is_empty() {
            return Err(InvariantViolation::OpenHorizon(eye).into());
        }

        // Chain the horizon edges head to tail.
        let count = self.horizon.len();
        for i in 0..count - 1 {
            let head = self.mesh.edges[self.mesh.edges[self.horizon[i]].twin].tail;
            let j = (i + 1..count)
                .find(|&j| self.mesh.edges[self.horizon[j]].tail == head)
                .ok_or(InvariantViolation::OpenHorizon(eye))?;
            self.horizon.swap(i + 1, j);
        }

        let last = self.horizon[count - 1];
        if self.mesh.edges[self.mesh.edges[last].twin].tail != self.mesh.edges[self.horizon[0]].tail
        {
            return Err(InvariantViolation::OpenHorizon(eye).into());
        }

        let mut seen = HashSet::default();
        self.horizon_vertices.clear();

        for &edge in &self.horizon {
            let tail = self.mesh.edges[edge].tail;
            if !seen.insert(tail) {
                return Err(InvariantViolation::NonManifoldHorizon(eye).into());
            }
            self.horizon_vertices.push(tail);
        }

        Ok(())
    }

    /// Removes the visible faces and fans new triangles from `eye` to the horizon.
    ///
    /// The points of the removed conflict lists are filed into the new faces, or discarded
    /// if they are inside of the expanded hull.
    fn add_new_faces(&mut self, eye: VertexKey) -> Result<(), ConvexHullError> {
        let eye_face = match self.mesh.vertices[eye].state {
            VertexState::Conflict(face) => face,
            _ => return Err(InvariantViolation::MisplacedEye(eye).into()),
        };

        self.mesh.faces[eye_face].conflicts.retain(|v| *v != eye);
        self.mesh.vertices[eye].state = VertexState::Hull;

        /*
         * Collect the half-edges interior to the visible region and the vertices it touches.
         */
        let mut interior_edges = Vec::new();
        let mut touched_vertices = Vec::new();

        for &face in &self.visible_faces {
            for edge in self.mesh.face_edges(face) {
                let half_edge = &self.mesh.edges[edge];
                touched_vertices.push(half_edge.tail);

                let other = self.mesh.edges[half_edge.twin].face;
                if self.mesh.faces[other].mark == FaceMark::Visible {
                    interior_edges.push(edge);
                }
            }
        }

        /*
         * Release the visible region. The horizon half-edges are kept for the new faces.
         */
        for edge in interior_edges {
            let _ = self.mesh.edges.remove(edge);
        }

        self.orphans.clear();
        for &face in &self.visible_faces {
            if let Some(face) = self.mesh.faces.remove(face) {
                for vertex in face.conflicts {
                    self.mesh.vertices[vertex].state = VertexState::Orphan;
                    self.orphans.push(vertex);
                }
            }
        }

        let horizon_vertices: HashSet<_> = self.horizon_vertices.iter().copied().collect();
        for vertex in touched_vertices {
            if !horizon_vertices.contains(&vertex) {
                let _ = self.mesh.vertices.remove(vertex);
            }
        }

        /*
         * Fan new triangles around the eye.
         */
        let count = self.horizon.len();
        self.pending.clear();
        self.new_faces.clear();

        for i in 0..count {
            let key = (
                self.horizon_vertices[i],
                self.horizon_vertices[(i + 1) % count],
            );
            let _ = self.pending.insert(key, self.horizon[i]);
        }

        for i in 0..count {
            let triangle = [
                eye,
                self.horizon_vertices[i],
                self.horizon_vertices[(i + 1) % count],
            ];
            let face = self.mesh.add_triangle(triangle, &mut self.pending)?;
            self.new_faces.push(face);
        }

        if let Some(edge) = self.pending.values().next() {
            return Err(InvariantViolation::UnmatchedHalfEdge(*edge).into());
        }

        /*
         * Redistribute the orphans.
         */
        let mesh = &self.mesh;
        let new_faces = &self.new_faces;
        let conflict_face = |vertex: &VertexKey| {
            mesh.best_face(new_faces, &mesh.vertices[*vertex].position)
        };

        #[cfg(feature = "parallel")]
        let assignments: Vec<_> = self.orphans.par_iter().map(conflict_face).collect();
        #[cfg(not(feature = "parallel"))]
        let assignments: Vec<_> = self.orphans.iter().map(conflict_face).collect();

        for (vertex, assignment) in self.orphans.drain(..).zip(assignments) {
            match assignment {
                Some(face) => self.mesh.push_conflict(vertex, face),
                None => {
                    let _ = self.mesh.vertices.remove(vertex);
                    self.stats.discarded_points += 1;
                }
            }
        }

        Ok(())
    }
}
