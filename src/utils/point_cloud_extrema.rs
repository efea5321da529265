use crate::math::{Point, Real, DEFAULT_EPSILON, DIM};

/// The extremal points of a point cloud along each canonical axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointCloudExtrema {
    /// For each axis, the index of the first point with the smallest coordinate.
    pub min_ids: [usize; DIM],
    /// For each axis, the index of the first point with the largest coordinate.
    pub max_ids: [usize; DIM],
    /// The lower corner of the point cloud's AABB.
    pub mins: Point<Real>,
    /// The upper corner of the point cloud's AABB.
    pub maxs: Point<Real>,
}

impl PointCloudExtrema {
    /// Scans `points` for their extremal coordinates.
    ///
    /// Returns `None` if `points` is empty.
    pub fn from_points(points: &[Point<Real>]) -> Option<Self> {
        let first = points.first()?;
        let mut result = PointCloudExtrema {
            min_ids: [0; DIM],
            max_ids: [0; DIM],
            mins: *first,
            maxs: *first,
        };

        for (i, pt) in points.iter().enumerate().skip(1) {
            for k in 0..DIM {
                if pt[k] < result.mins[k] {
                    result.mins[k] = pt[k];
                    result.min_ids[k] = i;
                }

                if pt[k] > result.maxs[k] {
                    result.maxs[k] = pt[k];
                    result.max_ids[k] = i;
                }
            }
        }

        Some(result)
    }

    /// Among the three axis-extremal pairs, the one whose points are the farthest apart.
    ///
    /// Returns the two point indices and their squared distance. Ties are resolved in
    /// favor of the lowest axis.
    pub fn farthest_pair(&self, points: &[Point<Real>]) -> (usize, usize, Real) {
        let mut best = (self.min_ids[0], self.max_ids[0], 0.0);

        for k in 0..DIM {
            let (i1, i2) = (self.min_ids[k], self.max_ids[k]);
            let dist = na::distance_squared(&points[i1], &points[i2]);

            if dist > best.2 {
                best = (i1, i2, dist);
            }
        }

        best
    }
}

/// The distance tolerance used to classify points against planes during hull construction.
///
/// Scales the machine epsilon by the magnitude of the point cloud's AABB so that plane
/// distance tests remain meaningful regardless of the input's units or its distance from
/// the origin.
pub fn hull_tolerance(extrema: &PointCloudExtrema) -> Real {
    let magnitude: Real = (0..DIM)
        .map(|k| extrema.mins[k].abs().max(extrema.maxs[k].abs()))
        .sum();

    3.0 * magnitude * DEFAULT_EPSILON
}
