use quickhull3d::math::{Point, Real};
use quickhull3d::transformation::{check_convex_hull, ConvexHull};

fn box_cloud(rng: &mut oorandom::Rand32, count: usize, extent: Real) -> Vec<Point<Real>> {
    (0..count)
        .map(|_| {
            Point::new(
                (rng.rand_float() * 2.0 - 1.0) * extent,
                (rng.rand_float() * 2.0 - 1.0) * extent,
                (rng.rand_float() * 2.0 - 1.0) * extent,
            )
        })
        .collect()
}

fn ball_cloud(rng: &mut oorandom::Rand32, count: usize) -> Vec<Point<Real>> {
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let pt = box_cloud(rng, 1, 1.0)[0];
        if pt.coords.norm_squared() <= 1.0 {
            points.push(pt);
        }
    }
    points
}

fn assert_convex_hull(points: &[Point<Real>], hull: &ConvexHull) {
    hull.validate().unwrap();
    assert_eq!(
        hull.vertex_count() + hull.face_count(),
        hull.edge_count() + 2
    );

    // Convexity: every face centroid is below every other face.
    for face in hull.faces() {
        for other in hull.faces() {
            if face.key() != other.key() {
                assert!(other.plane().signed_distance(&face.center()) <= hull.tolerance());
            }
        }
    }

    // Containment: no input point is above a face.
    for pt in points {
        for face in hull.faces() {
            assert!(face.plane().signed_distance(pt) <= hull.tolerance());
        }
    }

    // Every hull vertex is the input point it claims to be.
    for (id, pt) in hull.vertices() {
        assert_eq!(points[id as usize], pt);
    }

    let (vertices, triangles) = hull.to_trimesh();
    check_convex_hull(&vertices, &triangles).unwrap();
}

#[test]
fn random_box_clouds() {
    let mut rng = oorandom::Rand32::new(42);

    for count in [4, 5, 10, 50, 200, 1000] {
        let points = box_cloud(&mut rng, count, 1.0);
        let hull = ConvexHull::try_new(&points).unwrap();
        assert_convex_hull(&points, &hull);
    }
}

#[test]
fn random_ball_clouds() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..10 {
        let points = ball_cloud(&mut rng, 300);
        let hull = ConvexHull::try_new(&points).unwrap();
        assert_convex_hull(&points, &hull);
        assert!(hull.stats().discarded_points > 0);
    }
}

#[test]
fn large_scale_cloud() {
    let mut rng = oorandom::Rand32::new(7);
    let points = box_cloud(&mut rng, 500, 1.0e4);

    let hull = ConvexHull::try_new(&points).unwrap();
    assert_convex_hull(&points, &hull);
}

#[test]
fn lattice_with_many_coplanar_points() {
    let mut points = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            for k in 0..5 {
                points.push(Point::new(i as Real, j as Real, k as Real));
            }
        }
    }

    let hull = ConvexHull::try_new(&points).unwrap();

    assert_convex_hull(&points, &hull);
    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.face_count(), 6);
}

#[test]
fn perturbed_lattices() {
    let mut rng = oorandom::Rand32::new(2024);
    let jitter = Real::EPSILON * 8.0;

    for _ in 0..8 {
        let mut points = Vec::new();
        for i in 0..6 {
            for j in 0..6 {
                for k in 0..6 {
                    let noise = box_cloud(&mut rng, 1, jitter)[0];
                    points.push(Point::new(i as Real, j as Real, k as Real) + noise.coords);
                }
            }
        }

        let hull = ConvexHull::try_new(&points).unwrap();
        assert_convex_hull(&points, &hull);
        assert!(hull.stats().merged_faces > 0);
    }
}

#[test]
fn sphere_clouds() {
    let mut rng = oorandom::Rand32::new(45);

    for _ in 0..2 {
        let points: Vec<_> = ball_cloud(&mut rng, 1000)
            .into_iter()
            .filter_map(|pt| {
                let norm = pt.coords.norm();
                (norm > 1.0e-3).then(|| Point::from(pt.coords / norm))
            })
            .collect();

        let hull = ConvexHull::try_new(&points).unwrap();
        assert_convex_hull(&points, &hull);
    }
}
