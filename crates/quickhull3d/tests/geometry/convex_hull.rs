use quickhull3d::math::{Point, Real};
use quickhull3d::transformation::ConvexHull;

fn cube(half_extent: Real) -> Vec<Point<Real>> {
    let mut points = Vec::new();
    for x in [-half_extent, half_extent] {
        for y in [-half_extent, half_extent] {
            for z in [-half_extent, half_extent] {
                points.push(Point::new(x, y, z));
            }
        }
    }
    points
}

#[test]
fn unit_cube() {
    let hull = ConvexHull::try_new(&cube(0.5)).unwrap();

    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.edge_count(), 12);
    assert_eq!(hull.face_count(), 6);
    assert!(hull.faces().all(|f| f.edge_count() == 4));
    hull.validate().unwrap();
}

#[test]
fn cube_with_interior_and_duplicate_points() {
    let mut points = cube(2.0);
    points.extend(cube(1.0));
    points.extend(cube(2.0));
    points.push(Point::origin());
    points.push(Point::new(2.0, 0.0, 0.0));

    let hull = ConvexHull::try_new(&points).unwrap();

    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.face_count(), 6);
    assert_eq!(hull.stats().iterations + 4, 8);
    assert!(hull.vertices().all(|(id, _)| id < 8));
}

#[test]
fn tetrahedron_with_centroid() {
    let points = [
        Point::new(1.0, 1.0, 1.0),
        Point::new(1.0, -1.0, -1.0),
        Point::new(-1.0, 1.0, -1.0),
        Point::new(-1.0, -1.0, 1.0),
        Point::origin(),
    ];

    let hull = ConvexHull::try_new(&points).unwrap();

    assert_eq!(hull.vertex_count(), 4);
    assert_eq!(hull.edge_count(), 6);
    assert_eq!(hull.face_count(), 4);
    assert_eq!(hull.iterations(), 0);
    assert_eq!(hull.stats().discarded_points, 1);
    assert!(hull.vertices().all(|(id, _)| id != 4));

    for face in hull.faces() {
        assert_eq!(face.edge_count(), 3);
        assert!(face.plane().signed_distance(&Point::origin()) < 0.0);
    }
}

#[test]
fn square_pyramid_keeps_its_base_quad() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(1.0, 1.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.5, 0.5, 1.0),
        Point::new(0.5, 0.5, 0.2),
    ];

    let hull = ConvexHull::try_new(&points).unwrap();
    let mut degrees: Vec<_> = hull.faces().map(|f| f.edge_count()).collect();
    degrees.sort_unstable();

    assert_eq!(degrees, vec![3, 3, 3, 3, 4]);
    assert_eq!(hull.vertex_count(), 5);

    let base = hull.faces().find(|f| f.edge_count() == 4).unwrap();
    assert_relative_eq!(base.normal().z, -1.0, epsilon = 1.0e-5);
    assert_relative_eq!(base.center(), Point::new(0.5, 0.5, 0.0), epsilon = 1.0e-5);
}

#[test]
fn octahedron() {
    let points = [
        Point::new(1.0, 0.0, 0.0),
        Point::new(-1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, -1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, 0.0, -1.0),
    ];

    let hull = ConvexHull::try_new(&points).unwrap();

    assert_eq!(hull.vertex_count(), 6);
    assert_eq!(hull.edge_count(), 12);
    assert_eq!(hull.face_count(), 8);

    for face in hull.faces() {
        let normal = face.normal();
        let expected = 1.0 / (3.0 as Real).sqrt();
        assert_relative_eq!(normal.x.abs(), expected, epsilon = 1.0e-5);
        assert_relative_eq!(normal.y.abs(), expected, epsilon = 1.0e-5);
        assert_relative_eq!(normal.z.abs(), expected, epsilon = 1.0e-5);
    }
}

#[test]
fn face_lookup_by_key() {
    let hull = ConvexHull::try_new(&cube(1.0)).unwrap();
    let keys: Vec<_> = hull.faces().map(|f| f.key()).collect();

    for key in keys {
        let face = hull.face(key).unwrap();
        assert_eq!(face.key(), key);
        assert_eq!(face.vertices().count(), 4);
    }
}

#[test]
fn hull_far_from_origin() {
    let offset = Point::new(1000.0, -2000.0, 500.0).coords;
    let points: Vec<_> = cube(1.0).into_iter().map(|pt| pt + offset).collect();

    let hull = ConvexHull::try_new(&points).unwrap();

    assert_eq!(hull.vertex_count(), 8);
    assert_eq!(hull.face_count(), 6);
    assert!(hull.tolerance() > ConvexHull::try_new(&cube(1.0)).unwrap().tolerance());
}
