use quickhull3d::math::{Point, Real};
use quickhull3d::transformation::{ConvexHull, ConvexHullError};

#[test]
fn three_points() {
    let points = [
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
    ];

    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::InsufficientPoints(3))
    );
    assert_eq!(
        ConvexHull::try_new(&[]).err(),
        Some(ConvexHullError::InsufficientPoints(0))
    );
}

#[test]
fn equal_points() {
    let points = [Point::new(1.0, 2.0, 3.0); 5];

    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::CoincidentExtrema)
    );
}

#[test]
fn collinear_points() {
    let points: Vec<_> = (0..6)
        .map(|i| Point::new(i as Real, 2.0 * i as Real, -(i as Real)))
        .collect();

    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::Collinear)
    );
}

#[test]
fn coplanar_grid() {
    let mut points = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            points.push(Point::new(i as Real, j as Real, 0.0));
        }
    }

    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::Coplanar)
    );
}

#[test]
fn tilted_coplanar_grid() {
    let mut points = Vec::new();
    for i in 0..5 {
        for j in 0..5 {
            let (x, y) = (i as Real * 0.25, j as Real * 0.25);
            points.push(Point::new(x, y, x + y));
        }
    }

    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::Coplanar)
    );
}

#[test]
fn non_finite_coordinates() {
    let mut points = vec![
        Point::new(0.0, 0.0, 0.0),
        Point::new(1.0, 0.0, 0.0),
        Point::new(0.0, 1.0, 0.0),
        Point::new(0.0, 0.0, 1.0),
        Point::new(0.0, Real::NAN, 1.0),
    ];

    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::NonFinitePoint(4))
    );

    points[4] = Point::new(Real::INFINITY, 0.0, 0.0);
    assert_eq!(
        ConvexHull::try_new(&points).err(),
        Some(ConvexHullError::NonFinitePoint(4))
    );
}

#[test]
fn flat_cloud_with_one_point_above() {
    let mut points = Vec::new();
    for i in 0..4 {
        for j in 0..4 {
            points.push(Point::new(i as Real, j as Real, 0.0));
        }
    }
    points.push(Point::new(1.5, 1.5, 1.0));

    let hull = ConvexHull::try_new(&points).unwrap();
    let mut degrees: Vec<_> = hull.faces().map(|f| f.edge_count()).collect();
    degrees.sort_unstable();

    // A square pyramid: the grid points inside of the base square are dropped.
    assert_eq!(hull.vertex_count(), 5);
    assert_eq!(degrees, vec![3, 3, 3, 3, 4]);
    hull.validate().unwrap();
}

#[test]
fn error_messages() {
    assert_eq!(
        ConvexHullError::InsufficientPoints(2).to_string(),
        "At least 4 points are needed to compute a 3D convex hull, 2 were given."
    );
    assert_eq!(
        ConvexHullError::Coplanar.to_string(),
        "The input points are coplanar."
    );
}
