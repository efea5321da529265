use quickhull3d::math::{Point, Real, Vector};
use quickhull3d::transformation::{check_convex_hull, try_convex_hull, ConvexHull};

fn points() -> Vec<Point<Real>> {
    vec![
        Point::new(0.77705324, 0.05374551, 0.9822232),
        Point::new(0.35096353, 0.9873069, 0.28922123),
        Point::new(0.09537989, 0.44411153, 0.05486667),
        Point::new(0.108208835, 0.72445065, 0.6669141),
        Point::new(0.7661844, 0.86163324, 0.80507314),
        Point::new(0.5185994, 0.66594696, 0.072779536),
        Point::new(0.768981, 0.23657233, 0.44346774),
        Point::new(0.058607936, 0.09037298, 0.017009139),
        Point::new(0.8818559, 0.3804205, 0.25173646),
        Point::new(0.9571466, 0.17664945, 0.6029223),
    ]
}

#[test]
fn trimesh_export_is_closed() {
    let (vertices, triangles) = try_convex_hull(&points()).unwrap();

    assert!(vertices.len() >= 4);
    assert_eq!(triangles.len(), 2 * vertices.len() - 4);
    check_convex_hull(&vertices, &triangles).unwrap();
}

#[test]
fn trimesh_triangles_face_outward() {
    let input = points();
    let hull = ConvexHull::try_new(&input).unwrap();
    let (vertices, triangles) = hull.to_trimesh();

    let center =
        vertices.iter().map(|pt| pt.coords).sum::<Vector<Real>>() / vertices.len() as Real;

    for tri in &triangles {
        let [a, b, c] = tri.map(|i| vertices[i as usize]);
        let normal = (b - a).cross(&(c - a));
        assert!(normal.dot(&(a.coords - center)) > 0.0);
    }
}

#[test]
fn polygon_export_matches_faces() {
    let input = points();
    let hull = ConvexHull::try_new(&input).unwrap();
    let (vertices, polygons) = hull.to_polygons();

    assert_eq!(vertices.len(), hull.vertex_count());
    assert_eq!(polygons.len(), hull.face_count());

    for (polygon, face) in polygons.iter().zip(hull.faces()) {
        assert_eq!(polygon.len(), face.edge_count());

        for (id, pt) in polygon.iter().zip(face.vertices()) {
            assert_eq!(vertices[*id as usize], pt);
        }
    }

    // Every hull vertex is an input point.
    for pt in &vertices {
        assert!(input.contains(pt));
    }
}

#[test]
fn check_detects_missing_triangle() {
    let (vertices, mut triangles) = try_convex_hull(&points()).unwrap();
    let _ = triangles.pop();

    assert!(check_convex_hull(&vertices, &triangles).is_err());
}
