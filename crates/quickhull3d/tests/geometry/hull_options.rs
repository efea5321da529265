use quickhull3d::math::{Point, Real};
use quickhull3d::transformation::{
    CapacityPolicy, ConvexHull, ConvexHullError, HullCapacity, QuickHullOptions,
    ValidationPolicy,
};

fn sphere_cloud(seed: u64, count: usize) -> Vec<Point<Real>> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| {
            let theta = rng.rand_float() * std::f32::consts::TAU;
            let z = rng.rand_float() * 2.0 - 1.0;
            let r = (1.0 - z * z).sqrt();
            Point::new(r * theta.cos(), r * theta.sin(), z)
        })
        .collect()
}

#[test]
fn iteration_cap_is_honored() {
    let points = sphere_cloud(42, 100);
    let options = QuickHullOptions::default().with_max_iterations(5);

    assert_eq!(
        ConvexHull::try_new_with_options(&points, &options).err(),
        Some(ConvexHullError::IterationLimit(5))
    );

    let hull = ConvexHull::try_new(&points).unwrap();
    assert!(hull.iterations() > 5);

    let options = QuickHullOptions::default().with_max_iterations(hull.iterations());
    let capped = ConvexHull::try_new_with_options(&points, &options).unwrap();
    assert_eq!(capped.face_count(), hull.face_count());
}

#[test]
fn fixed_capacity_is_sufficient() {
    let points = sphere_cloud(7, 500);
    let capacity = HullCapacity::from_point_count(points.len());
    let options = QuickHullOptions::default().with_capacity_policy(CapacityPolicy::Fixed);

    let hull = ConvexHull::try_new_with_options(&points, &options).unwrap();
    let stats = hull.stats();

    assert!(stats.peak_vertices <= capacity.vertices);
    assert!(stats.peak_half_edges <= capacity.half_edges);
    assert!(stats.peak_faces <= capacity.faces);
    assert!(hull.is_valid());
}

#[test]
fn tolerance_override() {
    let mut points = Vec::new();
    for x in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for z in [0.0, 1.0] {
                points.push(Point::new(x, y, z));
            }
        }
    }
    points.push(Point::new(0.5, 0.5, 1.05));

    let hull = ConvexHull::try_new(&points).unwrap();
    assert_eq!(hull.vertex_count(), 9);
    assert_eq!(hull.face_count(), 9);

    let options = QuickHullOptions::default().with_tolerance(0.1);
    let coarse = ConvexHull::try_new_with_options(&points, &options).unwrap();

    assert_relative_eq!(coarse.tolerance(), 0.1);
    assert!(coarse.is_valid());
    assert!(coarse.face_count() < hull.face_count());
    assert!(points.iter().all(|pt| coarse.contains_point(pt)));
}

#[test]
fn validation_policies_agree() {
    let points = sphere_cloud(3, 200);
    let policies = [
        ValidationPolicy::Never,
        ValidationPolicy::Final,
        ValidationPolicy::EveryIteration,
    ];

    let hulls: Vec<_> = policies
        .iter()
        .map(|policy| {
            let options = QuickHullOptions::default().with_validation(*policy);
            ConvexHull::try_new_with_options(&points, &options).unwrap()
        })
        .collect();

    for hull in &hulls {
        assert!(hull.is_valid());
        assert_eq!(hull.face_count(), hulls[0].face_count());
        assert_eq!(hull.stats(), hulls[0].stats());
    }
}

#[test]
fn construction_is_deterministic() {
    let points = sphere_cloud(11, 300);
    let a = ConvexHull::try_new(&points).unwrap();
    let b = ConvexHull::try_new(&points).unwrap();

    assert_eq!(a.to_polygons(), b.to_polygons());
}
