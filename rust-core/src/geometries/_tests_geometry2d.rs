#[cfg(test)]
mod _tests_geometry2d {
    use super::super::geometry2d::*;
    use nalgebra::Vector2;

    // Helper function for approximate float comparison
    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    fn assert_vector_approx_eq(v1: Vector2<f64>, v2: Vector2<f64>, epsilon: f64) {
        if !approx_eq(v1.x, v2.x, epsilon) || !approx_eq(v1.y, v2.y, epsilon) {
            panic!("Vectors not approximately equal: {:?} != {:?}", v1, v2);
        }
    }

    #[test]
    fn test_circle_contains_point() {
        let circle = Circle::new(Vector2::new(0.0, 0.0), 5.0);

        assert!(circle.contains_point(Vector2::new(0.0, 0.0)), "Center should be inside");
        assert!(circle.contains_point(Vector2::new(3.0, 4.0)), "Point (3,4) lies on the boundary and counts as fiber");
        assert!(circle.contains_point(Vector2::new(5.0, 0.0)), "Point on boundary should be inside");

        assert!(!circle.contains_point(Vector2::new(5.1, 0.0)), "Point just outside should not be inside");
        assert!(!circle.contains_point(Vector2::new(4.0, 4.0)), "Point (4,4) should be outside (distance≈5.66)");
    }

    #[test]
    fn test_circle_boundary_tie_with_half_offsets() {
        let exact = Circle::new(Vector2::zeros(), 2.5);
        assert!(exact.contains_point(Vector2::new(1.5, 2.0)), "Distance exactly 2.5 is inside");
    }

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new(Vector2::new(2.0, 3.0), 4.0);
        let bbox = circle.bounding_box();

        assert_vector_approx_eq(bbox.min, Vector2::new(-2.0, -1.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(6.0, 7.0), 1e-10);
    }

    #[test]
    fn test_fiber_layout_union_membership() {
        let layout = FiberLayout::uniform(
            vec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)],
            2.0,
        );

        assert_eq!(layout.len(), 2);
        assert!(layout.contains_point(Vector2::new(1.0, 1.0)), "Inside first fiber");
        assert!(layout.contains_point(Vector2::new(9.0, -1.0)), "Inside second fiber");
        assert!(!layout.contains_point(Vector2::new(5.0, 0.0)), "Between fibers is matrix");
    }

    #[test]
    fn test_fiber_layout_bounding_box_and_center() {
        let mut layout = FiberLayout::new(vec![Circle::new(Vector2::new(1.0, 1.0), 1.0)]);
        layout.add_fiber(Circle::new(Vector2::new(5.0, 3.0), 2.0));

        let bbox = layout.bounding_box();
        assert_vector_approx_eq(bbox.min, Vector2::new(0.0, 0.0), 1e-10);
        assert_vector_approx_eq(bbox.max, Vector2::new(7.0, 5.0), 1e-10);
        assert_vector_approx_eq(layout.center(), Vector2::new(3.0, 2.0), 1e-10);
    }

    #[test]
    fn test_empty_layout() {
        let layout = FiberLayout::default();
        assert!(layout.is_empty());
        assert!(!layout.contains_point(Vector2::zeros()), "Empty layout contains nothing");
        assert_vector_approx_eq(layout.center(), Vector2::zeros(), 1e-10);
    }
}
