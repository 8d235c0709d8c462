#[cfg(test)]
mod tests {
    use test_case::test_case;

    use nest2d::geometry::Transformation;
    use nest2d::geometry::convex_hull::convex_hull_from_points;
    use nest2d::geometry::decomposition::{decompose_convex, is_convex};
    use nest2d::geometry::geo_traits::{Shape, Transformable};
    use nest2d::geometry::primitives::{Point, SPolygon, interiors_overlap};

    const EPS: f64 = 1e-6;

    fn square(size: f64, x: f64, y: f64) -> SPolygon {
        SPolygon::new(
            vec![
                Point(x, y),
                Point(x + size, y),
                Point(x + size, y + size),
                Point(x, y + size),
            ],
            EPS,
        )
        .unwrap()
    }

    fn l_shape() -> SPolygon {
        //unit-thick L: 3 wide, 3 tall
        SPolygon::new(
            vec![
                Point(0.0, 0.0),
                Point(3.0, 0.0),
                Point(3.0, 1.0),
                Point(1.0, 1.0),
                Point(1.0, 3.0),
                Point(0.0, 3.0),
            ],
            EPS,
        )
        .unwrap()
    }

    #[test]
    fn clockwise_input_is_normalized_to_counterclockwise() {
        let ccw = square(2.0, 0.0, 0.0);
        let cw = SPolygon::new(
            ccw.vertices.iter().rev().copied().collect(),
            EPS,
        )
        .unwrap();

        assert!(cw.area > 0.0);
        assert!((cw.area - ccw.area).abs() <= EPS);
        assert!(SPolygon::signed_area(&cw.vertices) > 0.0);
    }

    #[test]
    fn closing_duplicate_vertex_is_stripped() {
        let poly = SPolygon::new(
            vec![
                Point(0.0, 0.0),
                Point(4.0, 0.0),
                Point(4.0, 4.0),
                Point(0.0, 4.0),
                Point(0.0, 0.0),
            ],
            EPS,
        )
        .unwrap();
        assert_eq!(poly.n_vertices(), 4);
        assert!((poly.area - 16.0).abs() <= EPS);
    }

    #[test]
    fn too_few_vertices_are_rejected() {
        assert!(SPolygon::new(vec![Point(0.0, 0.0), Point(1.0, 0.0)], EPS).is_err());
    }

    #[test]
    fn near_zero_area_is_rejected() {
        //all vertices collinear
        let result = SPolygon::new(
            vec![Point(0.0, 0.0), Point(1.0, 0.0), Point(2.0, 0.0)],
            EPS,
        );
        assert!(result.is_err());
    }

    #[test]
    fn self_intersecting_boundary_is_rejected() {
        //bowtie
        let result = SPolygon::new(
            vec![
                Point(0.0, 0.0),
                Point(2.0, 2.0),
                Point(2.0, 0.0),
                Point(0.0, 2.0),
            ],
            EPS,
        );
        assert!(result.is_err());
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let sq = square(4.0, 1.0, 2.0);
        let c = sq.centroid();
        assert!((c.0 - 3.0).abs() <= EPS);
        assert!((c.1 - 4.0).abs() <= EPS);
    }

    #[test_case(Point(1.0, 1.0), true; "interior")]
    #[test_case(Point(0.0, 1.0), true; "on an edge")]
    #[test_case(Point(0.0, 0.0), true; "on a vertex")]
    #[test_case(Point(-0.5, 1.0), false; "outside")]
    #[test_case(Point(2.0 + 1e-8, 1.0), true; "within eps outside an edge")]
    fn point_containment_is_boundary_inclusive(point: Point, expected: bool) {
        let sq = square(2.0, 0.0, 0.0);
        assert_eq!(sq.contains_point(&point, EPS), expected);
    }

    #[test]
    fn polygon_containment() {
        let outer = square(10.0, 0.0, 0.0);
        let inner = square(2.0, 4.0, 4.0);
        let touching = square(2.0, 0.0, 0.0);
        let straddling = square(4.0, 8.0, 8.0);

        assert!(outer.contains_polygon(&inner, EPS));
        assert!(outer.contains_polygon(&touching, EPS));
        assert!(!outer.contains_polygon(&straddling, EPS));
        assert!(!inner.contains_polygon(&outer, EPS));
    }

    #[test]
    fn overlapping_interiors_are_detected() {
        let a = square(2.0, 0.0, 0.0);
        let b = square(2.0, 1.0, 1.0);
        assert!(interiors_overlap(&a, &b, EPS));
    }

    #[test]
    fn touching_edges_do_not_count_as_overlap() {
        let a = square(2.0, 0.0, 0.0);
        let b = square(2.0, 2.0, 0.0);
        let corner = square(2.0, 2.0, 2.0);
        assert!(!interiors_overlap(&a, &b, EPS));
        assert!(!interiors_overlap(&a, &corner, EPS));
    }

    #[test]
    fn coincident_polygons_overlap() {
        let a = square(2.0, 0.0, 0.0);
        let b = square(2.0, 0.0, 0.0);
        assert!(interiors_overlap(&a, &b, EPS));
    }

    #[test]
    fn enclosed_polygon_overlaps() {
        let outer = square(10.0, 0.0, 0.0);
        let inner = square(2.0, 4.0, 4.0);
        assert!(interiors_overlap(&outer, &inner, EPS));
    }

    #[test]
    fn rigid_transforms_preserve_area() {
        let poly = l_shape();
        let area = poly.area;

        let moved = poly.transform_clone(&Transformation::from_translation((12.5, -3.0)));
        assert!((moved.area - area).abs() <= EPS);

        let rotated = poly.transform_clone(&Transformation::from_rotation(1.2345));
        assert!((rotated.area - area).abs() <= EPS);
        //the bounding box is regenerated
        assert!(rotated.bbox != poly.bbox);
    }

    #[test]
    fn interior_point_lies_strictly_inside() {
        for poly in [square(2.0, 5.0, 5.0), l_shape()] {
            let p = poly.interior_point();
            assert!(poly.strictly_contains_point(&p, EPS), "{p:?} not inside");
        }
    }

    #[test]
    fn convex_hull_drops_interior_points() {
        let points = vec![
            Point(0.0, 0.0),
            Point(4.0, 0.0),
            Point(4.0, 4.0),
            Point(0.0, 4.0),
            Point(2.0, 2.0),
            Point(1.0, 2.0),
        ];
        let hull = convex_hull_from_points(points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&Point(2.0, 2.0)));
    }

    #[test]
    fn convexity_test() {
        assert!(is_convex(&square(3.0, 0.0, 0.0).vertices, EPS));
        assert!(!is_convex(&l_shape().vertices, EPS));
    }

    #[test]
    fn decomposition_of_convex_polygon_is_identity() {
        let sq = square(3.0, 0.0, 0.0);
        let parts = decompose_convex(&sq, EPS);
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0], sq.vertices);
    }

    #[test]
    fn decomposition_preserves_total_area() {
        let poly = l_shape();
        let parts = decompose_convex(&poly, EPS);
        assert!(parts.len() >= 2);

        let total: f64 = parts
            .iter()
            .map(|part| SPolygon::signed_area(part).abs())
            .sum();
        assert!((total - poly.area).abs() <= 1e-9);

        //every part is convex
        for part in &parts {
            assert!(is_convex(part, EPS) || part.len() == 3);
        }
    }
}
