#[cfg(test)]
mod tests {
    use test_case::test_case;

    use nest2d::entities::Container;
    use nest2d::geometry::Transformation;
    use nest2d::geometry::geo_traits::Transformable;
    use nest2d::geometry::primitives::{Point, SPolygon, interiors_overlap};
    use nest2d::nfp::{compute_inner_fit, compute_nfp, contour_contains};

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

    fn centered_square(size: f64) -> SPolygon {
        square(size, -size / 2.0, -size / 2.0)
    }

    fn l_shape() -> SPolygon {
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
    fn nfp_of_two_squares_is_the_inflated_square() {
        let stationary = square(2.0, 0.0, 0.0);
        let orbiting = centered_square(2.0);

        let nfp = compute_nfp(&stationary, &orbiting, EPS);
        assert_eq!(nfp.shapes.len(), 1);
        //sliding a 2x2 square around a 2x2 square traces a 4x4 region
        let outer = SPolygon::new(nfp.shapes[0].outer.clone(), EPS).unwrap();
        assert!((outer.area - 16.0).abs() <= 1e-9);
        assert!((outer.bbox.x_min + 1.0).abs() <= EPS);
        assert!((outer.bbox.x_max - 3.0).abs() <= EPS);
    }

    #[test]
    fn nfp_interior_is_forbidden_boundary_is_not() {
        let stationary = square(2.0, 0.0, 0.0);
        let orbiting = centered_square(2.0);
        let nfp = compute_nfp(&stationary, &orbiting, EPS);

        //dead center: full overlap
        assert!(nfp.forbids(Point(1.0, 1.0), EPS));
        //on the boundary: touching, allowed
        assert!(!nfp.forbids(Point(-1.0, 1.0), EPS));
        //far away: no contact at all
        assert!(!nfp.forbids(Point(10.0, 10.0), EPS));
    }

    #[test]
    fn nfp_boundary_round_trip_produces_touching_placements() {
        let stationary = square(3.0, 1.0, 1.0);
        let orbiting = centered_square(2.0);
        let nfp = compute_nfp(&stationary, &orbiting, EPS);

        for contour in nfp.contours() {
            for &p in contour {
                let placed =
                    orbiting.transform_clone(&Transformation::from_translation((p.0, p.1)));
                assert!(
                    !interiors_overlap(&stationary, &placed, EPS),
                    "boundary placement at {p:?} overlaps"
                );
            }
        }

        //whereas placing it dead center overlaps
        let placed = orbiting.transform_clone(&Transformation::from_translation((2.5, 2.5)));
        assert!(interiors_overlap(&stationary, &placed, EPS));
    }

    #[test]
    fn non_convex_nfp_covers_the_convex_partials() {
        let stationary = l_shape();
        let orbiting = centered_square(0.5);
        let nfp = compute_nfp(&stationary, &orbiting, EPS);

        assert!(!nfp.is_empty());
        //reference points well inside the stationary arms must be forbidden
        assert!(nfp.forbids(Point(1.5, 0.5), EPS));
        assert!(nfp.forbids(Point(0.5, 2.0), EPS));
        //a position fully clear of the L is fine
        assert!(!nfp.forbids(Point(5.0, 5.0), EPS));
    }

    #[test]
    fn inner_fit_of_rectangle_is_the_shrunk_rectangle() {
        let container = Container::rectangle(150.0, 150.0).unwrap();
        let item = centered_square(10.0);

        let ifp = compute_inner_fit(&container, &item, EPS).unwrap();
        assert!(contour_contains(&ifp, Point(5.0, 5.0), EPS));
        assert!(contour_contains(&ifp, Point(145.0, 145.0), EPS));
        assert!(!contour_contains(&ifp, Point(4.0, 5.0), EPS));
        assert!(!contour_contains(&ifp, Point(146.0, 75.0), EPS));
    }

    #[test_case(20.0, 10.0; "twice as large")]
    #[test_case(10.5, 10.0; "slightly too large")]
    fn oversized_item_has_no_inner_fit(item_size: f64, container_size: f64) {
        let container = Container::rectangle(container_size, container_size).unwrap();
        let item = centered_square(item_size);
        assert!(compute_inner_fit(&container, &item, EPS).is_none());
    }

    #[test]
    fn exact_fit_collapses_to_a_single_point() {
        let container = Container::rectangle(10.0, 10.0).unwrap();
        let item = centered_square(10.0);

        let ifp = compute_inner_fit(&container, &item, EPS).unwrap();
        assert_eq!(ifp.len(), 1);
        assert!(ifp[0].distance_to(&Point(5.0, 5.0)) <= EPS);
    }

    #[test]
    fn inner_fit_of_convex_polygonal_container() {
        //right triangle container, small square item
        let container = Container::polygonal(
            vec![Point(0.0, 0.0), Point(20.0, 0.0), Point(0.0, 20.0)],
            EPS,
        )
        .unwrap();
        let item = centered_square(2.0);

        let ifp = compute_inner_fit(&container, &item, EPS).unwrap();
        //near the right-angle corner, offset by the item's half extent
        assert!(contour_contains(&ifp, Point(1.0, 1.0), EPS));
        //too close to the corner would poke out
        assert!(!contour_contains(&ifp, Point(0.5, 0.5), EPS));
        //the hypotenuse pushes the region further in
        assert!(!contour_contains(&ifp, Point(9.5, 9.5), EPS));
    }

    #[test]
    fn rotation_by_full_turn_gives_the_same_nfp_region() {
        let stationary = square(3.0, 1.0, 1.0);
        let orbiting = centered_square(2.0);
        let turned = orbiting.transform_clone(&Transformation::from_rotation(
            2.0 * std::f64::consts::PI,
        ));

        let nfp_0 = compute_nfp(&stationary, &orbiting, EPS);
        let nfp_turn = compute_nfp(&stationary, &turned, EPS);

        //the regions agree: probe a grid of points around the stationary shape
        for ix in -2..=8 {
            for iy in -2..=8 {
                let p = Point(ix as f64 * 0.75, iy as f64 * 0.75);
                assert_eq!(
                    nfp_0.forbids(p, EPS),
                    nfp_turn.forbids(p, EPS),
                    "regions disagree at {p:?}"
                );
            }
        }
    }
}
