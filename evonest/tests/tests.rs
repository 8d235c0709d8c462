#[cfg(test)]
mod tests {
    use test_case::test_case;

    use evonest::config::EvoConfig;
    use evonest::fitness::Fitness;
    use evonest::optimizer::EvoNester;
    use nest2d::entities::{Container, Instance, Item};
    use nest2d::geometry::geo_enums::RotationRange;
    use nest2d::geometry::primitives::Point;
    use nest2d::nester::Nester;
    use nest2d::util::{NestConfig, assertions};

    //the canonical two-shape sample: 23 of shape a and 15 of shape b packed
    //into a 150x150 box
    fn shape_a() -> Vec<Point> {
        vec![
            Point(-5.0, 8.954050),
            Point(5.0, 8.954050),
            Point(5.0, -0.045949),
            Point(4.972609, -0.568550),
            Point(3.5, -8.954050),
            Point(-3.5, -8.954050),
            Point(-4.972609, -0.568550),
            Point(-5.0, -0.045949),
            Point(-5.0, 8.954050),
        ]
    }

    fn shape_b() -> Vec<Point> {
        vec![
            Point(-11.75, 13.0579),
            Point(-9.80786, 15.0),
            Point(4.392139, 24.0),
            Point(11.75, 24.0),
            Point(11.75, -24.0),
            Point(4.392139, -24.0),
            Point(-9.80786, -15.0),
            Point(-11.75, -13.0579),
            Point(-11.75, 13.0579),
        ]
    }

    fn quad(dx: f64, dy: f64) -> Vec<Point> {
        vec![
            Point(dx, dy),
            Point(dx + 10.0, dy),
            Point(dx + 10.0, dy + 9.0),
            Point(dx + 1.0, dy + 10.0),
        ]
    }

    fn canonical_instance(config: &NestConfig) -> Instance {
        let mut items = Vec::new();
        for _ in 0..23 {
            let id = items.len();
            items.push(Item::with_default_rotations(id, shape_a(), config).unwrap());
        }
        for _ in 0..15 {
            let id = items.len();
            items.push(Item::with_default_rotations(id, shape_b(), config).unwrap());
        }
        let container = Container::rectangle(150.0, 150.0).unwrap();
        Instance::new(items, container).unwrap()
    }

    fn identity_order(instance: &Instance) -> Vec<usize> {
        (0..instance.items.len()).collect()
    }

    #[test]
    fn two_quads_fit_one_container_bottom_left() {
        let config = NestConfig::default();
        let items = vec![
            Item::new(0, quad(0.0, 0.0), RotationRange::None, &config).unwrap(),
            Item::new(1, quad(30.0, 40.0), RotationRange::None, &config).unwrap(),
        ];
        let container = Container::rectangle(150.0, 150.0).unwrap();
        let instance = Instance::new(items, container).unwrap();

        let nester = Nester::new(instance.clone(), config.clone());
        let pack_group = nester.pack(&identity_order(&instance), None);

        assert!(pack_group.is_complete());
        assert_eq!(pack_group.n_containers(), 1);
        assert!(assertions::pack_group_is_valid(
            &pack_group,
            &instance,
            config.eps
        ));

        //bottom-left justified: both items sit on the container floor, the
        //first flush against the left wall
        let layout = &pack_group.layouts[0];
        let first = &layout.placed_items[0];
        let second = &layout.placed_items[1];
        assert!(first.shape.bbox.x_min.abs() <= 1e-6);
        assert!(first.shape.bbox.y_min.abs() <= 1e-6);
        assert!(second.shape.bbox.y_min.abs() <= 1e-6);
    }

    #[test_case(10.0, 10.0; "square container")]
    #[test_case(15.0, 5.0; "flat container")]
    fn oversized_item_is_reported_unplaced(width: f64, height: f64) {
        let config = NestConfig::default();
        //bounding box 20x20, no rotation can make it fit
        let big = vec![
            Point(0.0, 0.0),
            Point(20.0, 0.0),
            Point(20.0, 20.0),
            Point(0.0, 20.0),
        ];
        let items = vec![Item::with_default_rotations(0, big, &config).unwrap()];
        let container = Container::rectangle(width, height).unwrap();
        let instance = Instance::new(items, container).unwrap();

        let nester = Nester::new(instance.clone(), config);
        let pack_group = nester.pack(&identity_order(&instance), None);

        assert_eq!(pack_group.n_containers(), 0);
        assert_eq!(pack_group.unplaced.len(), 1);
        assert_eq!(pack_group.unplaced[0].item_id, 0);
    }

    #[test]
    fn unplaceable_items_do_not_stop_the_batch() {
        let config = NestConfig::default();
        let big = vec![
            Point(0.0, 0.0),
            Point(200.0, 0.0),
            Point(200.0, 200.0),
            Point(0.0, 200.0),
        ];
        let items = vec![
            Item::new(0, quad(0.0, 0.0), RotationRange::None, &config).unwrap(),
            Item::with_default_rotations(1, big, &config).unwrap(),
            Item::new(2, quad(0.0, 0.0), RotationRange::None, &config).unwrap(),
        ];
        let container = Container::rectangle(150.0, 150.0).unwrap();
        let instance = Instance::new(items, container).unwrap();

        let nester = Nester::new(instance.clone(), config.clone());
        let pack_group = nester.pack(&identity_order(&instance), None);

        assert_eq!(pack_group.n_placed(), 2);
        assert_eq!(pack_group.unplaced.len(), 1);
        assert_eq!(pack_group.unplaced[0].item_id, 1);
        assert!(assertions::pack_group_accounts_for_all_items(
            &pack_group,
            &instance
        ));
    }

    #[test]
    fn invalid_geometry_fails_item_construction_only() {
        let config = NestConfig::default();
        //degenerate: all vertices collinear
        let degenerate = vec![Point(0.0, 0.0), Point(5.0, 0.0), Point(10.0, 0.0)];
        assert!(Item::with_default_rotations(0, degenerate, &config).is_err());
        //the remaining batch is unaffected
        assert!(Item::with_default_rotations(0, quad(0.0, 0.0), &config).is_ok());
    }

    #[test]
    fn canonical_fixture_packs_deterministically() {
        let config = NestConfig::default();
        let instance = canonical_instance(&config);
        let nester = Nester::new(instance.clone(), config.clone());
        let order = identity_order(&instance);

        let first = nester.pack(&order, None);
        let second = nester.pack(&order, None);

        assert!(first.is_complete());
        assert!(assertions::pack_group_is_valid(&first, &instance, config.eps));
        //idempotence: identical inputs give identical packings
        assert_eq!(first.placements(), second.placements());

        //regression guard: the canonical 38 items fill a good share of the box
        assert!(first.n_containers() >= 1);
        assert!(first.layouts[0].density() > 0.5);
    }

    #[test]
    fn preferred_rotations_change_the_pass_deterministically() {
        let config = NestConfig::default();
        let instance = canonical_instance(&config);
        let nester = Nester::new(instance.clone(), config.clone());
        let order = identity_order(&instance);
        let rotations = vec![1; instance.items.len()];

        let first = nester.pack(&order, Some(&rotations));
        let second = nester.pack(&order, Some(&rotations));

        assert!(assertions::pack_group_is_valid(&first, &instance, config.eps));
        assert_eq!(first.placements(), second.placements());
    }

    #[test]
    fn optimizer_is_reproducible_with_a_fixed_seed() {
        let evo_config = EvoConfig {
            population_size: 8,
            n_generations: 3,
            ..EvoConfig::default()
        };
        let instance = small_instance(&evo_config.nest);

        let first = EvoNester::new(instance.clone(), evo_config.clone()).solve();
        let second = EvoNester::new(instance, evo_config).solve();

        assert_eq!(first.placements(), second.placements());
    }

    #[test]
    fn optimizer_never_loses_to_the_greedy_pass() {
        let evo_config = EvoConfig {
            population_size: 8,
            n_generations: 4,
            ..EvoConfig::default()
        };
        let instance = small_instance(&evo_config.nest);

        let nester = Nester::new(instance.clone(), evo_config.nest.clone());
        let greedy = nester.pack(&identity_order(&instance), None);

        let optimized = EvoNester::new(instance.clone(), evo_config.clone()).solve();

        assert!(assertions::pack_group_is_valid(
            &optimized,
            &instance,
            evo_config.nest.eps
        ));
        //the greedy identity pass seeds the population, the optimizer can
        //only improve on it
        assert!(Fitness::of(&optimized) <= Fitness::of(&greedy));
    }

    fn small_instance(config: &NestConfig) -> Instance {
        let mut items = Vec::new();
        for i in 0..4 {
            items.push(Item::with_default_rotations(i, shape_a(), config).unwrap());
        }
        for i in 4..8 {
            items.push(Item::with_default_rotations(i, shape_b(), config).unwrap());
        }
        let container = Container::rectangle(60.0, 60.0).unwrap();
        Instance::new(items, container).unwrap()
    }
}
