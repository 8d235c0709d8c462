use ordered_float::NotNan;

use nest2d::entities::PackGroup;

/// Fitness of a packing, lower is better.
///
/// Fields compare lexicographically in declaration order: unplaced items
/// dominate everything (fully placed solutions always win), then the number
/// of containers, then the wasted area in the last container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fitness {
    pub unplaced: usize,
    pub containers: usize,
    pub last_container_waste: NotNan<f64>,
}

impl Fitness {
    pub fn of(pack_group: &PackGroup) -> Fitness {
        Fitness {
            unplaced: pack_group.unplaced.len(),
            containers: pack_group.n_containers(),
            last_container_waste: NotNan::new(pack_group.last_container_waste())
                .expect("waste is NaN"),
        }
    }
}
