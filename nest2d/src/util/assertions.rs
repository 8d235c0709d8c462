//! Validators for the engine's core invariants.
//! Wired into `debug_assert!` at the points where results are committed, and
//! reused by the test suites.

use itertools::Itertools;

use crate::entities::{Instance, Layout, PackGroup};
use crate::geometry::primitives::interiors_overlap;

/// Every placed shape lies inside the container and no two interiors overlap.
pub fn layout_is_valid(layout: &Layout, eps: f64) -> bool {
    let container = &layout.container.outer;
    if !layout
        .placed_items
        .iter()
        .all(|pi| container.contains_polygon(&pi.shape, eps))
    {
        return false;
    }

    layout
        .placed_items
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !interiors_overlap(&a.shape, &b.shape, eps))
}

/// Each input item appears exactly once: as a placement or as an unplaced
/// report, never both and never neither.
pub fn pack_group_accounts_for_all_items(pack_group: &PackGroup, instance: &Instance) -> bool {
    let mut seen = vec![0usize; instance.items.len()];
    for layout in &pack_group.layouts {
        for pi in &layout.placed_items {
            seen[pi.item_id] += 1;
        }
    }
    for up in &pack_group.unplaced {
        seen[up.item_id] += 1;
    }
    seen.iter().all(|&count| count == 1)
}

pub fn pack_group_is_valid(pack_group: &PackGroup, instance: &Instance, eps: f64) -> bool {
    pack_group_accounts_for_all_items(pack_group, instance)
        && pack_group
            .layouts
            .iter()
            .all(|l| !l.is_empty() && layout_is_valid(l, eps))
}
