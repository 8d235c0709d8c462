use crate::entities::Layout;
use crate::geometry::DTransformation;

/// The complete result of a nesting run: every opened container with the
/// items placed in it, plus a report for each item that could not be placed.
///
/// Each input item appears in exactly one [`PlacedItem`](crate::entities::PlacedItem)
/// across all layouts, or in exactly one [`UnplacedItem`] report.
#[derive(Clone, Debug)]
pub struct PackGroup {
    pub layouts: Vec<Layout>,
    pub unplaced: Vec<UnplacedItem>,
}

/// Diagnostic for an item that fits in no container at any admissible
/// rotation. Never silently dropped: the report is part of the result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnplacedItem {
    pub item_id: usize,
}

impl PackGroup {
    pub fn n_containers(&self) -> usize {
        self.layouts.len()
    }

    pub fn n_placed(&self) -> usize {
        self.layouts.iter().map(|l| l.placed_items.len()).sum()
    }

    /// True iff every input item was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Item ids with their placements, per layout.
    /// Convenient for programmatic consumption and for comparing results.
    pub fn placements(&self) -> Vec<Vec<(usize, DTransformation)>> {
        self.layouts
            .iter()
            .map(|l| {
                l.placed_items
                    .iter()
                    .map(|pi| (pi.item_id, pi.d_transf))
                    .collect()
            })
            .collect()
    }

    /// Unused area of the last opened container, the secondary quantity a
    /// better ordering can still reduce once the container count is fixed.
    pub fn last_container_waste(&self) -> f64 {
        self.layouts.last().map_or(0.0, Layout::waste)
    }

    /// Overall material utilization: placed area over total container area.
    pub fn density(&self) -> f64 {
        let total: f64 = self.layouts.iter().map(|l| l.container.area()).sum();
        match total > 0.0 {
            true => self.layouts.iter().map(Layout::placed_item_area).sum::<f64>() / total,
            false => 0.0,
        }
    }
}
