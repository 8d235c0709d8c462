//! The nesting orchestrator: one deterministic first-fit packing pass.

use log::{debug, info, warn};

use crate::entities::{Instance, Item, Layout, PackGroup, UnplacedItem};
use crate::geometry::DTransformation;
use crate::placement::find_placement;
use crate::util::NestConfig;
use crate::util::assertions;

/// Outcome of the placement search for a single item.
pub enum PlacementOutcome {
    /// A feasible placement was found in the layout with the given index.
    /// An index one past the open layouts means a new container is opened.
    Placed {
        layout: usize,
        d_transf: DTransformation,
    },
    /// The item fits nowhere, not even alone in an empty container
    Unplaceable,
}

/// First-fit nesting orchestrator.
///
/// Packs items one by one in the order given: every admissible rotation is
/// tried in priority order against every open container (oldest first); the
/// first feasible placement wins. When nothing fits, a new container instance
/// is opened, and an item that does not fit an empty container either is
/// reported unplaced.
///
/// Given the same order, rotation choices and configuration, the result is
/// always identical; an optimizer relies on this to compare candidate
/// orderings by fitness.
#[derive(Clone, Debug)]
pub struct Nester {
    pub instance: Instance,
    pub config: NestConfig,
}

impl Nester {
    pub fn new(instance: Instance, config: NestConfig) -> Self {
        Nester { instance, config }
    }

    /// Packs all items, visiting them in the order given.
    ///
    /// `order` must be a permutation of the instance's item ids.
    /// `preferred_rotations`, when given, maps each item id to an index into
    /// that item's rotation candidates; the preferred rotation is tried
    /// first. This is the knob an optimizer searches over.
    pub fn pack(&self, order: &[usize], preferred_rotations: Option<&[usize]>) -> PackGroup {
        let mut layouts: Vec<Layout> = Vec::new();
        let mut unplaced: Vec<UnplacedItem> = Vec::new();

        for &item_id in order {
            let item = self.instance.item(item_id);
            let rotations =
                rotation_priority(&item.rotations, preferred_rotations.map(|p| p[item_id]));

            match self.search(item, &rotations, &layouts) {
                PlacementOutcome::Placed { layout, d_transf } => {
                    if layout == layouts.len() {
                        layouts.push(Layout::new(self.instance.container.clone()));
                    }
                    layouts[layout].place_item(item, d_transf);
                    info!(
                        "[NEST] placed item {} at [{}] in container {}",
                        item.id, d_transf, layout
                    );
                }
                PlacementOutcome::Unplaceable => {
                    warn!(
                        "[NEST] item {} fits in no container at any admissible rotation",
                        item.id
                    );
                    unplaced.push(UnplacedItem { item_id: item.id });
                }
            }
        }

        let pack_group = PackGroup { layouts, unplaced };
        debug_assert!(assertions::pack_group_is_valid(
            &pack_group,
            &self.instance,
            self.config.eps
        ));
        pack_group
    }

    /// The per-item state machine: rotations in priority order, open layouts
    /// oldest first, then a fresh container.
    fn search(&self, item: &Item, rotations: &[f64], layouts: &[Layout]) -> PlacementOutcome {
        for &rotation in rotations {
            for (idx, layout) in layouts.iter().enumerate() {
                debug!(
                    "[NEST] trying item {} at {:.3} rad in container {}",
                    item.id, rotation, idx
                );
                if let Some(d_transf) = find_placement(item, rotation, layout, &self.config) {
                    return PlacementOutcome::Placed {
                        layout: idx,
                        d_transf,
                    };
                }
            }
        }

        let fresh = Layout::new(self.instance.container.clone());
        for &rotation in rotations {
            if let Some(d_transf) = find_placement(item, rotation, &fresh, &self.config) {
                return PlacementOutcome::Placed {
                    layout: layouts.len(),
                    d_transf,
                };
            }
        }

        PlacementOutcome::Unplaceable
    }
}

/// Puts the preferred rotation (by index, wrapped into range) first, keeping
/// the remaining candidates in their fixed order.
fn rotation_priority(rotations: &[f64], preferred: Option<usize>) -> Vec<f64> {
    match preferred {
        None => rotations.to_vec(),
        Some(idx) => {
            let idx = idx % rotations.len();
            let mut out = Vec::with_capacity(rotations.len());
            out.push(rotations[idx]);
            out.extend(
                rotations
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != idx)
                    .map(|(_, &r)| r),
            );
            out
        }
    }
}
