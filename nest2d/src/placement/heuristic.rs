use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::entities::Layout;
use crate::geometry::primitives::{Point, Rect};

/// Strategy for choosing one reference point out of the feasible region.
/// Swapping the heuristic never affects which placements are feasible, only
/// which one is preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlacementHeuristic {
    /// Prefer the lowest position, ties broken towards the left.
    /// Encourages compact, bottom-left justified packings.
    #[default]
    BottomLeft,
    /// Prefer the position that grows the bounding box around everything
    /// already placed the least
    MinBboxGrowth,
}

impl PlacementHeuristic {
    /// Sort key for a candidate reference point: lower is better, components
    /// compare lexicographically.
    /// `shape_bbox` is the bounding box of the rotated shape at the origin.
    pub fn key(&self, position: Point, shape_bbox: &Rect, layout: &Layout) -> [NotNan<f64>; 3] {
        let nn = |v: f64| NotNan::new(v).expect("placement cost is NaN");
        match self {
            PlacementHeuristic::BottomLeft => [nn(position.1), nn(position.0), nn(0.0)],
            PlacementHeuristic::MinBboxGrowth => {
                let placed_bbox = shape_bbox.translated(position.0, position.1);
                let combined = match layout.occupied_bbox() {
                    Some(occupied) => occupied.bounding_union(&placed_bbox),
                    None => placed_bbox,
                };
                [nn(combined.area()), nn(position.1), nn(position.0)]
            }
        }
    }
}
