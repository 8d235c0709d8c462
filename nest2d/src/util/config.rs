use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::placement::PlacementHeuristic;

/// Engine-wide tunables.
///
/// Carried as an explicit value into every kernel, NFP and placement call
/// instead of living in ambient state, so concurrent runs with different
/// settings cannot interfere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestConfig {
    /// Geometric tolerance shared by all kernel operations: coordinates within
    /// `eps` of each other are treated as equal, and contact within `eps` of a
    /// boundary counts as touching, not overlapping.
    pub eps: f64,
    /// Default rotation candidate set (in radians), used for items that do not
    /// restrict their own rotations.
    pub rotations: Vec<f64>,
    /// Heuristic used to pick one reference point from the feasible region.
    pub heuristic: PlacementHeuristic,
}

impl Default for NestConfig {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            rotations: vec![0.0, 0.5 * PI, PI, 1.5 * PI],
            heuristic: PlacementHeuristic::BottomLeft,
        }
    }
}
