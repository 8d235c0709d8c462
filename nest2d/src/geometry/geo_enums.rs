use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Admissible rotations for an item.
pub enum RotationRange {
    /// No rotation allowed, the item is placed as supplied
    None,
    /// Discrete set of rotation angles (in radians) to try
    Discrete(Vec<f64>),
}
