//! No-fit polygon engine.
//!
//! The no-fit polygon (NFP) of a stationary and an orbiting polygon is the
//! locus of the orbiting polygon's reference point where the two touch
//! without overlapping interiors. Together with the inner-fit region of the
//! container it defines the feasible placement region for an item.

mod inner_fit;
mod minkowski;
mod no_fit;

pub use inner_fit::compute_inner_fit;
pub use minkowski::{convex_minkowski_sum, reflect};
pub use no_fit::{Nfp, NfpShape, compute_nfp, contour_contains, contour_edges};
