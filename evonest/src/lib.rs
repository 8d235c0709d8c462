//! `evonest` wraps the deterministic `nest2d` engine in an evolutionary
//! search over item orderings and rotation assignments, evaluating candidate
//! packings in parallel and returning the best
//! [`PackGroup`](nest2d::entities::PackGroup) found within a budget.

use std::time::Instant;

use once_cell::sync::Lazy;

pub mod config;
pub mod fitness;
pub mod individual;
pub mod optimizer;
pub mod util;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
