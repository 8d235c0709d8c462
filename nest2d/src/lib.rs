//! `nest2d` is a 2D irregular nesting engine.
//!
//! Given a set of simple polygons ([`entities::Item`]) and a container shape
//! ([`entities::Container`]), the engine places every item into one or more
//! container instances such that no two placed items overlap and every item
//! lies fully inside its container. Placement is driven by no-fit polygons
//! ([`nfp`]) and a configurable placement heuristic ([`placement`]); the
//! [`nester::Nester`] runs a deterministic first-fit pass over a given item
//! order and produces a [`entities::PackGroup`].
//!
//! The engine performs no I/O and draws no random numbers; search over item
//! orderings and rotations is the job of an optimizer built on top (see the
//! `evonest` crate).

pub mod entities;
pub mod geometry;
pub mod nester;
pub mod nfp;
pub mod placement;
pub mod util;
