//! Placement strategy: finding one good feasible position for an item in a
//! layout.
//!
//! The feasible region for an item at a fixed rotation is the container's
//! inner-fit region minus the union of the no-fit polygons against every
//! already placed item. Its extreme points all lie on vertices of those
//! regions or on intersections of their boundaries, so those points are the
//! candidate set. Which feasible candidate is *preferred* is delegated to a
//! [`PlacementHeuristic`], independent of the feasibility computation.

mod heuristic;

pub use heuristic::PlacementHeuristic;

use itertools::Itertools;

use crate::entities::{Item, Layout};
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::{Edge, Point, interiors_overlap};
use crate::geometry::{DTransformation, Transformation};
use crate::nfp::{Nfp, compute_inner_fit, compute_nfp, contour_contains, contour_edges};
use crate::util::NestConfig;

/// Searches for a feasible placement of `item`, rotated by `rotation`, in
/// `layout`.
///
/// Pure: the layout is not modified. `None` means no feasible placement
/// exists for this rotation in this container; the caller moves on to the
/// next rotation or container.
pub fn find_placement(
    item: &Item,
    rotation: f64,
    layout: &Layout,
    config: &NestConfig,
) -> Option<DTransformation> {
    let eps = config.eps;
    let rotated = item
        .shape
        .transform_clone(&Transformation::from_rotation(rotation));

    let ifp = compute_inner_fit(&layout.container, &rotated, eps)?;
    let nfps: Vec<Nfp> = layout
        .placed_items
        .iter()
        .map(|pi| compute_nfp(&pi.shape, &rotated, eps))
        .collect();

    let mut candidates = candidate_points(&ifp, &nfps);
    //deterministic heuristic order, best candidate first (stable sort keeps
    //the generation order on ties)
    candidates.sort_by_key(|&c| config.heuristic.key(c, &rotated.bbox, layout));

    candidates.into_iter().find_map(|c| {
        if !contour_contains(&ifp, c, eps) {
            return None;
        }
        if nfps.iter().any(|nfp| nfp.forbids(c, eps)) {
            return None;
        }
        //exact validation of the actual transformed shape; the candidate
        //regions only steer the search, legality is decided here
        let placed = rotated.transform_clone(&Transformation::from_translation((c.0, c.1)));
        if !layout.container.outer.contains_polygon(&placed, eps) {
            return None;
        }
        if layout
            .placed_items
            .iter()
            .any(|pi| interiors_overlap(&pi.shape, &placed, eps))
        {
            return None;
        }
        Some(DTransformation::new(rotation, (c.0, c.1)))
    })
}

/// Candidate reference points: the vertices of the inner-fit region and of
/// every no-fit polygon, plus all pairwise intersections of their boundary
/// edges. The optimum of any reasonable placement heuristic over the feasible
/// region is attained at one of these.
fn candidate_points(ifp: &[Point], nfps: &[Nfp]) -> Vec<Point> {
    let mut candidates: Vec<Point> = ifp.to_vec();
    for nfp in nfps {
        for contour in nfp.contours() {
            candidates.extend(contour.iter().copied());
        }
    }

    let mut boundary_edges: Vec<Edge> = Vec::new();
    if ifp.len() >= 2 {
        boundary_edges.extend(contour_edges(ifp));
    }
    for nfp in nfps {
        for contour in nfp.contours() {
            boundary_edges.extend(contour_edges(contour));
        }
    }
    for (e1, e2) in boundary_edges.iter().tuple_combinations() {
        if let Some(p) = e1.collides_at(e2) {
            candidates.push(p);
        }
    }

    candidates
}
