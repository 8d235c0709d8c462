use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::geometry::decomposition::decompose_convex;
use crate::geometry::geo_traits::DistanceTo;
use crate::geometry::primitives::{Edge, Point, SPolygon};
use crate::nfp::minkowski::{convex_minkowski_sum, reflect};

/// A no-fit polygon: the region of reference points of the orbiting polygon
/// where its interior would overlap the stationary polygon's interior.
///
/// For non-convex inputs this can be several disjoint regions, and a region
/// can enclose holes: pockets formed by concavities of the stationary shape
/// that the orbiting shape may nest into.
#[derive(Debug, Clone, Default)]
pub struct Nfp {
    pub shapes: Vec<NfpShape>,
}

/// One closed region of an [`Nfp`]: an outer contour plus its holes.
#[derive(Debug, Clone)]
pub struct NfpShape {
    pub outer: Vec<Point>,
    pub holes: Vec<Vec<Point>>,
}

impl Nfp {
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// All contours, outer boundaries and holes alike. Their vertices are
    /// candidate touching positions for the orbiting polygon.
    pub fn contours(&self) -> impl Iterator<Item = &Vec<Point>> {
        self.shapes
            .iter()
            .flat_map(|s| std::iter::once(&s.outer).chain(s.holes.iter()))
    }

    /// True iff placing the orbiting polygon's reference point at `p` makes
    /// the interiors overlap. Points on or within `eps` of any contour are
    /// touching positions and therefore allowed, as is the inside of a hole.
    pub fn forbids(&self, p: Point, eps: f64) -> bool {
        self.shapes.iter().any(|s| {
            strictly_inside_contour(&s.outer, p, eps)
                && !s.holes.iter().any(|h| contour_contains(h, p, eps))
        })
    }
}

/// Computes the no-fit polygon of an orbiting polygon sliding around a
/// stationary one, both taken at their current positions.
///
/// Convex inputs take the direct Minkowski route; non-convex inputs are
/// decomposed into convex parts whose pairwise no-fit polygons are merged by
/// a boolean union.
pub fn compute_nfp(stationary: &SPolygon, orbiting: &SPolygon, eps: f64) -> Nfp {
    let stat_parts = decompose_convex(stationary, eps);
    let orb_parts = decompose_convex(orbiting, eps);

    if stat_parts.len() == 1 && orb_parts.len() == 1 {
        let outer = convex_minkowski_sum(&stat_parts[0], &reflect(&orb_parts[0]), eps);
        return Nfp {
            shapes: vec![NfpShape {
                outer,
                holes: vec![],
            }],
        };
    }

    let mut partial: Vec<Vec<Point>> = Vec::with_capacity(stat_parts.len() * orb_parts.len());
    for stat in &stat_parts {
        for orb in &orb_parts {
            let sum = convex_minkowski_sum(stat, &reflect(orb), eps);
            if sum.len() >= 3 {
                partial.push(sum);
            }
        }
    }

    union_contours(partial)
}

/// Unions the partial no-fit polygons into the final region set.
/// Contours are merged pairwise; the grouping of the last overlay determines
/// which contours are outer boundaries and which are holes.
fn union_contours(mut contours: Vec<Vec<Point>>) -> Nfp {
    match contours.len() {
        0 => Nfp::default(),
        1 => Nfp {
            shapes: vec![NfpShape {
                outer: contours.pop().unwrap(),
                holes: vec![],
            }],
        },
        _ => {
            let to_raw = |c: &[Point]| c.iter().map(|p| [p.0, p.1]).collect::<Vec<[f64; 2]>>();

            let mut grouped: Vec<Vec<Vec<[f64; 2]>>> = vec![vec![to_raw(&contours[0])]];
            let mut subject: Vec<Vec<[f64; 2]>> = vec![to_raw(&contours[0])];

            for contour in &contours[1..] {
                let clip = to_raw(contour);
                let shapes = subject.overlay(&[clip], OverlayRule::Union, FillRule::NonZero);
                if shapes.iter().flatten().any(|c| c.len() >= 3) {
                    subject = shapes
                        .iter()
                        .flatten()
                        .filter(|c| c.len() >= 3)
                        .cloned()
                        .collect();
                    grouped = shapes;
                }
                //a degenerate union result is skipped, keeping the sums merged so far
            }

            let shapes = grouped
                .into_iter()
                .filter_map(|shape| {
                    let mut it = shape
                        .into_iter()
                        .filter(|c| c.len() >= 3)
                        .map(|c| c.into_iter().map(|[x, y]| Point(x, y)).collect::<Vec<_>>());
                    //the first contour of a shape is its outer boundary
                    let outer = it.next()?;
                    Some(NfpShape {
                        outer,
                        holes: it.collect(),
                    })
                })
                .collect();

            Nfp { shapes }
        }
    }
}

/// Boundary-inclusive test whether `p` lies in the region bounded by
/// `contour`. Degenerate contours (a single point, a segment) arise from
/// exact-fit inner-fit regions and are handled as such.
pub fn contour_contains(contour: &[Point], p: Point, eps: f64) -> bool {
    match contour.len() {
        0 => false,
        1 => contour[0].distance_to(&p) <= eps,
        2 => {
            Edge {
                start: contour[0],
                end: contour[1],
            }
            .sq_distance_to(&p)
                <= eps * eps
        }
        _ => on_contour(contour, p, eps) || inside_contour(contour, p),
    }
}

/// Edges of a closed contour, skipping zero-length segments.
pub fn contour_edges(contour: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    (0..contour.len()).filter_map(move |i| {
        let j = (i + 1) % contour.len();
        (contour[i] != contour[j]).then(|| Edge {
            start: contour[i],
            end: contour[j],
        })
    })
}

fn strictly_inside_contour(contour: &[Point], p: Point, eps: f64) -> bool {
    contour.len() >= 3 && !on_contour(contour, p, eps) && inside_contour(contour, p)
}

fn on_contour(contour: &[Point], p: Point, eps: f64) -> bool {
    contour_edges(contour).any(|e| e.sq_distance_to(&p) <= eps * eps)
}

//crossing-number ray cast, orientation-independent
fn inside_contour(contour: &[Point], p: Point) -> bool {
    let (px, py) = (p.0, p.1);
    let n = contour.len();
    let mut inside = false;

    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi): (f64, f64) = contour[i].into();
        let (xj, yj): (f64, f64) = contour[j].into();

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }
        j = i;
    }

    inside
}
