use crate::entities::Container;
use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::decomposition::is_convex;
use crate::geometry::primitives::{Point, Rect, SPolygon};

/// Computes the inner-fit region of `shape` in `container`: every position of
/// the shape's reference point that keeps it fully inside the container.
///
/// Returns the region as a single convex contour, possibly degenerate (a
/// segment or a point when the shape fits exactly). `None` means the shape
/// cannot fit at any translation: unplaceable in this configuration, which is
/// an expected outcome rather than an error.
pub fn compute_inner_fit(container: &Container, shape: &SPolygon, eps: f64) -> Option<Vec<Point>> {
    if let Some(rect) = container.rect() {
        return rect_inner_fit(&rect, &shape.bbox, eps);
    }

    let outer = &container.outer;
    let boundary = match is_convex(&outer.vertices, eps) {
        true => outer.vertices.clone(),
        //for a non-convex container the eroded hull over-approximates the true
        //region; the placement step's exact containment check rejects the excess
        false => convex_hull_from_points(outer.vertices.clone()),
    };
    erode_convex(&boundary, shape, eps)
}

/// Exact inner-fit of a bounding box inside an axis-aligned rectangle.
fn rect_inner_fit(rect: &Rect, bbox: &Rect, eps: f64) -> Option<Vec<Point>> {
    let x_min = rect.x_min - bbox.x_min;
    let x_max = rect.x_max - bbox.x_max;
    let y_min = rect.y_min - bbox.y_min;
    let y_max = rect.y_max - bbox.y_max;

    if x_min > x_max + eps || y_min > y_max + eps {
        return None;
    }

    //an exact fit collapses the region to a segment or a single point
    let x_max = x_max.max(x_min);
    let y_max = y_max.max(y_min);

    let mut contour = vec![
        Point(x_min, y_min),
        Point(x_max, y_min),
        Point(x_max, y_max),
        Point(x_min, y_max),
    ];
    contour.dedup();
    while contour.len() > 1 && contour.first() == contour.last() {
        contour.pop();
    }

    Some(contour)
}

/// Erodes a convex counterclockwise boundary by the shape: each boundary edge
/// is shifted inward by the shape's support in the edge's outward normal
/// direction, and the region is clipped against every shifted half-plane.
fn erode_convex(boundary: &[Point], shape: &SPolygon, eps: f64) -> Option<Vec<Point>> {
    let boundary = match SPolygon::signed_area(boundary) < 0.0 {
        true => boundary.iter().rev().copied().collect(),
        false => boundary.to_vec(),
    };

    let mut region = boundary.clone();
    let n = boundary.len();
    for i in 0..n {
        let a = boundary[i];
        let b = boundary[(i + 1) % n];
        let (dx, dy) = (b.0 - a.0, b.1 - a.1);
        let len = (dx * dx + dy * dy).sqrt();
        if len <= eps {
            continue;
        }
        //outward normal of a counterclockwise edge
        let (nx, ny) = (dy / len, -dx / len);
        //how far the shape extends from its reference point towards this edge
        let support = shape
            .vertices
            .iter()
            .map(|v| nx * v.0 + ny * v.1)
            .fold(f64::MIN, f64::max);

        let c = nx * a.0 + ny * a.1 - support;
        region = clip_half_plane(&region, nx, ny, c, eps);
        if region.is_empty() {
            return None;
        }
    }

    Some(region)
}

//Sutherland–Hodgman style clip keeping the side where n·p <= c.
//Degenerate results (segments, points) are preserved: they are exact fits.
fn clip_half_plane(region: &[Point], nx: f64, ny: f64, c: f64, eps: f64) -> Vec<Point> {
    let n = region.len();
    let mut out: Vec<Point> = Vec::with_capacity(n + 2);

    for i in 0..n {
        let cur = region[i];
        let nxt = region[(i + 1) % n];
        let d_cur = nx * cur.0 + ny * cur.1 - c;
        let d_nxt = nx * nxt.0 + ny * nxt.1 - c;

        if d_cur <= eps {
            push_unique(&mut out, cur, eps);
        }
        if (d_cur <= eps) != (d_nxt <= eps) {
            let t = d_cur / (d_cur - d_nxt);
            let crossing = Point(cur.0 + t * (nxt.0 - cur.0), cur.1 + t * (nxt.1 - cur.1));
            push_unique(&mut out, crossing, eps);
        }
    }

    while out.len() > 1 && out[0].distance_to(out.last().unwrap()) <= eps {
        out.pop();
    }
    out
}

fn push_unique(out: &mut Vec<Point>, p: Point, eps: f64) {
    if out.last().is_none_or(|last| last.distance_to(&p) > eps) {
        out.push(p);
    }
}
