use std::f64::consts::PI;

use crate::geometry::primitives::{Point, SPolygon};

//angles are compared with a fixed tolerance: parallel edges must merge in a
//deterministic order regardless of which polygon contributes them
const ANGLE_TOL: f64 = 1e-9;

/// Reflects a set of points about the origin.
pub fn reflect(points: &[Point]) -> Vec<Point> {
    points.iter().map(|&Point(x, y)| Point(-x, -y)).collect()
}

/// Minkowski sum A ⊕ B of two convex polygons, computed by merging the edge
/// vectors of both by angle. O(n + m).
///
/// The no-fit polygon of two convex shapes is `A ⊕ reflect(B)`: the reference
/// point of B traces this contour while B slides around A in edge contact.
pub fn convex_minkowski_sum(a: &[Point], b: &[Point], eps: f64) -> Vec<Point> {
    let a = ensure_ccw(a);
    let b = ensure_ccw(b);

    let edges_a = edge_vectors(&a);
    let edges_b = edge_vectors(&b);

    //both traversals start at the bottom-most (then left-most) vertex, where
    //the edge angles of a counterclockwise convex polygon begin their cycle
    let start_a = bottom_left_index(&a);
    let start_b = bottom_left_index(&b);

    let start = Point(a[start_a].0 + b[start_b].0, a[start_a].1 + b[start_b].1);
    let merged = merge_edge_vectors(&edges_a, start_a, &edges_b, start_b);

    let mut result = Vec::with_capacity(merged.len() + 1);
    let mut current = start;
    result.push(current);
    for (dx, dy) in merged {
        current = Point(current.0 + dx, current.1 + dy);
        result.push(current);
    }

    //the merged edges close the loop, drop the duplicated closing vertex
    if result.len() > 1 && result[0].distance_to(result.last().unwrap()) <= eps {
        result.pop();
    }

    result
}

fn ensure_ccw(points: &[Point]) -> Vec<Point> {
    if SPolygon::signed_area(points) < 0.0 {
        points.iter().rev().copied().collect()
    } else {
        points.to_vec()
    }
}

fn edge_vectors(points: &[Point]) -> Vec<(f64, f64)> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let j = (i + 1) % n;
            (points[j].0 - points[i].0, points[j].1 - points[i].1)
        })
        .collect()
}

fn bottom_left_index(points: &[Point]) -> usize {
    let mut min_idx = 0;
    for (i, &Point(x, y)) in points.iter().enumerate() {
        let Point(min_x, min_y) = points[min_idx];
        if y < min_y || (y == min_y && x < min_x) {
            min_idx = i;
        }
    }
    min_idx
}

//angle of an edge vector in [0, 2π)
fn edge_angle(dx: f64, dy: f64) -> f64 {
    let angle = dy.atan2(dx);
    if angle < 0.0 { angle + 2.0 * PI } else { angle }
}

fn merge_edge_vectors(
    edges_a: &[(f64, f64)],
    start_a: usize,
    edges_b: &[(f64, f64)],
    start_b: usize,
) -> Vec<(f64, f64)> {
    let n_a = edges_a.len();
    let n_b = edges_b.len();

    let mut result = Vec::with_capacity(n_a + n_b);
    let mut i_a = 0;
    let mut i_b = 0;

    while i_a < n_a || i_b < n_b {
        if i_a >= n_a {
            result.push(edges_b[(start_b + i_b) % n_b]);
            i_b += 1;
        } else if i_b >= n_b {
            result.push(edges_a[(start_a + i_a) % n_a]);
            i_a += 1;
        } else {
            let e_a = edges_a[(start_a + i_a) % n_a];
            let e_b = edges_b[(start_b + i_b) % n_b];

            let angle_a = edge_angle(e_a.0, e_a.1);
            let angle_b = edge_angle(e_b.0, e_b.1);

            //parallel edges are both consumed, in a fixed a-then-b order
            if angle_a <= angle_b + ANGLE_TOL {
                result.push(e_a);
                i_a += 1;
            }
            if angle_b <= angle_a + ANGLE_TOL {
                result.push(e_b);
                i_b += 1;
            }
        }
    }

    result
}
