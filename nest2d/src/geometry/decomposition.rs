//! Convex decomposition of simple polygons, used by the NFP engine to reduce
//! the general non-convex case to pairwise convex Minkowski sums.

use crate::geometry::convex_hull::convex_hull_from_points;
use crate::geometry::primitives::{Point, SPolygon};

/// True iff the counterclockwise ring turns in a single direction.
/// Cross products with magnitude ≤ `eps` count as straight and are ignored.
pub fn is_convex(vertices: &[Point], eps: f64) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0i8;
    for i in 0..n {
        let p0 = vertices[i];
        let p1 = vertices[(i + 1) % n];
        let p2 = vertices[(i + 2) % n];

        let cross = (p1.0 - p0.0) * (p2.1 - p1.1) - (p1.1 - p0.1) * (p2.0 - p1.0);

        if cross.abs() > eps {
            let current = if cross > 0.0 { 1 } else { -1 };
            if sign == 0 {
                sign = current;
            } else if sign != current {
                return false;
            }
        }
    }

    true
}

/// Decomposes a polygon into convex parts: the polygon itself when it is
/// already convex, otherwise ear-clipping triangles. If ear clipping stalls
/// on a near-degenerate ring, the convex hull serves as a fallback part.
pub fn decompose_convex(shape: &SPolygon, eps: f64) -> Vec<Vec<Point>> {
    if is_convex(&shape.vertices, eps) {
        return vec![shape.vertices.clone()];
    }
    triangulate(&shape.vertices, eps)
}

fn triangulate(original: &[Point], eps: f64) -> Vec<Vec<Point>> {
    let mut vertices = original.to_vec();
    let mut triangles = Vec::new();

    while vertices.len() > 3 {
        let n = vertices.len();
        let ear = (0..n).find(|&i| {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            is_ear(&vertices, prev, i, next, eps)
        });

        match ear {
            Some(i) => {
                let n = vertices.len();
                let prev = (i + n - 1) % n;
                let next = (i + 1) % n;
                triangles.push(vec![vertices[prev], vertices[i], vertices[next]]);
                vertices.remove(i);
            }
            None => {
                //no ear found, the remaining ring is degenerate
                return vec![convex_hull_from_points(original.to_vec())];
            }
        }
    }
    triangles.push(vertices);

    triangles
}

fn is_ear(vertices: &[Point], prev: usize, curr: usize, next: usize, eps: f64) -> bool {
    let a = vertices[prev];
    let b = vertices[curr];
    let c = vertices[next];

    //the vertex must be convex (left turn in a counterclockwise ring)
    let cross = (b.0 - a.0) * (c.1 - b.1) - (b.1 - a.1) * (c.0 - b.0);
    if cross <= eps {
        return false;
    }

    //and no other vertex may lie inside the candidate triangle
    for (i, &p) in vertices.iter().enumerate() {
        if i == prev || i == curr || i == next {
            continue;
        }
        if point_in_triangle(p, a, b, c) {
            return false;
        }
    }

    true
}

/// Strict point-in-triangle test via barycentric coordinates.
/// Points on the triangle boundary are not considered inside.
pub(crate) fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let v0 = (c.0 - a.0, c.1 - a.1);
    let v1 = (b.0 - a.0, b.1 - a.1);
    let v2 = (p.0 - a.0, p.1 - a.1);

    let dot00 = v0.0 * v0.0 + v0.1 * v0.1;
    let dot01 = v0.0 * v1.0 + v0.1 * v1.1;
    let dot02 = v0.0 * v2.0 + v0.1 * v2.1;
    let dot11 = v1.0 * v1.0 + v1.1 * v1.1;
    let dot12 = v1.0 * v2.0 + v1.1 * v2.1;

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u > 1e-12 && v > 1e-12 && (u + v) < 1.0 - 1e-12
}
