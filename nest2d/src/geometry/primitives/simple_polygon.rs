use anyhow::{Result, bail};
use ordered_float::OrderedFloat;

use crate::geometry::Transformation;
use crate::geometry::decomposition::point_in_triangle;
use crate::geometry::geo_traits::{
    CollidesWith, DistanceTo, Shape, Transformable, TransformableFrom,
};
use crate::geometry::primitives::Edge;
use crate::geometry::primitives::Point;
use crate::geometry::primitives::Rect;
use crate::util::FPA;

/// A Simple Polygon is a polygon that does not intersect itself and contains no holes.
/// It is a closed shape with a finite number of vertices and edges.
/// [read more](https://en.wikipedia.org/wiki/Simple_polygon)
#[derive(Clone, Debug)]
pub struct SPolygon {
    /// Set of points that form the polygon, in counterclockwise order
    pub vertices: Vec<Point>,
    /// Bounding box
    pub bbox: Rect,
    /// Area of its interior
    pub area: f64,
}

impl SPolygon {
    /// Create a new simple polygon from a set of points.
    /// Vertices closer than `eps` to their predecessor are merged, the closing
    /// duplicate is stripped, and orientation is normalized to counterclockwise.
    /// Degenerate input (fewer than 3 effective vertices, |area| ≤ `eps`, or a
    /// self-intersecting boundary) is rejected.
    pub fn new(points: Vec<Point>, eps: f64) -> Result<Self> {
        let mut vertices: Vec<Point> = Vec::with_capacity(points.len());
        for p in points {
            match vertices.last() {
                Some(prev) if prev.distance_to(&p) <= eps => {}
                _ => vertices.push(p),
            }
        }
        while vertices.len() >= 2 && vertices[0].distance_to(vertices.last().unwrap()) <= eps {
            vertices.pop();
        }

        if vertices.len() < 3 {
            bail!("invalid geometry: fewer than 3 effective vertices: {vertices:?}");
        }

        let area = match SPolygon::signed_area(&vertices) {
            a if a.abs() <= eps => {
                bail!("invalid geometry: polygon area {a} below tolerance: {vertices:?}")
            }
            a if a < 0.0 => {
                //edges should always be ordered counterclockwise (positive area)
                vertices.reverse();
                -a
            }
            a => a,
        };

        if boundary_self_intersects(&vertices, eps) {
            bail!("invalid geometry: self-intersecting boundary: {vertices:?}");
        }

        let bbox = Rect::from_points(&vertices);

        Ok(SPolygon {
            vertices,
            bbox,
            area,
        })
    }

    pub fn vertex(&self, i: usize) -> Point {
        self.vertices[i]
    }

    pub fn edge(&self, i: usize) -> Edge {
        let j = (i + 1) % self.n_vertices();
        Edge {
            start: self.vertices[i],
            end: self.vertices[j],
        }
    }

    pub fn edge_iter(&self) -> impl Iterator<Item = Edge> + '_ {
        (0..self.n_vertices()).map(move |i| self.edge(i))
    }

    pub fn n_vertices(&self) -> usize {
        self.vertices.len()
    }

    //https://en.wikipedia.org/wiki/Shoelace_formula
    //counterclockwise = positive area, clockwise = negative area
    pub fn signed_area(points: &[Point]) -> f64 {
        let mut sigma = 0.0;
        for i in 0..points.len() {
            //next point
            let j = (i + 1) % points.len();

            let (x_i, y_i) = points[i].into();
            let (x_j, y_j) = points[j].into();

            sigma += (y_i + y_j) * (x_i - x_j)
        }

        0.5 * sigma
    }

    /// True iff `point` lies within `eps` of the polygon's boundary.
    pub fn on_boundary(&self, point: &Point, eps: f64) -> bool {
        if !self.bbox.inflated(eps).collides_with(point) {
            return false;
        }
        self.edge_iter()
            .any(|edge| edge.sq_distance_to(point) <= eps * eps)
    }

    /// Boundary-inclusive containment: `point` lies in the interior or within
    /// `eps` of the boundary.
    pub fn contains_point(&self, point: &Point, eps: f64) -> bool {
        self.on_boundary(point, eps) || self.collides_with(point)
    }

    /// Strict containment: `point` lies in the interior, more than `eps` away
    /// from the boundary.
    pub fn strictly_contains_point(&self, point: &Point, eps: f64) -> bool {
        !self.on_boundary(point, eps) && self.collides_with(point)
    }

    /// True iff `other` lies entirely within `self`, boundary contact allowed.
    /// All vertices of `other` must be inside or on the boundary, no edge may
    /// properly cross the boundary, and an interior probe point must be inside
    /// (which guards against `other` lying outside while touching at vertices).
    pub fn contains_polygon(&self, other: &SPolygon, eps: f64) -> bool {
        let outer_bbox = self.bbox.inflated(eps);
        if other.bbox.x_min < outer_bbox.x_min
            || other.bbox.y_min < outer_bbox.y_min
            || other.bbox.x_max > outer_bbox.x_max
            || other.bbox.y_max > outer_bbox.y_max
        {
            return false;
        }
        if !other
            .vertices
            .iter()
            .all(|v| self.contains_point(v, eps))
        {
            return false;
        }
        for e_other in other.edge_iter() {
            for e_self in self.edge_iter() {
                if e_other.crosses_properly(&e_self, eps) {
                    return false;
                }
            }
        }
        self.contains_point(&other.interior_point(), eps)
    }

    /// A point guaranteed to lie strictly inside the polygon (up to numeric
    /// precision). The lowest-then-leftmost vertex is always convex; either
    /// the centroid of the triangle it spans with its neighbours is interior,
    /// or the midpoint towards the deepest vertex intruding into that triangle.
    pub fn interior_point(&self) -> Point {
        let n = self.n_vertices();
        let i = (0..n)
            .min_by_key(|&i| {
                (
                    OrderedFloat(self.vertices[i].1),
                    OrderedFloat(self.vertices[i].0),
                )
            })
            .unwrap();
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        let (a, b, c) = (self.vertices[prev], self.vertices[i], self.vertices[next]);

        let mut deepest: Option<(f64, Point)> = None;
        for (j, &p) in self.vertices.iter().enumerate() {
            if j == prev || j == i || j == next {
                continue;
            }
            if point_in_triangle(p, a, b, c) {
                let depth = Edge { start: a, end: c }.distance_to(&p);
                if deepest.is_none_or(|(d, _)| depth > d) {
                    deepest = Some((depth, p));
                }
            }
        }

        match deepest {
            Some((_, q)) => Point((b.0 + q.0) / 2.0, (b.1 + q.1) / 2.0),
            None => Point((a.0 + b.0 + c.0) / 3.0, (a.1 + b.1 + c.1) / 3.0),
        }
    }
}

/// True iff the open interiors of `a` and `b` overlap.
/// Contact on or within `eps` of the boundaries does not count as overlap,
/// so touching placements are legal.
pub fn interiors_overlap(a: &SPolygon, b: &SPolygon, eps: f64) -> bool {
    if !a.bbox.inflated(eps).collides_with(&b.bbox) {
        return false;
    }
    for e_a in a.edge_iter() {
        for e_b in b.edge_iter() {
            if e_a.crosses_properly(&e_b, eps) {
                return true;
            }
        }
    }
    if b.vertices.iter().any(|v| a.strictly_contains_point(v, eps))
        || a.vertices.iter().any(|v| b.strictly_contains_point(v, eps))
    {
        return true;
    }
    //one polygon could enclose the other with all vertices on the shared boundary
    a.strictly_contains_point(&b.interior_point(), eps)
        || b.strictly_contains_point(&a.interior_point(), eps)
}

fn boundary_self_intersects(vertices: &[Point], eps: f64) -> bool {
    let n = vertices.len();
    for i in 0..n {
        let e_i = Edge {
            start: vertices[i],
            end: vertices[(i + 1) % n],
        };
        for j in (i + 1)..n {
            if j == i + 1 || (i == 0 && j == n - 1) {
                //adjacent edges share an endpoint
                continue;
            }
            let e_j = Edge {
                start: vertices[j],
                end: vertices[(j + 1) % n],
            };
            if e_i.crosses_properly(&e_j, eps) {
                return true;
            }
        }
    }
    false
}

impl Shape for SPolygon {
    fn centroid(&self) -> Point {
        //based on: https://en.wikipedia.org/wiki/Centroid#Of_a_polygon

        let area = self.area;
        let mut c_x = 0.0;
        let mut c_y = 0.0;

        for i in 0..self.n_vertices() {
            let j = (i + 1) % self.n_vertices();
            let Point(x_i, y_i) = self.vertex(i);
            let Point(x_j, y_j) = self.vertex(j);
            c_x += (x_i + x_j) * (x_i * y_j - x_j * y_i);
            c_y += (y_i + y_j) * (x_i * y_j - x_j * y_i);
        }

        c_x /= 6.0 * area;
        c_y /= 6.0 * area;

        (c_x, c_y).into()
    }

    fn area(&self) -> f64 {
        self.area
    }

    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl Transformable for SPolygon {
    fn transform(&mut self, t: &Transformation) -> &mut Self {
        //destructuring pattern to ensure that the code is updated when the struct changes
        let SPolygon {
            vertices,
            bbox,
            area: _, //rigid transforms preserve area
        } = self;

        vertices.iter_mut().for_each(|v| {
            v.transform(t);
        });

        //regenerate bounding box
        *bbox = Rect::from_points(vertices);

        self
    }
}

impl TransformableFrom for SPolygon {
    fn transform_from(&mut self, reference: &Self, t: &Transformation) -> &mut Self {
        let SPolygon {
            vertices,
            bbox,
            area: _,
        } = self;

        for (v, ref_v) in vertices.iter_mut().zip(&reference.vertices) {
            v.transform_from(ref_v, t);
        }

        *bbox = Rect::from_points(vertices);

        self
    }
}

impl CollidesWith<Point> for SPolygon {
    fn collides_with(&self, point: &Point) -> bool {
        //based on the ray casting algorithm: https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
        match self.bbox.collides_with(point) {
            false => false,
            true => {
                //horizontal ray shot to the right.
                //Starting from the point to another point that is certainly outside the shape
                let point_outside = Point(self.bbox.x_max + self.bbox.width(), point.1);
                let ray = Edge {
                    start: *point,
                    end: point_outside,
                };

                let mut n_intersections = 0;
                for edge in self.edge_iter() {
                    //Check if the ray does not go through (or almost through) a vertex
                    //This can result in funky behaviour, which could incorrect results
                    //Therefore we handle this case
                    let (s_x, s_y) = (FPA(edge.start.0), FPA(edge.start.1));
                    let (e_x, e_y) = (FPA(edge.end.0), FPA(edge.end.1));
                    let (p_x, p_y) = (FPA(point.0), FPA(point.1));

                    if (s_y == p_y && s_x > p_x) || (e_y == p_y && e_x > p_x) {
                        //in this case, the ray passes through (or dangerously close to) a vertex
                        //We handle this case by only counting an intersection if the edge is below the ray
                        if s_y < p_y || e_y < p_y {
                            n_intersections += 1;
                        }
                    } else if ray.collides_with(&edge) {
                        n_intersections += 1;
                    }
                }

                n_intersections % 2 == 1
            }
        }
    }
}

impl<T> From<T> for SPolygon
where
    T: std::borrow::Borrow<Rect>,
{
    fn from(r: T) -> Self {
        let r = r.borrow();
        let vertices = vec![
            (r.x_min, r.y_min).into(),
            (r.x_max, r.y_min).into(),
            (r.x_max, r.y_max).into(),
            (r.x_min, r.y_max).into(),
        ];
        SPolygon {
            bbox: *r,
            area: r.area(),
            vertices,
        }
    }
}
