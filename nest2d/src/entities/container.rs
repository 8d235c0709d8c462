use std::sync::Arc;

use anyhow::Result;

use crate::geometry::primitives::{Point, Rect, SPolygon};

/// A container in which [`Item`](crate::entities::Item)s can be placed.
/// New instances of the same container are opened on demand when an item does
/// not fit into any of the already open ones.
#[derive(Clone, Debug)]
pub struct Container {
    /// Contour of the container
    pub outer: Arc<SPolygon>,
    /// Set when the contour is an axis-aligned rectangle, enabling the exact
    /// inner-fit fast path
    rect: Option<Rect>,
}

impl Container {
    /// The common case: an axis-aligned rectangular container with its
    /// bottom-left corner at the origin.
    pub fn rectangle(width: f64, height: f64) -> Result<Container> {
        let rect = Rect::try_new(0.0, 0.0, width, height)?;
        Ok(Container {
            outer: Arc::new(SPolygon::from(&rect)),
            rect: Some(rect),
        })
    }

    /// A container with an arbitrary polygonal contour. Axis-aligned
    /// rectangles are detected and get the same fast path as
    /// [`Container::rectangle`].
    pub fn polygonal(points: Vec<Point>, eps: f64) -> Result<Container> {
        let outer = SPolygon::new(points, eps)?;
        let rect = detect_rect(&outer, eps);
        Ok(Container {
            outer: Arc::new(outer),
            rect,
        })
    }

    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    pub fn area(&self) -> f64 {
        self.outer.area
    }
}

fn detect_rect(outer: &SPolygon, eps: f64) -> Option<Rect> {
    if outer.n_vertices() != 4 {
        return None;
    }
    let bbox = outer.bbox;
    let on_corners = outer.vertices.iter().all(|&Point(x, y)| {
        ((x - bbox.x_min).abs() <= eps || (x - bbox.x_max).abs() <= eps)
            && ((y - bbox.y_min).abs() <= eps || (y - bbox.y_max).abs() <= eps)
    });
    on_corners.then_some(bbox)
}
