use std::sync::Arc;

use anyhow::Result;

use crate::geometry::DTransformation;
use crate::geometry::geo_enums::RotationRange;
use crate::geometry::geo_traits::{Shape, Transformable};
use crate::geometry::primitives::{Point, SPolygon};
use crate::util::NestConfig;

/// Item to be placed in a [`Layout`](crate::entities::Layout).
/// Immutable once constructed; the engine only ever assigns it a
/// [`DTransformation`] through a
/// [`PlacedItem`](crate::entities::PlacedItem).
#[derive(Clone, Debug)]
pub struct Item {
    pub id: usize,
    /// Contour of the item, centered on its centroid.
    /// The centroid is thereby the item's reference point: rotating the
    /// stored shape about the origin rotates the item about its reference
    /// point, keeping it comparable to no-fit polygons anchored the same way.
    pub shape: Arc<SPolygon>,
    /// Rotation angles (radians) in the priority order they are tried
    pub rotations: Vec<f64>,
    /// Translation that centered the original contour, so placements can be
    /// mapped back to the caller's coordinate space
    pub pretransform: DTransformation,
}

impl Item {
    /// Builds an item from its contour, rejecting degenerate geometry.
    pub fn new(
        id: usize,
        points: Vec<Point>,
        rotations: RotationRange,
        config: &NestConfig,
    ) -> Result<Item> {
        let shape = SPolygon::new(points, config.eps)?;
        let centroid = shape.centroid();
        let centering = DTransformation::new(0.0, (-centroid.0, -centroid.1));
        let shape = shape.transform_clone(&centering.compose());

        let rotations = match rotations {
            RotationRange::None => vec![0.0],
            RotationRange::Discrete(r) if r.is_empty() => vec![0.0],
            RotationRange::Discrete(r) => r,
        };

        Ok(Item {
            id,
            shape: Arc::new(shape),
            rotations,
            pretransform: centering,
        })
    }

    /// Item admitting the configuration's default rotation set.
    pub fn with_default_rotations(
        id: usize,
        points: Vec<Point>,
        config: &NestConfig,
    ) -> Result<Item> {
        Item::new(
            id,
            points,
            RotationRange::Discrete(config.rotations.clone()),
            config,
        )
    }

    pub fn area(&self) -> f64 {
        self.shape.area
    }
}
