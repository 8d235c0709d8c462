use std::sync::Arc;

use crate::entities::Item;
use crate::geometry::DTransformation;
use crate::geometry::geo_traits::Transformable;
use crate::geometry::primitives::SPolygon;

/// Represents an [`Item`] that has been placed in a
/// [`Layout`](crate::entities::Layout). Immutable once recorded.
#[derive(Clone, Debug)]
pub struct PlacedItem {
    pub item_id: usize,
    /// The transformation that placed the item
    pub d_transf: DTransformation,
    /// The item's shape after the transformation, in container coordinates
    pub shape: Arc<SPolygon>,
}

impl PlacedItem {
    pub fn new(item: &Item, d_transf: DTransformation) -> Self {
        let shape = Arc::new(item.shape.transform_clone(&d_transf.compose()));
        PlacedItem {
            item_id: item.id,
            d_transf,
            shape,
        }
    }
}
