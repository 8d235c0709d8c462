mod container;
mod instance;
mod item;
mod layout;
mod pack_group;
mod placed_item;

pub use container::Container;
pub use instance::Instance;
pub use item::Item;
pub use layout::Layout;
pub use pack_group::{PackGroup, UnplacedItem};
pub use placed_item::PlacedItem;
