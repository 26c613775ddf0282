pub mod category;
pub mod duration;
pub mod item_type;

pub use category::PropertyCategory;
pub use duration::LeaseDuration;
pub use item_type::ItemType;
