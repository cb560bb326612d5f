pub mod coordinates;
pub mod marker;

pub use coordinates::LngLat;
pub use marker::{MarkerId, MarkerRecord};
