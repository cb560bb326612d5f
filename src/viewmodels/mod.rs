pub mod map_viewmodel;
pub mod marker_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use marker_viewmodel::MarkerViewModel;
