pub mod distance;
pub mod error;
pub mod path;

pub use distance::distance;
pub use path::interpolate_great_circle;
