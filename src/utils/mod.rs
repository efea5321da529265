//! Various unsorted geometrical and logical operators.

pub use self::newell::newell_plane;
pub use self::point_cloud_extrema::{hull_tolerance, PointCloudExtrema};

pub mod hashmap;
pub mod hashset;
mod newell;
mod point_cloud_extrema;
