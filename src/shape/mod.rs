//! Elementary geometric primitives used by the hull construction.

pub use self::plane::Plane;
pub use self::triangle::Triangle;

mod plane;
mod triangle;
