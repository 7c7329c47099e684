//! Polygons on the plane, generic over their coordinate type.
mod error;
mod figure;
mod hexagon;
mod pentagon;
mod point;
mod rhombus;
mod scalar;

pub use error::GeometryError;
pub use figura_alloc::Area;
pub use figure::Figure;
pub use hexagon::Hexagon;
pub use pentagon::Pentagon;
pub use point::Point;
pub use rhombus::Rhombus;
pub use scalar::Scalar;
