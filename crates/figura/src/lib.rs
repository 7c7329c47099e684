//! A contiguous growable [`Array`] and a family of polygons ([`Rhombus`], [`Pentagon`],
//! [`Hexagon`]) that it can hold by value, behind a `Box`, or behind an `Rc`/`Arc`, optionally
//! nullable, and still sum their [`Area`].
pub use figura_alloc::{Area, Array, ArrayError, Config};
pub use figura_shapes::{Figure, GeometryError, Hexagon, Pentagon, Point, Rhombus, Scalar};
