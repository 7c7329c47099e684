use core::{
    any::Any,
    f64::consts::{PI, TAU},
    fmt,
};

use figura_alloc::Area;

use crate::{point::Point, scalar::Scalar};

/// A polygon with a center and an ordered ring of vertices.
///
/// Two figures are equal if they are the same kind of figure and their vertices match one by
/// one, in order.
pub trait Figure<T: Scalar>: Area + fmt::Display {
    /// Returns the geometric center.
    fn center(&self) -> Point<T>;

    /// Returns the vertices in order.
    fn vertices(&self) -> Vec<Point<T>>;

    /// Returns `self` as [`Any`] so figures can be told apart by their concrete type.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Scalar> PartialEq for dyn Figure<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_any().type_id() == other.as_any().type_id() && self.vertices() == other.vertices()
    }
}

/// Returns the vertices of a regular polygon with `sides` corners on a circle of `radius`.
///
/// The first vertex sits at angle `-PI / 2 + offset` and the rest follow counter-clockwise.
/// Coordinates are computed in `f64` and converted back to `T`.
pub(crate) fn regular_vertices<T: Scalar>(
    center: Point<T>,
    radius: T,
    sides: usize,
    offset: f64,
) -> Vec<Point<T>> {
    let (cx, cy) = (center.x().to_f64_lossy(), center.y().to_f64_lossy());
    let r = radius.to_f64_lossy();
    (0..sides)
        .map(|i| {
            let angle = TAU * (i as f64) / (sides as f64) - PI / 2.0 + offset;
            Point::new(
                T::from_f64_lossy(cx + r * angle.cos()),
                T::from_f64_lossy(cy + r * angle.sin()),
            )
        })
        .collect()
}

/// Writes `[v0, v1, ...]`.
pub(crate) fn fmt_vertices<T: Scalar>(
    f: &mut fmt::Formatter<'_>,
    vertices: &[Point<T>],
) -> fmt::Result {
    f.write_str("[")?;
    for (i, vertex) in vertices.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", vertex)?;
    }
    f.write_str("]")
}

macro_rules! impl_figure_eq {
    ($($shape:ident),*) => {
        $(
            /// Vertex-wise equality, see [`Figure`](crate::Figure).
            impl<T: $crate::Scalar> PartialEq for $shape<T> {
                fn eq(&self, other: &Self) -> bool {
                    $crate::Figure::vertices(self) == $crate::Figure::vertices(other)
                }
            }

            impl<T: $crate::Scalar> From<&$shape<T>> for f64 {
                fn from(shape: &$shape<T>) -> f64 {
                    figura_alloc::Area::area(shape)
                }
            }
        )*
    };
}

pub(crate) use impl_figure_eq;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_ring() {
        let vertices = regular_vertices(Point::new(0.0, 0.0), 1.0, 4, 0.0);
        assert_eq!(
            vertices,
            [
                Point::new(0.0, -1.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(-1.0, 0.0),
            ]
        );
    }

    #[test]
    fn integer_ring_truncates() {
        let vertices = regular_vertices(Point::new(10, 10), 2, 4, 0.0);
        assert_eq!(vertices[0], Point::new(10, 8));
        assert_eq!(vertices[1], Point::new(12, 10));
    }
}
