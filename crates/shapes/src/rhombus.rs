use core::{any::Any, fmt};

use figura_alloc::Area;
use log::debug;

use crate::{
    error::GeometryError,
    figure::{fmt_vertices, impl_figure_eq, Figure},
    point::Point,
    scalar::Scalar,
};

/// A rhombus, described by its center and its two (axis-aligned) diagonals.
#[derive(Clone, Debug)]
pub struct Rhombus<T: Scalar> {
    center: Point<T>,
    horizontal: T,
    vertical: T,
}

impl<T: Scalar> Rhombus<T> {
    /// Constructs a new `Rhombus`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either diagonal is zero or negative.
    pub fn new(center: Point<T>, horizontal: T, vertical: T) -> Result<Self, GeometryError> {
        if horizontal <= T::zero() || vertical <= T::zero() {
            debug!("rejected rhombus with diagonals {} x {}", horizontal, vertical);
            return Err(GeometryError::NonPositiveDiagonal);
        }
        Ok(Self {
            center,
            horizontal,
            vertical,
        })
    }

    /// Returns the horizontal and vertical diagonals.
    pub fn diagonals(&self) -> (T, T) {
        (self.horizontal, self.vertical)
    }
}

/// A unit rhombus centered on the origin.
impl<T: Scalar> Default for Rhombus<T> {
    fn default() -> Self {
        Self {
            center: Point::default(),
            horizontal: T::one(),
            vertical: T::one(),
        }
    }
}

impl<T: Scalar> Area for Rhombus<T> {
    fn area(&self) -> f64 {
        self.horizontal.to_f64_lossy() * self.vertical.to_f64_lossy() / 2.0
    }
}

impl<T: Scalar> Figure<T> for Rhombus<T> {
    fn center(&self) -> Point<T> {
        self.center
    }

    /// Top, right, bottom, left.
    fn vertices(&self) -> Vec<Point<T>> {
        let two = T::one() + T::one();
        let (half_h, half_v) = (self.horizontal / two, self.vertical / two);
        let (x, y) = (self.center.x(), self.center.y());
        vec![
            Point::new(x, y + half_v),
            Point::new(x + half_h, y),
            Point::new(x, y - half_v),
            Point::new(x - half_h, y),
        ]
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Scalar> fmt::Display for Rhombus<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rhombus (d1={}, d2={}) ", self.horizontal, self.vertical)?;
        fmt_vertices(f, &self.vertices())?;
        write!(f, " Area: {} Center: {}", self.area(), self.center)
    }
}

impl_figure_eq!(Rhombus);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area() {
        let rhombus = Rhombus::new(Point::new(0.0, 0.0), 4.0, 6.0).unwrap();
        assert_eq!(rhombus.area(), 12.0);
        assert_eq!(f64::from(&rhombus), 12.0);
    }

    #[test]
    fn vertices() {
        let rhombus = Rhombus::new(Point::new(1, 1), 4, 6).unwrap();
        assert_eq!(
            rhombus.vertices(),
            [
                Point::new(1, 4),
                Point::new(3, 1),
                Point::new(1, -2),
                Point::new(-1, 1),
            ]
        );
        assert_eq!(rhombus.center(), Point::new(1, 1));
    }

    #[test]
    fn rejects_non_positive_diagonals() {
        assert_eq!(
            Rhombus::new(Point::default(), 0, 3).err(),
            Some(GeometryError::NonPositiveDiagonal)
        );
        assert_eq!(
            Rhombus::new(Point::default(), 2.0, -1.0).err(),
            Some(GeometryError::NonPositiveDiagonal)
        );
    }

    #[test]
    fn default_is_unit() {
        let rhombus = Rhombus::<f64>::default();
        assert_eq!(rhombus.diagonals(), (1.0, 1.0));
        assert_eq!(rhombus.area(), 0.5);
    }

    #[test]
    fn equality() {
        let center = Point::new(0, 0);
        let a = Rhombus::new(center, 4, 6).unwrap();
        let b = Rhombus::new(center, 4, 6).unwrap();
        let c = Rhombus::new(center, 4, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display() {
        let rhombus = Rhombus::new(Point::new(0, 0), 4, 6).unwrap();
        assert_eq!(
            rhombus.to_string(),
            "Rhombus (d1=4, d2=6) [(0 3), (2 0), (0 -3), (-2 0)] Area: 12 Center: (0 0)"
        );
    }
}
