use core::{any::Any, f64::consts::PI, fmt};

use figura_alloc::Area;
use log::debug;

use crate::{
    error::GeometryError,
    figure::{fmt_vertices, impl_figure_eq, regular_vertices, Figure},
    point::Point,
    scalar::Scalar,
};

/// A regular hexagon, described by its center and circumradius.
#[derive(Clone, Debug)]
pub struct Hexagon<T: Scalar> {
    center: Point<T>,
    radius: T,
}

impl<T: Scalar> Hexagon<T> {
    /// Constructs a new `Hexagon`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `radius` is zero or negative.
    pub fn new(center: Point<T>, radius: T) -> Result<Self, GeometryError> {
        if radius <= T::zero() {
            debug!("rejected hexagon with radius {}", radius);
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Self { center, radius })
    }

    pub fn radius(&self) -> T {
        self.radius
    }
}

impl<T: Scalar> Default for Hexagon<T> {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: T::one(),
        }
    }
}

impl<T: Scalar> Area for Hexagon<T> {
    fn area(&self) -> f64 {
        let r = self.radius.to_f64_lossy();
        3.0 * 3f64.sqrt() * r * r / 2.0
    }
}

impl<T: Scalar> Figure<T> for Hexagon<T> {
    fn center(&self) -> Point<T> {
        self.center
    }

    // first vertex at -PI / 6, so the hexagon has a vertex on top
    fn vertices(&self) -> Vec<Point<T>> {
        regular_vertices(self.center, self.radius, 6, PI / 2.0 - PI / 6.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Scalar> fmt::Display for Hexagon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hexagon (R={}) ", self.radius)?;
        fmt_vertices(f, &self.vertices())?;
        write!(f, " Area: {} Center: {}", self.area(), self.center)
    }
}

impl_figure_eq!(Hexagon);
