use core::{any::Any, f64::consts::TAU, fmt};

use figura_alloc::Area;
use log::debug;

use crate::{
    error::GeometryError,
    figure::{fmt_vertices, impl_figure_eq, regular_vertices, Figure},
    point::Point,
    scalar::Scalar,
};

/// A regular pentagon, described by its center and circumradius.
///
/// The first vertex points straight down (towards negative `y`).
#[derive(Clone, Debug)]
pub struct Pentagon<T: Scalar> {
    center: Point<T>,
    radius: T,
}

impl<T: Scalar> Pentagon<T> {
    /// Constructs a new `Pentagon`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `radius` is zero or negative.
    pub fn new(center: Point<T>, radius: T) -> Result<Self, GeometryError> {
        if radius <= T::zero() {
            debug!("rejected pentagon with radius {}", radius);
            return Err(GeometryError::NonPositiveRadius);
        }
        Ok(Self { center, radius })
    }

    pub fn radius(&self) -> T {
        self.radius
    }
}

impl<T: Scalar> Default for Pentagon<T> {
    fn default() -> Self {
        Self {
            center: Point::default(),
            radius: T::one(),
        }
    }
}

impl<T: Scalar> Area for Pentagon<T> {
    fn area(&self) -> f64 {
        let r = self.radius.to_f64_lossy();
        5.0 * r * r * (TAU / 5.0).sin() / 2.0
    }
}

impl<T: Scalar> Figure<T> for Pentagon<T> {
    fn center(&self) -> Point<T> {
        self.center
    }

    fn vertices(&self) -> Vec<Point<T>> {
        regular_vertices(self.center, self.radius, 5, 0.0)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Scalar> fmt::Display for Pentagon<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pentagon (R={}) ", self.radius)?;
        fmt_vertices(f, &self.vertices())?;
        write!(f, " Area: {} Center: {}", self.area(), self.center)
    }
}

impl_figure_eq!(Pentagon);
