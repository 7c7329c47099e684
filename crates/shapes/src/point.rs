use core::fmt;

use crate::scalar::Scalar;

/// A point on the plane.
#[derive(Clone, Copy, Debug)]
pub struct Point<T: Scalar> {
    x: T,
    y: T,
}

impl<T: Scalar> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    /// Returns the Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x.to_f64_lossy() - other.x.to_f64_lossy();
        let dy = self.y.to_f64_lossy() - other.y.to_f64_lossy();
        dx.hypot(dy)
    }
}

/// The origin.
impl<T: Scalar> Default for Point<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

/// Coordinates are compared with [`Scalar::nearly_eq`].
impl<T: Scalar> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x.nearly_eq(other.x) && self.y.nearly_eq(other.y)
    }
}

impl<T: Scalar> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.x, self.y)
    }
}
