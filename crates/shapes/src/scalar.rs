use core::fmt::{Debug, Display};

use num_traits::{Num, Signed};

/// A coordinate type: a signed integer or a float.
pub trait Scalar: Num + Signed + Copy + PartialOrd + Debug + Display + 'static {
    /// Converts from `f64`. Integers truncate toward zero and saturate at their bounds.
    fn from_f64_lossy(value: f64) -> Self;

    /// Converts to `f64`. Very large 64-bit integers lose precision.
    fn to_f64_lossy(self) -> f64;

    /// Returns `true` if the values are equal within the tolerance of the type.
    ///
    /// Integers compare exactly. Floats allow a relative error of ten machine epsilons, scaled by
    /// the larger magnitude (but never by less than 1).
    fn nearly_eq(self, other: Self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn from_f64_lossy(value: f64) -> Self {
                    value as Self
                }

                #[inline]
                fn to_f64_lossy(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn nearly_eq(self, other: Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn from_f64_lossy(value: f64) -> Self {
                    value as Self
                }

                #[inline]
                fn to_f64_lossy(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn nearly_eq(self, other: Self) -> bool {
                    let scale = self.abs().max(other.abs()).max(1.0);
                    (self - other).abs() <= <$ty>::EPSILON * 10.0 * scale
                }
            }
        )*
    };
}

impl_scalar_int!(i16, i32, i64, isize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_truncate_and_saturate() {
        assert_eq!(i32::from_f64_lossy(2.9), 2);
        assert_eq!(i32::from_f64_lossy(-2.9), -2);
        assert_eq!(i16::from_f64_lossy(1e9), i16::MAX);
    }

    #[test]
    fn floats_tolerate_rounding() {
        assert!((0.1f64 + 0.2).nearly_eq(0.3));
        assert!(!(1.0f64).nearly_eq(1.001));
        assert!((1e6f64 + 1e-9).nearly_eq(1e6));
        assert!(!3i32.nearly_eq(4));
    }
}
