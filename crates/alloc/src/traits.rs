use std::{rc::Rc, sync::Arc};

/// Something that covers a measurable region of the plane.
///
/// Pointers forward to their pointee, so an owning `Box<T>` or a shared `Rc<T>`/`Arc<T>` reports
/// the area of the `T` behind it. A nullable pointer is written as `Option<P>`: `None` covers
/// nothing and reports `0.0`.
pub trait Area {
    /// Returns the area. Must not have side effects.
    fn area(&self) -> f64;
}

macro_rules! impl_area_for_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Area + ?Sized> Area for $ptr<T> {
                #[inline]
                fn area(&self) -> f64 {
                    (**self).area()
                }
            }
        )*
    };
}

impl_area_for_pointer!(Box, Rc, Arc);

impl<T: Area + ?Sized> Area for &T {
    #[inline]
    fn area(&self) -> f64 {
        (**self).area()
    }
}

impl<T: Area> Area for Option<T> {
    #[inline]
    fn area(&self) -> f64 {
        match self {
            Some(inner) => inner.area(),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Square(f64);

    impl Area for Square {
        fn area(&self) -> f64 {
            self.0 * self.0
        }
    }

    #[test]
    fn pointers_forward() {
        assert_eq!(Box::new(Square(2.0)).area(), 4.0);
        assert_eq!(Rc::new(Square(3.0)).area(), 9.0);
        assert_eq!(Arc::new(Square(1.5)).area(), 2.25);
        assert_eq!((&Square(2.0)).area(), 4.0);
    }

    #[test]
    fn missing_covers_nothing() {
        let empty: Option<Box<Square>> = None;
        assert_eq!(empty.area(), 0.0);
        assert_eq!(Some(Box::new(Square(2.0))).area(), 4.0);
    }

    #[test]
    fn trait_objects() {
        let shape: Rc<dyn Area> = Rc::new(Square(4.0));
        assert_eq!(shape.area(), 16.0);
        assert_eq!(Some(shape).area(), 16.0);
    }
}
