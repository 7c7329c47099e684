use thiserror::Error;

/// An error where the requested figure cannot exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("diagonals must be positive")]
    NonPositiveDiagonal,
    #[error("radius must be positive")]
    NonPositiveRadius,
}
