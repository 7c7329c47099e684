//! Owning containers backed by a single, exclusively owned heap allocation.
//!
//! The main type is [`Array`], a contiguous growable array. Arrays whose elements report an
//! [`Area`] (directly, or through a possibly-missing owning or shared pointer) can sum it with
//! [`Array::total_area`].
mod config;
pub mod containers;
mod error;
mod raw;
mod traits;

pub use config::Config;
pub use containers::Array;
pub use error::ArrayError;
pub use traits::Area;
