use core::alloc::Layout;

use thiserror::Error;

/// An error with allocating, growing, or addressing an [`Array`](crate::Array).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The requested capacity exceeds `isize::MAX` bytes.
    #[error("capacity overflow")]
    CapacityOverflow,
    /// The global allocator could not provide the memory.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    OutOfMemory { layout: Layout },
    /// The index does not refer to a live element.
    #[error("index out of bounds: the len is {len} but the index is {index}")]
    IndexOutOfBounds { index: usize, len: usize },
}
