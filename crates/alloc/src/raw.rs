use core::{alloc::Layout, marker::PhantomData, mem, ptr, ptr::NonNull};
use std::alloc;

use bytesize::ByteSize;
use log::error;

use crate::error::ArrayError;

/// An exclusively owned heap buffer with room for `cap` values of type `T`.
///
/// `RawBuf` only manages memory. It never reads, writes, or drops the values stored in its
/// slots; its owner keeps track of which slots are initialized.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Constructs an empty buffer. Does not allocate.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a buffer with exactly `cap` slots.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the size overflows or the allocator fails.
    pub(crate) fn with_capacity(cap: usize) -> Result<Self, ArrayError> {
        if cap == 0 {
            return Ok(Self::new());
        }
        Ok(Self {
            ptr: allocate(cap)?,
            cap,
            _marker: PhantomData,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Moves the first `len` values into a new allocation of `new_cap` slots, then frees the old
    /// allocation.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the new allocation fails, in which case `self` is left untouched.
    ///
    /// ## Safety
    /// - The first `len` slots must be initialized.
    /// - `len` must not exceed either capacity.
    pub(crate) unsafe fn relocate(&mut self, len: usize, new_cap: usize) -> Result<(), ArrayError> {
        debug_assert!(len <= self.cap && len <= new_cap);
        let new_ptr = allocate::<T>(new_cap)?;
        // values are moved bitwise, the old slots become logically uninitialized
        ptr::copy_nonoverlapping(self.ptr.as_ptr(), new_ptr.as_ptr(), len);
        self.release();
        self.ptr = new_ptr;
        self.cap = new_cap;
        Ok(())
    }

    /// Frees the allocation (but not the values in it) and resets to the empty state.
    pub(crate) fn release(&mut self) {
        if let Ok(layout) = Layout::array::<T>(self.cap) {
            if layout.size() != 0 {
                // SAFETY: allocated by `allocate` with this exact layout
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) };
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Allocates uninitialized memory for `cap` values of type `T`.
///
/// Zero-sized requests succeed without touching the allocator.
fn allocate<T>(cap: usize) -> Result<NonNull<T>, ArrayError> {
    let layout = Layout::array::<T>(cap).map_err(|_| {
        error!(
            "cannot reserve {} slots of {} each: capacity overflow",
            cap,
            ByteSize::b(mem::size_of::<T>() as u64).to_string_as(true)
        );
        ArrayError::CapacityOverflow
    })?;

    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }

    // SAFETY: layout has a non-zero size
    let ptr = unsafe { alloc::alloc(layout) };
    NonNull::new(ptr.cast::<T>()).ok_or_else(|| {
        error!(
            "allocator failed to provide {}",
            ByteSize::b(layout.size() as u64).to_string_as(true)
        );
        ArrayError::OutOfMemory { layout }
    })
}
