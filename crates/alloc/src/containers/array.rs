use core::{
    fmt,
    ops::{Deref, DerefMut, Index, IndexMut},
    ptr, slice,
};
use std::alloc::handle_alloc_error;

use bytesize::ByteSize;
use log::trace;

use crate::{config::Config, error::ArrayError, raw::RawBuf, traits::Area};

/// A contiguous growable array type, written as `Array<T>`.
///
/// Elements live in a single heap allocation owned by the array alone. Cloning an array copies
/// every element into a fresh allocation; moving it hands over the allocation without copying.
/// When full, the capacity grows according to the array's [`Config`] (doubling by default).
pub struct Array<T> {
    buf: RawBuf<T>,
    len: usize,
    config: Config,
}

// SAFETY: `Array<T>` owns its `T`s, exactly like `Vec<T>`
unsafe impl<T: Send> Send for Array<T> {}
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T> Array<T> {
    /// Constructs a new, empty `Array<T>`. Does not allocate.
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Constructs a new, empty `Array<T>` that grows according to `config`. Does not allocate.
    pub fn with_config(config: Config) -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
            config,
        }
    }

    /// Constructs a new, empty `Array<T>` with room for exactly `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the size in bytes exceeds `isize::MAX`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::allocated(capacity, Config::default())
    }

    fn allocated(capacity: usize, config: Config) -> Self {
        let buf = RawBuf::with_capacity(capacity).unwrap_or_else(|err| fail(err));
        Self {
            buf,
            len: 0,
            config,
        }
    }

    /// Constructs an `Array<T>` by cloning every element of `elements`.
    ///
    /// The result holds exactly `elements.len()` elements in as many slots, allocated once.
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        let mut array = Self::allocated(elements.len(), Config::default());
        for element in elements {
            array.push(element.clone());
        }
        array
    }

    /// Moves the contents out, leaving `self` empty with no allocation.
    ///
    /// The returned array takes over the allocation as-is; no element is copied.
    pub fn take(&mut self) -> Self {
        trace!("moving array of {} elements", self.len);
        let empty = Self::with_config(self.config);
        core::mem::replace(self, empty)
    }

    /// Returns the growth configuration.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the array can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are initialized, and the pointer is non-null and aligned
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: see `as_slice`, plus `&mut self` guarantees exclusive access
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Reserves room for at least `additional` more elements.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    pub fn reserve(&mut self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            fail(err);
        }
    }

    /// Tries to reserve room for at least `additional` more elements.
    ///
    /// If the array is already large enough, this does nothing. Otherwise the capacity grows to
    /// whichever is larger, the next step of the growth policy or the exact requirement.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the capacity overflows or the allocator fails. The array is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ArrayError> {
        let required = self
            .len
            .checked_add(additional)
            .ok_or(ArrayError::CapacityOverflow)?;
        let cap = self.capacity();
        if required <= cap {
            return Ok(());
        }

        let new_cap = self
            .config
            .next_capacity(cap)
            .ok_or(ArrayError::CapacityOverflow)?
            .max(required);

        trace!(
            "growing array from {} to {} slots ({})",
            cap,
            new_cap,
            ByteSize::b((new_cap as u64).saturating_mul(core::mem::size_of::<T>() as u64))
                .to_string_as(true)
        );

        // SAFETY: the first `len` slots are initialized and `len <= cap < new_cap`
        unsafe { self.buf.relocate(self.len, new_cap) }
    }

    /// Appends an element to the back.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.reserve(1);
        }
        // SAFETY: `len < capacity`, so the slot exists and is uninitialized
        unsafe { self.buf.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was initialized and is now outside the live range
        Some(unsafe { self.buf.as_ptr().add(self.len).read() })
    }

    /// Removes and returns the element at `index`, shifting everything after it one slot to the
    /// left.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        match self.try_remove(index) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Removes and returns the element at `index`, shifting everything after it one slot to the
    /// left.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `index` is out of bounds. The array is unchanged.
    pub fn try_remove(&mut self, index: usize) -> Result<T, ArrayError> {
        let len = self.len;
        if index >= len {
            return Err(ArrayError::IndexOutOfBounds { index, len });
        }

        // SAFETY: `index < len`; the removed value is read out once, and the tail is moved (not
        // duplicated) one slot down, so every element keeps exactly one owner
        unsafe {
            let hole = self.buf.as_ptr().add(index);
            let value = hole.read();
            ptr::copy(hole.add(1), hole, len - index - 1);
            self.len = len - 1;
            Ok(value)
        }
    }

    /// Drops every element. Keeps the allocation.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();
        // if a destructor panics, the rest leak instead of being dropped twice
        self.len = 0;
        // SAFETY: the slice was initialized and is no longer reachable through `self`
        unsafe { ptr::drop_in_place(elements) };
    }

    /// Returns the sum of the area of every element.
    ///
    /// Elements are visited in index order. Missing elements (`None`) contribute `0.0`.
    pub fn total_area(&self) -> f64
    where
        T: Area,
    {
        self.iter().fold(0.0, |total, element| total + element.area())
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        if self.len > 0 {
            trace!("dropping array of {} elements", self.len);
        }
        // SAFETY: every live element is dropped exactly once, `buf` frees the memory afterwards
        unsafe { ptr::drop_in_place(self.as_mut_slice()) };
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    /// Copies every element into a new allocation with the same capacity.
    fn clone(&self) -> Self {
        trace!("copying array of {} elements", self.len);
        let mut copy = Self::allocated(self.capacity(), self.config);
        for element in self.iter() {
            copy.push(element.clone());
        }
        copy
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Array<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        let len = self.len;
        match self.get(index) {
            Some(element) => element,
            None => panic!("{}", ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Some(element) => element,
            None => panic!("{}", ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for element in iter {
            self.push(element);
        }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(elements: &[T]) -> Self {
        Self::from_slice(elements)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(elements: [T; N]) -> Self {
        let mut array = Self::allocated(N, Config::default());
        for element in elements {
            array.push(element);
        }
        array
    }
}

impl<T: fmt::Debug> fmt::Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Array<T> {}

#[cold]
fn fail(err: ArrayError) -> ! {
    match err {
        ArrayError::OutOfMemory { layout } => handle_alloc_error(layout),
        err => panic!("{}", err),
    }
}
