use core::fmt;
use core::ops::Index;
use core::slice;

use crate::memory::{self, AllocResult};


/// A growable, exclusively owned block of `T`.
///
/// Capacity is tracked here rather than taken from the backing `Vec`, so that growth
/// follows [`memory::grow_capacity`] exactly: nothing is allocated until the first push,
/// which reserves [`memory::MIN_CAPACITY`] slots, and each later growth doubles.
pub struct GrowBuf<T> {
    capacity: usize,
    storage: Vec<T>,
}

impl<T> Default for GrowBuf<T> {
    fn default() -> Self { Self::new() }
}

impl<T> GrowBuf<T> {
    pub const fn new() -> Self {
        Self {
            capacity: 0,
            storage: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize { self.storage.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.storage.is_empty() }

    #[inline]
    pub fn capacity(&self) -> usize { self.capacity }

    #[inline]
    pub fn as_slice(&self) -> &[T] { self.storage.as_slice() }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> { self.storage.get(index) }

    pub fn iter(&self) -> slice::Iter<'_, T> { self.storage.iter() }

    /// Appends a value, growing the buffer if it is full.
    ///
    /// # Panics
    ///
    /// If the buffer cannot grow. See [`memory::alloc_failure`].
    pub fn push(&mut self, value: T) {
        if let Err(error) = self.try_push(value) {
            memory::alloc_failure(error)
        }
    }

    /// Like `push()`, but hands an allocation failure back to the caller.
    /// The buffer is left unchanged in that case.
    pub fn try_push(&mut self, value: T) -> AllocResult<()> {
        if self.len() == self.capacity {
            let new_capacity = memory::grow_capacity::<T>(self.capacity)?;
            self.resize_storage(new_capacity)?;
        }

        debug_assert!(self.len() < self.capacity);
        self.storage.push(value);
        Ok(())
    }

    /// Shrinks the capacity down to the current length, releasing the storage if empty
    pub fn shrink_to_fit(&mut self) {
        if self.capacity > self.len() {
            let len = self.len();
            if let Err(error) = self.resize_storage(len) {
                memory::alloc_failure(error)
            }
        }
    }

    /// Frees the backing storage and resets to the empty state.
    pub fn release(&mut self) {
        if self.capacity > 0 {
            if let Err(error) = self.resize_storage(0) {
                memory::alloc_failure(error)
            }
        }
    }

    fn resize_storage(&mut self, new_capacity: usize) -> AllocResult<()> {
        memory::reallocate(&mut self.storage, self.capacity, new_capacity)?;
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<T> Drop for GrowBuf<T> {
    fn drop(&mut self) {
        self.release()
    }
}

impl<T> Index<usize> for GrowBuf<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T { &self.storage[index] }
}

impl<'a, T> IntoIterator for &'a GrowBuf<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl<T> fmt::Debug for GrowBuf<T> where T: fmt::Debug {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("GrowBuf")
            .field("capacity", &self.capacity)
            .field("items", &self.storage)
            .finish()
    }
}
