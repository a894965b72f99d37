use crate::error::CollectionError;
use collection_traits::{HasLength, Iterable, LinearSearch};
use std::alloc::Layout;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use tracing::{debug, trace};

/// Capacity of an array created with [DynamicArray::new].
pub const DEFAULT_CAPACITY: usize = 16;

/// Growable array of value-type elements.
///
/// Slots `[0, len)` hold live elements, slots `[len, capacity)` always hold
/// `T::default()`. The capacity doubles when an insertion finds the backing
/// store full and never shrinks.
pub struct DynamicArray<T> {
    store: Box<[T]>,
    size: usize,
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default> DynamicArray<T> {
    pub fn new() -> Self {
        Self::allocate(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// Fails with [CollectionError::InvalidArgument] when the backing store
    /// could never be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, CollectionError> {
        if capacity > isize::MAX as usize || Layout::array::<T>(capacity).is_err() {
            return Err(CollectionError::InvalidArgument { capacity });
        }

        Ok(Self::allocate(capacity))
    }

    pub fn append(&mut self, element: T) {
        self.insert_unchecked(self.size, element);
    }

    /// Inserts `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// Amortized O(1) at the end of the array, O(n) anywhere else.
    pub fn insert_at(&mut self, index: usize, element: T) -> Result<(), CollectionError> {
        if index > self.size {
            return Err(CollectionError::IndexOutOfRange {
                index,
                len: self.size,
            });
        }

        self.insert_unchecked(index, element);
        Ok(())
    }

    // `index` must be at most `size`.
    fn insert_unchecked(&mut self, index: usize, element: T) {
        if self.size == self.capacity() {
            self.grow();
        }

        // The slot at `size` is a default, rotating moves it into the gap.
        self.store[index..=self.size].rotate_right(1);
        self.store[index] = element;
        self.size += 1;
    }

    /// Removes the element at `index`, shifting the tail left in place.
    pub fn remove_at(&mut self, index: usize) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.size)?;

        let removed = mem::take(&mut self.store[index]);
        self.store[index..self.size].rotate_left(1);
        self.size -= 1;
        Ok(removed)
    }

    pub fn remove(&mut self, element: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(element) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(len = self.size, "clearing dynamic array");
        }

        self.store[..self.size].fill_with(T::default);
        self.size = 0;
    }

    fn allocate(capacity: usize) -> Self {
        Self {
            store: Self::backing_store(capacity),
            size: 0,
        }
    }

    fn backing_store(capacity: usize) -> Box<[T]> {
        std::iter::repeat_with(T::default).take(capacity).collect()
    }

    fn grow(&mut self) {
        let capacity = (self.capacity() * 2).max(1);
        trace!(from = self.capacity(), to = capacity, "growing backing store");

        let mut store = Self::backing_store(capacity);
        for (new, old) in store.iter_mut().zip(&mut self.store[..self.size]) {
            *new = mem::take(old);
        }
        self.store = store;
    }
}

impl<T> DynamicArray<T> {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.store.len()
    }

    pub fn get_at(&self, index: usize) -> Result<&T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        Ok(&self.store[index])
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set_at(&mut self, index: usize, element: T) -> Result<T, CollectionError> {
        CollectionError::check_index(index, self.size)?;
        Ok(mem::replace(&mut self.store[index], element))
    }

    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|x| x == element)
    }

    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(element).is_some()
    }

    /// Live elements, in order.
    pub fn as_slice(&self) -> &[T] {
        &self.store[..self.size]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.store[..self.size][index]
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> HasLength for DynamicArray<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for DynamicArray<T> {
    type Item<'a>
        = &'a T
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        DynamicArray::iter(self)
    }
}

impl<T: PartialEq> LinearSearch for DynamicArray<T> {
    type Needle<'a>
        = &'a T
    where
        Self: 'a;

    fn index_of<'a>(&'a self, needle: &'a T) -> Option<usize> {
        self.index_of(needle)
    }
}
