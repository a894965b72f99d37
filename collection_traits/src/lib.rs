#![forbid(clippy::unconditional_recursion)]

//! Shared contract of the sequence containers.
//!
//! Containers implement these traits by delegating to their inherent methods,
//! so generic code (and the model tests) can drive every container the same way.

pub trait HasLength {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

pub trait Iterable {
    type Item<'a>
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>>;
}

/// Ordered collection with access to both of its ends.
///
/// Payloads are optional: a node holding no value is distinct from a
/// collection with no nodes. The latter is reported through [EndAccess::Error].
pub trait EndAccess: HasLength {
    type Item;
    type Error;

    fn add_first(&mut self, item: Option<Self::Item>);
    fn add_last(&mut self, item: Option<Self::Item>);
    fn peek_first(&self) -> Result<Option<&Self::Item>, Self::Error>;
    fn peek_last(&self) -> Result<Option<&Self::Item>, Self::Error>;
    fn remove_first(&mut self) -> Result<Option<Self::Item>, Self::Error>;
    fn remove_last(&mut self) -> Result<Option<Self::Item>, Self::Error>;
    fn clear(&mut self);
}

/// Front-to-back scan for the first element matching a needle.
pub trait LinearSearch {
    type Needle<'a>
    where
        Self: 'a;

    fn index_of<'a>(&'a self, needle: Self::Needle<'a>) -> Option<usize>;

    fn contains<'a>(&'a self, needle: Self::Needle<'a>) -> bool {
        self.index_of(needle).is_some()
    }
}
