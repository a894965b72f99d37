use crate::error::CollectionError;
use collection_traits::{EndAccess, HasLength, Iterable};
use std::fmt;
use tracing::debug;

// Position of a node in the slot arena.
type Link = Option<usize>;

#[derive(Debug)]
struct Slot<T> {
    data: Option<T>,
    // For free slots this is the next entry of the free list.
    next: Link,
}

/// Forward-only chain of nodes with O(1) access to both ends.
///
/// Nodes live in an arena owned by the list and link forward by slot index.
/// The tail link only names the last node of the chain, there is no way back
/// from it.
pub struct SinglyLinkedList<T> {
    slots: Vec<Slot<T>>,
    free_head: Link,
    head: Link,
    tail: Link,
    size: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn add_first(&mut self, data: impl Into<Option<T>>) {
        let node = self.alloc(data.into(), self.head);

        if self.tail.is_none() {
            self.tail = Some(node);
        }

        self.head = Some(node);
        self.size += 1;
    }

    pub fn add_last(&mut self, data: impl Into<Option<T>>) {
        let node = self.alloc(data.into(), None);

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(node),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.size += 1;
    }

    pub fn peek_first(&self) -> Result<Option<&T>, CollectionError> {
        let head = self.head.ok_or(CollectionError::EmptyCollection)?;
        Ok(self.slots[head].data.as_ref())
    }

    pub fn peek_last(&self) -> Result<Option<&T>, CollectionError> {
        let tail = self.tail.ok_or(CollectionError::EmptyCollection)?;
        Ok(self.slots[tail].data.as_ref())
    }

    pub fn remove_first(&mut self) -> Result<Option<T>, CollectionError> {
        let head = self.head.ok_or(CollectionError::EmptyCollection)?;
        self.head = self.slots[head].next;
        self.size -= 1;

        if self.head.is_none() {
            self.tail = None;
        }

        Ok(self.release(head))
    }

    /// Removes the last node.
    ///
    /// There is no back link, so this walks the chain to find the
    /// predecessor of the tail and costs O(n).
    pub fn remove_last(&mut self) -> Result<Option<T>, CollectionError> {
        if self.size <= 1 {
            return self.remove_first();
        }

        let mut predecessor = self.head;
        for _ in 0..self.size - 2 {
            predecessor = predecessor.and_then(|i| self.slots[i].next);
        }
        let Some(predecessor) = predecessor else {
            unreachable!("chain is shorter than its recorded size");
        };
        let Some(last) = self.slots[predecessor].next.take() else {
            unreachable!("predecessor of the tail has no successor");
        };

        self.tail = Some(predecessor);
        self.size -= 1;

        Ok(self.release(last))
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(len = self.size, "clearing singly linked list");
        }

        let mut current = self.head;
        while let Some(index) = current {
            current = self.slots[index].next;
            self.release(index);
        }

        self.head = None;
        self.tail = None;
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.size,
        }
    }

    fn alloc(&mut self, data: Option<T>, next: Link) -> usize {
        match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index];
                self.free_head = slot.next;
                slot.data = data;
                slot.next = next;
                index
            }
            None => {
                self.slots.push(Slot { data, next });
                self.slots.len() - 1
            }
        }
    }

    /// Clears the slot's payload and puts it on the free list.
    fn release(&mut self, index: usize) -> Option<T> {
        let slot = &mut self.slots[index];
        let data = slot.data.take();
        slot.next = self.free_head;
        self.free_head = Some(index);
        data
    }
}

impl<T: fmt::Debug> fmt::Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back traversal of a [SinglyLinkedList].
pub struct Iter<'a, T> {
    list: &'a SinglyLinkedList<T>,
    next: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = Option<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = &self.list.slots[self.next?];
        self.next = slot.next;
        self.remaining -= 1;
        Some(slot.data.as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> HasLength for SinglyLinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for SinglyLinkedList<T> {
    type Item<'a>
        = Option<&'a T>
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        SinglyLinkedList::iter(self)
    }
}

impl<T> EndAccess for SinglyLinkedList<T> {
    type Item = T;
    type Error = CollectionError;

    fn add_first(&mut self, item: Option<T>) {
        self.add_first(item);
    }

    fn add_last(&mut self, item: Option<T>) {
        self.add_last(item);
    }

    fn peek_first(&self) -> Result<Option<&T>, CollectionError> {
        self.peek_first()
    }

    fn peek_last(&self) -> Result<Option<&T>, CollectionError> {
        self.peek_last()
    }

    fn remove_first(&mut self) -> Result<Option<T>, CollectionError> {
        self.remove_first()
    }

    fn remove_last(&mut self) -> Result<Option<T>, CollectionError> {
        self.remove_last()
    }

    fn clear(&mut self) {
        self.clear();
    }
}
