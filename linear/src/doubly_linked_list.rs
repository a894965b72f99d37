use crate::error::CollectionError;
use collection_traits::{EndAccess, HasLength, Iterable, LinearSearch};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

// Source of list ids, so a handle can only be used with the list that issued it.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

// Position of a node in the slot arena.
type Link = Option<usize>;

#[derive(Debug)]
struct Slot<T> {
    data: Option<T>,
    prev: Link,
    // For free slots this is the next entry of the free list.
    next: Link,
    generation: u32,
    in_use: bool,
}

/// Handle to a node of a [DoublyLinkedList].
///
/// Returned by the insertion methods and accepted by [DoublyLinkedList::remove]
/// for O(1) removal. A handle goes stale once its node is removed, even if the
/// slot is reused later. Handles issued by one list are rejected by every
/// other list.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeRef {
    list: u64,
    index: usize,
    generation: u32,
}

/// Bidirectional chain of nodes.
///
/// Nodes live in an arena owned by the list and link to each other by slot
/// index. `prev` links never own anything, they only exist for traversal
/// and splicing.
///
/// The arena never shrinks: removed nodes and [DoublyLinkedList::clear] put
/// their slots on a free list for later insertions, so memory stays at the
/// high-water mark of the list's length until the list is dropped.
pub struct DoublyLinkedList<T> {
    id: u64,
    slots: Vec<Slot<T>>,
    free_head: Link,
    head: Link,
    tail: Link,
    size: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self {
            id: NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed),
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

    pub fn add_first(&mut self, data: impl Into<Option<T>>) -> NodeRef {
        let node = self.alloc(data.into(), None, self.head);

        match self.head {
            Some(head) => self.slots[head].prev = Some(node.index),
            None => self.tail = Some(node.index),
        }

        self.head = Some(node.index);
        self.size += 1;
        node
    }

    pub fn add_last(&mut self, data: impl Into<Option<T>>) -> NodeRef {
        let node = self.alloc(data.into(), self.tail, None);

        match self.tail {
            Some(tail) => self.slots[tail].next = Some(node.index),
            None => self.head = Some(node.index),
        }

        self.tail = Some(node.index);
        self.size += 1;
        node
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

        match self.head {
            Some(new_head) => self.slots[new_head].prev = None,
            None => self.tail = None,
        }

        Ok(self.release(head))
    }

    pub fn remove_last(&mut self) -> Result<Option<T>, CollectionError> {
        let tail = self.tail.ok_or(CollectionError::EmptyCollection)?;
        self.tail = self.slots[tail].prev;
        self.size -= 1;

        match self.tail {
            Some(new_tail) => self.slots[new_tail].next = None,
            None => self.head = None,
        }

        Ok(self.release(tail))
    }

    /// Splices `node` out of the chain in O(1) and returns its payload.
    ///
    /// The removed node's links and payload are cleared, and `node` becomes
    /// stale.
    pub fn remove(&mut self, node: NodeRef) -> Result<Option<T>, CollectionError> {
        let slot = self.slot(node)?;
        let (prev, next) = (slot.prev, slot.next);

        match (prev, next) {
            (None, _) => self.remove_first(),
            (_, None) => self.remove_last(),
            (Some(prev), Some(next)) => {
                self.slots[next].prev = Some(prev);
                self.slots[prev].next = Some(next);
                self.size -= 1;
                Ok(self.release(node.index))
            }
        }
    }

    /// Removes the node at `index`, walking from whichever end is closer.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<T>, CollectionError> {
        CollectionError::check_index(index, self.size)?;

        let current = if index < self.size / 2 {
            let mut current = self.head;
            for _ in 0..index {
                current = current.and_then(|i| self.slots[i].next);
            }
            current
        } else {
            let mut current = self.tail;
            for _ in index..self.size - 1 {
                current = current.and_then(|i| self.slots[i].prev);
            }
            current
        };

        let Some(current) = current else {
            unreachable!("chain is shorter than its recorded size");
        };

        self.remove(self.node_ref(current))
    }

    /// Removes the first node whose payload matches `needle`.
    ///
    /// See [DoublyLinkedList::index_of] for the matching rules.
    pub fn remove_value(&mut self, needle: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        let found = self
            .indices()
            .find(|&i| payload_matches(self.slots[i].data.as_ref(), needle));

        match found {
            Some(index) => self.remove(self.node_ref(index)).is_ok(),
            None => false,
        }
    }

    /// Position of the first node whose payload matches `needle`.
    ///
    /// `None` as the needle finds the first node holding no value, it never
    /// matches a node holding one.
    pub fn index_of(&self, needle: Option<&T>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|data| payload_matches(data, needle))
    }

    pub fn contains(&self, needle: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        self.index_of(needle).is_some()
    }

    /// Removes every node. Their slots stay allocated on the free list.
    pub fn clear(&mut self) {
        if !self.is_empty() {
            debug!(len = self.size, "clearing doubly linked list");
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

    /// Payload of a live node.
    pub fn get(&self, node: NodeRef) -> Result<Option<&T>, CollectionError> {
        Ok(self.slot(node)?.data.as_ref())
    }

    pub fn front(&self) -> Option<NodeRef> {
        self.head.map(|i| self.node_ref(i))
    }

    pub fn back(&self) -> Option<NodeRef> {
        self.tail.map(|i| self.node_ref(i))
    }

    pub fn next_of(&self, node: NodeRef) -> Result<Option<NodeRef>, CollectionError> {
        Ok(self.slot(node)?.next.map(|i| self.node_ref(i)))
    }

    pub fn prev_of(&self, node: NodeRef) -> Result<Option<NodeRef>, CollectionError> {
        Ok(self.slot(node)?.prev.map(|i| self.node_ref(i)))
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
            remaining: self.size,
        }
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.head, |&i| self.slots[i].next)
    }

    fn node_ref(&self, index: usize) -> NodeRef {
        NodeRef {
            list: self.id,
            index,
            generation: self.slots[index].generation,
        }
    }

    fn slot(&self, node: NodeRef) -> Result<&Slot<T>, CollectionError> {
        if node.list != self.id {
            return Err(CollectionError::StaleNode);
        }

        self.slots
            .get(node.index)
            .filter(|slot| slot.in_use && slot.generation == node.generation)
            .ok_or(CollectionError::StaleNode)
    }

    fn alloc(&mut self, data: Option<T>, prev: Link, next: Link) -> NodeRef {
        let index = match self.free_head {
            Some(index) => {
                let slot = &mut self.slots[index];
                self.free_head = slot.next;
                slot.data = data;
                slot.prev = prev;
                slot.next = next;
                slot.in_use = true;
                index
            }
            None => {
                self.slots.push(Slot {
                    data,
                    prev,
                    next,
                    generation: 0,
                    in_use: true,
                });
                self.slots.len() - 1
            }
        };

        self.node_ref(index)
    }

    /// Clears the slot's links and payload and puts it on the free list.
    fn release(&mut self, index: usize) -> Option<T> {
        let slot = &mut self.slots[index];
        let data = slot.data.take();
        slot.prev = None;
        slot.next = self.free_head;
        slot.in_use = false;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_head = Some(index);
        data
    }
}

/// Null-aware payload equality: an absent needle matches only an absent
/// payload, a present needle matches only an equal present payload.
fn payload_matches<T: PartialEq>(data: Option<&T>, needle: Option<&T>) -> bool {
    match (data, needle) {
        (None, None) => true,
        (Some(data), Some(needle)) => data == needle,
        _ => false,
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Front-to-back traversal of a [DoublyLinkedList].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
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

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = Option<&'a T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> HasLength for DoublyLinkedList<T> {
    fn len(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Iterable for DoublyLinkedList<T> {
    type Item<'a>
        = Option<&'a T>
    where
        Self: 'a;

    fn iter<'a>(&'a self) -> impl Iterator<Item = Self::Item<'a>> {
        DoublyLinkedList::iter(self)
    }
}

impl<T> EndAccess for DoublyLinkedList<T> {
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

impl<T: PartialEq> LinearSearch for DoublyLinkedList<T> {
    type Needle<'a>
        = Option<&'a T>
    where
        Self: 'a;

    fn index_of<'a>(&'a self, needle: Option<&'a T>) -> Option<usize> {
        self.index_of(needle)
    }
}
