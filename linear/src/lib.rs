//! Elementary linear containers: a singly linked list, a doubly linked list
//! and a growable array.
//!
//! The containers are independent of each other. They share the
//! [collection_traits] contract and a single error type.

#![forbid(unsafe_code)]

pub mod doubly_linked_list;
pub mod dynamic_array;
pub mod error;
pub mod singly_linked_list;

#[cfg(test)]
mod tests;

pub use doubly_linked_list::{DoublyLinkedList, NodeRef};
pub use dynamic_array::{DynamicArray, DEFAULT_CAPACITY};
pub use error::CollectionError;
pub use singly_linked_list::SinglyLinkedList;
