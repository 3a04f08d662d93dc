//! A singly linked list built from exclusively owned nodes.

pub mod error;
pub mod linked_lists;

pub use error::{ListError, ListResult};
pub use linked_lists::{SinglyLinkedList, SlNode};
