mod node;
mod singly_linked_list;

pub use node::SlNode;
pub use singly_linked_list::SinglyLinkedList;
