use core::fmt::{self, Debug, Display, Formatter};

use log::{debug, trace};

use super::node::{Link, SlNode};
use crate::error::{ListError, ListResult};

mod ops;
mod sort;

/// A singly linked list with a cached element count.
///
/// The list owns its head node and every node owns its successor. There is no tail
/// pointer, so operations at the back or at an index walk the chain from the head.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    size: usize,
}

impl<T> SinglyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list holding a single element.
    pub fn with_value(data: T) -> Self {
        let mut lst = Self::new();
        lst.push_front(data);
        lst
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.data)
    }

    pub fn back(&self) -> Option<&T> {
        self.iter().last()
    }

    /// Returns the node at `index`.
    pub fn at(&self, index: usize) -> ListResult<&SlNode<T>> {
        self.check_index(index)?;
        let mut node = self.head.as_deref();
        for _ in 0..index {
            node = node.and_then(SlNode::next);
        }
        node.ok_or(ListError::IndexOutOfBounds {
            index,
            size: self.size,
        })
    }

    pub fn get(&self, index: usize) -> ListResult<&T> {
        self.at(index).map(|node| &node.data)
    }

    pub fn get_mut(&mut self, index: usize) -> ListResult<&mut T> {
        self.check_index(index)?;
        let size = self.size;
        self.link_mut(index)
            .as_deref_mut()
            .map(|node| &mut node.data)
            .ok_or(ListError::IndexOutOfBounds { index, size })
    }

    /// Inserts an element at the beginning of the list
    pub fn push_front(&mut self, data: T) {
        let node = SlNode {
            data,
            next: self.head.take(),
        };
        self.head = Some(Box::new(node));
        self.size += 1;
    }

    /// Appends an element, walking the whole chain to find the tail.
    pub fn push_back(&mut self, data: T) {
        let tail = self.link_mut(self.size);
        *tail = Some(Box::new(SlNode::new(data)));
        self.size += 1;
    }

    /// Inserts `data` before the element at `index`. `index == size` appends.
    pub fn push_at(&mut self, index: usize, data: T) -> ListResult<()> {
        if index > self.size {
            debug!("push_at rejected index {index} for size {}", self.size);
            return Err(ListError::IndexOutOfBounds {
                index,
                size: self.size,
            });
        }
        let link = self.link_mut(index);
        let node = SlNode {
            data,
            next: link.take(),
        };
        *link = Some(Box::new(node));
        self.size += 1;
        Ok(())
    }

    pub fn pop_front(&mut self) -> ListResult<T> {
        self.check_non_empty()?;
        self.unlink(0)
    }

    pub fn pop_back(&mut self) -> ListResult<T> {
        self.check_non_empty()?;
        self.unlink(self.size - 1)
    }

    pub fn pop_at(&mut self, index: usize) -> ListResult<T> {
        self.check_index(index)?;
        self.unlink(index)
    }

    /// Removes the element at `index`, dropping its value.
    pub fn delete_at(&mut self, index: usize) -> ListResult<()> {
        self.pop_at(index).map(drop)
    }

    /// Removes the first element equal to `data`. Returns whether anything was removed.
    pub fn erase<Q>(&mut self, data: &Q) -> bool
    where
        Q: PartialEq<T> + ?Sized,
    {
        match self.find(data) {
            Some(index) => self.unlink(index).is_ok(),
            None => false,
        }
    }

    /// Overwrites the first element equal to `data` with `new_data`.
    /// Returns whether a match was found.
    pub fn replace<Q>(&mut self, data: &Q, new_data: T) -> bool
    where
        Q: PartialEq<T> + ?Sized,
    {
        let mut node = self.head.as_deref_mut();
        while let Some(n) = node {
            if data.eq(&n.data) {
                n.data = new_data;
                return true;
            }
            node = n.next.as_deref_mut();
        }
        false
    }

    pub fn clear(&mut self) {
        trace!("clearing list of size {}", self.size);
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
        self.size = 0;
    }

    /// Index of the first element equal to `data`.
    pub fn find<Q>(&self, data: &Q) -> Option<usize>
    where
        Q: PartialEq<T> + ?Sized,
    {
        self.iter().position(|elem| data.eq(elem))
    }

    pub fn contains<Q: PartialEq<T> + ?Sized>(&self, item: &Q) -> bool {
        self.iter().any(|s| item.eq(s))
    }

    /// Reverses the chain in place by relinking the existing nodes.
    pub fn reverse(&mut self) {
        trace!("reversing list of size {}", self.size);
        let mut reversed: Link<T> = None;
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Moves every node of `other` onto the end of this list, leaving `other` empty.
    pub fn append(&mut self, other: &mut Self) {
        trace!("appending {} nodes to list of size {}", other.size, self.size);
        let moved = other.size;
        let tail = self.link_mut(self.size);
        *tail = other.head.take();
        self.size += moved;
        other.size = 0;
    }

    /// Calls `f` with every node, front to back.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&SlNode<T>),
    {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            f(n);
            node = n.next();
        }
    }

    /// Calls `f` with every node and the same `args`, front to back.
    pub fn for_each_with<A, F>(&self, args: &A, mut f: F)
    where
        A: ?Sized,
        F: FnMut(&SlNode<T>, &A),
    {
        self.for_each(|node| f(node, args))
    }

    /// Calls `f` with a mutable reference to every element, front to back.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut node = self.head.as_deref_mut();
        while let Some(n) = node {
            f(&mut n.data);
            node = n.next.as_deref_mut();
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    fn check_index(&self, index: usize) -> ListResult<()> {
        if index < self.size {
            Ok(())
        } else {
            debug!("index {index} out of bounds for size {}", self.size);
            Err(ListError::IndexOutOfBounds {
                index,
                size: self.size,
            })
        }
    }

    fn check_non_empty(&self) -> ListResult<()> {
        if self.empty() {
            debug!("pop on empty list");
            Err(ListError::Empty)
        } else {
            Ok(())
        }
    }

    /// The link that owns the node at `index`; `index == size` yields the empty tail link.
    ///
    /// `index` must be at most `size`.
    fn link_mut(&mut self, index: usize) -> &mut Link<T> {
        debug_assert!(index <= self.size);
        let mut link = &mut self.head;
        for _ in 0..index {
            match link {
                Some(node) => link = &mut node.next,
                None => break,
            }
        }
        link
    }

    /// Detaches the node at `index` and returns its value.
    fn unlink(&mut self, index: usize) -> ListResult<T> {
        let size = self.size;
        let link = self.link_mut(index);
        let SlNode { data, next } = *link
            .take()
            .ok_or(ListError::IndexOutOfBounds { index, size })?;
        *link = next;
        self.size -= 1;
        Ok(data)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self {
            head: None,
            size: 0,
        }
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
    }
}

impl<T: Clone> Clone for SinglyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "SinglyLinkedList {{ size: {}, items: [", self.size)?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "] }}")
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem}")?
        }
        for elem in iter {
            write!(f, ", {elem}")?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

impl<T> Extend<T> for SinglyLinkedList<T> {
    // the new nodes are built in a separate list, a panicking iterator leaves self untouched
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut pending = SinglyLinkedList::new();
        let mut added = 0;
        let mut tail = &mut pending.head;
        for data in iter {
            tail = &mut tail.insert(Box::new(SlNode::new(data))).next;
            added += 1;
        }
        pending.size = added;
        self.append(&mut pending);
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(items: [T; N]) -> Self {
        items.into_iter().collect()
    }
}

impl<T> From<Vec<T>> for SinglyLinkedList<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

pub(crate) struct Iter<'a, T> {
    node: Option<&'a SlNode<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<Self::Item> {
        self.node.map(|node| {
            self.node = node.next();
            &node.data
        })
    }
}
