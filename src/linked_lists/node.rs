use core::{
    fmt::{self, Debug, Display, Formatter},
    ops::{Add, Sub},
};

pub(crate) type Link<T> = Option<Box<SlNode<T>>>;

/// A single cell of a [`SinglyLinkedList`](super::SinglyLinkedList).
///
/// The successor link is owned by the node and can only be rewired by the list, so a
/// node is never part of two chains and chains never form cycles. Nodes handed out to
/// callers (through `Clone`, [`SlNode::copy`] or arithmetic) never have a successor.
#[derive(Default)]
pub struct SlNode<T> {
    pub data: T,
    pub(crate) next: Link<T>,
}

impl<T> SlNode<T> {
    pub fn new(data: T) -> Self {
        Self { data, next: None }
    }

    /// The following node in the chain, if any.
    pub fn next(&self) -> Option<&SlNode<T>> {
        self.next.as_deref()
    }

    pub fn into_data(self) -> T {
        self.data
    }

    /// Allocates a detached node holding a copy of the payload.
    pub fn copy(&self) -> Box<SlNode<T>>
    where
        T: Clone,
    {
        Box::new(self.clone())
    }
}

// the successor is not cloned, a copied node is always detached
impl<T: Clone> Clone for SlNode<T> {
    fn clone(&self) -> Self {
        Self::new(self.data.clone())
    }
}

impl<T: PartialEq> PartialEq for SlNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for SlNode<T> {}

impl<T: Add<Output = T>> Add for SlNode<T> {
    type Output = SlNode<T>;
    fn add(self, rhs: Self) -> Self::Output {
        SlNode::new(self.data + rhs.data)
    }
}

impl<'a, T> Add for &'a SlNode<T>
where
    &'a T: Add<Output = T>,
{
    type Output = SlNode<T>;
    fn add(self, rhs: Self) -> Self::Output {
        SlNode::new(&self.data + &rhs.data)
    }
}

impl<T: Sub<Output = T>> Sub for SlNode<T> {
    type Output = SlNode<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        SlNode::new(self.data - rhs.data)
    }
}

impl<'a, T> Sub for &'a SlNode<T>
where
    &'a T: Sub<Output = T>,
{
    type Output = SlNode<T>;
    fn sub(self, rhs: Self) -> Self::Output {
        SlNode::new(&self.data - &rhs.data)
    }
}

impl<T: Debug> Debug for SlNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

impl<T: Display> Display for SlNode<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}
