use core::ops::{Add, AddAssign, Index, IndexMut};

use super::SinglyLinkedList;

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

/// Panics when `index` is out of bounds, use [`SinglyLinkedList::get`] for a checked lookup.
impl<T> Index<usize> for SinglyLinkedList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(data) => data,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for SinglyLinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(data) => data,
            Err(e) => panic!("{e}"),
        }
    }
}

/// Concatenates deep copies of both lists.
impl<T: Clone> Add for &SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;
    fn add(self, rhs: Self) -> Self::Output {
        let mut lst = self.clone();
        lst += rhs;
        lst
    }
}

impl<T: Clone> Add<&SinglyLinkedList<T>> for SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;
    fn add(mut self, rhs: &SinglyLinkedList<T>) -> Self::Output {
        self += rhs;
        self
    }
}

/// Splices the chain of `rhs` onto `self` without copying.
impl<T> Add for SinglyLinkedList<T> {
    type Output = SinglyLinkedList<T>;
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Clone> AddAssign<&SinglyLinkedList<T>> for SinglyLinkedList<T> {
    fn add_assign(&mut self, rhs: &SinglyLinkedList<T>) {
        self.extend(rhs.iter().cloned());
    }
}

impl<T> AddAssign for SinglyLinkedList<T> {
    fn add_assign(&mut self, mut rhs: Self) {
        self.append(&mut rhs);
    }
}
