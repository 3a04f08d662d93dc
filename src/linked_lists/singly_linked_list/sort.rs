use core::cmp::Ordering;

use log::trace;

use super::SinglyLinkedList;
use crate::linked_lists::node::Link;

impl<T> SinglyLinkedList<T> {
    /// Sorts the list in ascending order.
    ///
    /// This is a stable merge sort that relinks the existing nodes, O(n log n).
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sorts the list with a comparator, keeping equal elements in their original order.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!("sorting list of size {}", self.size);
        // if the comparator panics the nodes are lost, the list is left empty and consistent
        let len = core::mem::take(&mut self.size);
        let head = self.head.take();
        self.head = merge_sort(head, len, &mut compare);
        self.size = len;
    }
}

// recursion depth is log2(len), the merge itself is iterative
fn merge_sort<T, F>(mut head: Link<T>, len: usize, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if len < 2 {
        return head;
    }
    let mid = len / 2;
    let back = split_off(&mut head, mid);
    let front = merge_sort(head, mid, compare);
    let back = merge_sort(back, len - mid, compare);
    merge(front, back, compare)
}

/// Detaches and returns everything after the first `at` nodes.
fn split_off<T>(head: &mut Link<T>, at: usize) -> Link<T> {
    let mut link = head;
    for _ in 0..at {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link.take()
}

fn merge<T, F>(mut front: Link<T>, mut back: Link<T>, compare: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut head: Link<T> = None;
    let mut tail = &mut head;
    loop {
        // ties take from the front run to keep the sort stable
        let back_first = match (front.as_deref(), back.as_deref()) {
            (Some(a), Some(b)) => compare(&b.data, &a.data) == Ordering::Less,
            _ => break,
        };
        let source = if back_first { &mut back } else { &mut front };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = if front.is_some() { front } else { back };
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::panic::{catch_unwind, AssertUnwindSafe};

    #[test]
    fn sort_small() {
        let mut lst = SinglyLinkedList::from([3, 1, 2]);
        lst.sort();
        assert_eq!(lst.to_vec(), vec![1, 2, 3]);
        assert_eq!(lst.size(), 3);

        let mut empty: SinglyLinkedList<i32> = SinglyLinkedList::new();
        empty.sort();
        assert!(empty.empty());

        let mut one = SinglyLinkedList::with_value(1);
        one.sort();
        assert_eq!(one.to_vec(), vec![1]);
    }

    #[test]
    fn sort_matches_vec() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for len in [2, 3, 7, 64, 1000] {
            let items: Vec<i32> = (0..len).map(|_| rng.gen_range(-50..50)).collect();
            let mut lst: SinglyLinkedList<i32> = items.iter().copied().collect();
            let mut expected = items;
            expected.sort();
            lst.sort();
            assert_eq!(lst.to_vec(), expected);
            assert_eq!(lst.size(), len);
        }
    }

    #[test]
    fn sort_is_stable() {
        let mut lst = SinglyLinkedList::from([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]);
        lst.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            lst.to_vec(),
            vec![(0, 'e'), (1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]
        );
    }

    #[test]
    fn panicking_comparator_leaves_list_consistent() {
        let mut lst = SinglyLinkedList::from([3, 1, 2]);
        let res = catch_unwind(AssertUnwindSafe(|| {
            lst.sort_by(|a, b| if *a == 2 || *b == 2 { panic!("no twos") } else { a.cmp(b) })
        }));
        assert!(res.is_err());
        assert_eq!(lst.size(), 0);
        assert!(lst.empty());

        lst.push_back(4);
        lst.push_front(5);
        assert_eq!(lst.size(), 2);
        assert_eq!(lst.to_vec(), vec![5, 4]);
    }

    #[test]
    fn sort_descending() {
        let mut lst = SinglyLinkedList::from([1, 5, 3]);
        lst.sort_by(|a, b| b.cmp(a));
        assert_eq!(lst.to_vec(), vec![5, 3, 1]);
        // the chain is still usable after relinking
        lst.push_back(0);
        assert_eq!(lst.back(), Some(&0));
    }
}
