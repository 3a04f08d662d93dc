use rand::{Rng, SeedableRng};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations together with the result
// the reference implementation produced for each of them
pub trait OperationGenerator<R>:
    Iterator<Item = (Self::Operation, <Self::Operation as Operation>::Result)> + Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_rng(rng: R, max_value: i32) -> Self;
    fn data(&self) -> &Self::ReferenceImpl;
}

pub use impls::{ListOperation, ListOperationGenerator, OpResult};

mod impls {
    use super::*;
    use rand::rngs::StdRng;
    use slist::{ListError, ListResult, SinglyLinkedList};

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ListOperation {
        PushFront(i32),
        PushBack(i32),
        PushAt(usize, i32),
        PopFront,
        PopBack,
        PopAt(usize),
        DeleteAt(usize),
        Erase(i32),
        Replace(i32, i32),
        Find(i32),
        Contains(i32),
        Get(usize),
        Reverse,
        Sort,
        Clear,
        Append(Vec<i32>),
    }

    const VARIANTS: u32 = 16;

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum OpResult {
        Unit,
        Value(ListResult<i32>),
        Status(ListResult<()>),
        Flag(bool),
        Position(Option<usize>),
    }

    impl Operation for ListOperation {
        type Result = OpResult;
        type Target = SinglyLinkedList<i32>;

        fn apply(&self, lst: &mut Self::Target) -> Self::Result {
            match self {
                Self::PushFront(v) => {
                    lst.push_front(*v);
                    OpResult::Unit
                }
                Self::PushBack(v) => {
                    lst.push_back(*v);
                    OpResult::Unit
                }
                Self::PushAt(i, v) => OpResult::Status(lst.push_at(*i, *v)),
                Self::PopFront => OpResult::Value(lst.pop_front()),
                Self::PopBack => OpResult::Value(lst.pop_back()),
                Self::PopAt(i) => OpResult::Value(lst.pop_at(*i)),
                Self::DeleteAt(i) => OpResult::Status(lst.delete_at(*i)),
                Self::Erase(v) => OpResult::Flag(lst.erase(v)),
                Self::Replace(old, new) => OpResult::Flag(lst.replace(old, *new)),
                Self::Find(v) => OpResult::Position(lst.find(v)),
                Self::Contains(v) => OpResult::Flag(lst.contains(v)),
                Self::Get(i) => OpResult::Value(lst.get(*i).copied()),
                Self::Reverse => {
                    lst.reverse();
                    OpResult::Unit
                }
                Self::Sort => {
                    lst.sort();
                    OpResult::Unit
                }
                Self::Clear => {
                    lst.clear();
                    OpResult::Unit
                }
                Self::Append(items) => {
                    *lst += &SinglyLinkedList::from(items.clone());
                    OpResult::Unit
                }
            }
        }
    }

    /// Produces random list operations and the result a `Vec` gives for each.
    pub struct ListOperationGenerator<R = StdRng>
    where
        R: Rng + SeedableRng,
    {
        rng: R,
        max_value: i32,
        data: Vec<i32>,
    }

    impl<R> OperationGenerator<R> for ListOperationGenerator<R>
    where
        R: Rng + SeedableRng,
    {
        type Operation = ListOperation;
        type ReferenceImpl = Vec<i32>;
        fn from_rng(rng: R, max_value: i32) -> Self {
            Self {
                rng,
                max_value,
                data: Vec::new(),
            }
        }
        fn data(&self) -> &Self::ReferenceImpl {
            &self.data
        }
    }

    impl<R: Rng + SeedableRng> ListOperationGenerator<R> {
        fn value(&mut self) -> i32 {
            self.rng.gen_range(0..self.max_value)
        }

        // mostly valid, occasionally one or two past the end
        fn index(&mut self) -> usize {
            self.rng.gen_range(0..self.data.len() + 2)
        }

        fn out_of_bounds(&self, index: usize) -> ListError {
            ListError::IndexOutOfBounds {
                index,
                size: self.data.len(),
            }
        }

        fn pop(&mut self, index: usize) -> ListResult<i32> {
            if index < self.data.len() {
                Ok(self.data.remove(index))
            } else {
                Err(self.out_of_bounds(index))
            }
        }

        fn pop_end(&mut self, front: bool) -> ListResult<i32> {
            match (front, self.data.is_empty()) {
                (_, true) => Err(ListError::Empty),
                (true, false) => Ok(self.data.remove(0)),
                (false, false) => Ok(self.data.remove(self.data.len() - 1)),
            }
        }
    }

    impl<R: Rng + SeedableRng> Iterator for ListOperationGenerator<R> {
        type Item = (ListOperation, OpResult);

        fn next(&mut self) -> Option<Self::Item> {
            // pushes are weighted so the list tends to grow
            let choice = self.rng.gen_range(0..VARIANTS + 4);
            let item = match choice {
                0 | 16 | 17 => {
                    let v = self.value();
                    self.data.insert(0, v);
                    (ListOperation::PushFront(v), OpResult::Unit)
                }
                1 | 18 | 19 => {
                    let v = self.value();
                    self.data.push(v);
                    (ListOperation::PushBack(v), OpResult::Unit)
                }
                2 => {
                    let (i, v) = (self.index(), self.value());
                    let res = if i <= self.data.len() {
                        self.data.insert(i, v);
                        Ok(())
                    } else {
                        Err(self.out_of_bounds(i))
                    };
                    (ListOperation::PushAt(i, v), OpResult::Status(res))
                }
                3 => (ListOperation::PopFront, OpResult::Value(self.pop_end(true))),
                4 => (ListOperation::PopBack, OpResult::Value(self.pop_end(false))),
                5 => {
                    let i = self.index();
                    (ListOperation::PopAt(i), OpResult::Value(self.pop(i)))
                }
                6 => {
                    let i = self.index();
                    let res = self.pop(i).map(drop);
                    (ListOperation::DeleteAt(i), OpResult::Status(res))
                }
                7 => {
                    let v = self.value();
                    let pos = self.data.iter().position(|x| *x == v);
                    if let Some(p) = pos {
                        self.data.remove(p);
                    }
                    (ListOperation::Erase(v), OpResult::Flag(pos.is_some()))
                }
                8 => {
                    let (old, new) = (self.value(), self.value());
                    let slot = self.data.iter_mut().find(|x| **x == old);
                    let found = slot.is_some();
                    if let Some(x) = slot {
                        *x = new;
                    }
                    (ListOperation::Replace(old, new), OpResult::Flag(found))
                }
                9 => {
                    let v = self.value();
                    let pos = self.data.iter().position(|x| *x == v);
                    (ListOperation::Find(v), OpResult::Position(pos))
                }
                10 => {
                    let v = self.value();
                    (
                        ListOperation::Contains(v),
                        OpResult::Flag(self.data.contains(&v)),
                    )
                }
                11 => {
                    let i = self.index();
                    let res = self
                        .data
                        .get(i)
                        .copied()
                        .ok_or_else(|| self.out_of_bounds(i));
                    (ListOperation::Get(i), OpResult::Value(res))
                }
                12 => {
                    self.data.reverse();
                    (ListOperation::Reverse, OpResult::Unit)
                }
                13 => {
                    self.data.sort();
                    (ListOperation::Sort, OpResult::Unit)
                }
                14 => {
                    // keep clears rare so lists get long enough to be interesting
                    if self.rng.gen_bool(0.1) {
                        self.data.clear();
                        (ListOperation::Clear, OpResult::Unit)
                    } else {
                        self.data.reverse();
                        (ListOperation::Reverse, OpResult::Unit)
                    }
                }
                15 => {
                    let len = self.rng.gen_range(0..5);
                    let items: Vec<i32> = (0..len).map(|_| self.value()).collect();
                    self.data.extend_from_slice(&items);
                    (ListOperation::Append(items), OpResult::Unit)
                }
                _ => unreachable!(),
            };
            Some(item)
        }
    }
}
