//! Randomized differential testing of `slist::SinglyLinkedList` against a `Vec` model.

use log::{error, info};
use rand::{rngs::StdRng, SeedableRng};
use slist::SinglyLinkedList;
use thiserror::Error;

pub mod config;
mod traits;

pub use config::{ConfigError, TesterConfig};
pub use traits::*;

/// The first operation whose result or resulting contents differed from the model.
#[derive(Error, Debug)]
#[error(
    "operation {op_num} ({operation:?}) diverged with seed {seed}: \
     expected {expected:?} leaving {reference:?}, got {actual:?} leaving {target:?}"
)]
pub struct OperationFailure {
    pub seed: u64,
    pub max_value: i32,
    pub op_num: usize,
    pub operation: ListOperation,
    pub expected: OpResult,
    pub actual: OpResult,
    pub reference: Vec<i32>,
    pub target: Vec<i32>,
}

fn generator(seed: u64, max_value: i32) -> ListOperationGenerator {
    ListOperationGenerator::from_rng(StdRng::seed_from_u64(seed), max_value)
}

/// Runs `config.ops` random operations against a list and the model.
pub fn run(config: &TesterConfig) -> Result<(), OperationFailure> {
    let seed = config.resolve_seed();
    info!("running {} list operations with seed {seed}", config.ops);
    run_seeded(seed, config.ops, config.max_value)
}

pub fn run_seeded(seed: u64, ops: usize, max_value: i32) -> Result<(), OperationFailure> {
    let mut target = SinglyLinkedList::new();
    let mut gen = generator(seed, max_value);
    for op_num in 0..ops {
        let Some((operation, expected)) = gen.next() else {
            break;
        };
        let actual = operation.apply(&mut target);
        let contents = target.to_vec();
        if actual != expected || contents != *gen.data() || target.size() != gen.data().len() {
            let failure = OperationFailure {
                seed,
                max_value,
                op_num,
                operation,
                expected,
                actual,
                reference: gen.data().clone(),
                target: contents,
            };
            error!("{failure}");
            return Err(failure);
        }
    }
    Ok(())
}

impl OperationFailure {
    /// Replays the failing run, logging the last few operations before the divergence.
    pub fn playback(&self) {
        info!("running playback for seed {}", self.seed);
        let mut target = SinglyLinkedList::new();
        let gen = generator(self.seed, self.max_value);
        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, expected)) in gen.take(self.op_num + 1).enumerate() {
            let actual = op.apply(&mut target);
            if ind >= lower {
                error!("--------- operation {ind} ----------");
                error!("operation: {op:?}");
                error!("list state: {target:?}");
                error!("expected / actual : {expected:?}, {actual:?}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SEED_VAR;
    use slist::ListError;
    use std::panic::catch_unwind;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn operations_apply() {
        let mut lst = SinglyLinkedList::new();
        assert_eq!(ListOperation::PopFront.apply(&mut lst), OpResult::Value(Err(ListError::Empty)));
        assert_eq!(ListOperation::PushBack(2).apply(&mut lst), OpResult::Unit);
        assert_eq!(ListOperation::PushFront(1).apply(&mut lst), OpResult::Unit);
        assert_eq!(
            ListOperation::PushAt(5, 0).apply(&mut lst),
            OpResult::Status(Err(ListError::IndexOutOfBounds { index: 5, size: 2 }))
        );
        assert_eq!(ListOperation::Append(vec![3, 1]).apply(&mut lst), OpResult::Unit);
        assert_eq!(lst.to_vec(), vec![1, 2, 3, 1]);
        assert_eq!(ListOperation::Find(1).apply(&mut lst), OpResult::Position(Some(0)));
        assert_eq!(ListOperation::Replace(1, 7).apply(&mut lst), OpResult::Flag(true));
        assert_eq!(ListOperation::Sort.apply(&mut lst), OpResult::Unit);
        assert_eq!(lst.to_vec(), vec![1, 2, 3, 7]);
        assert_eq!(ListOperation::Get(3).apply(&mut lst), OpResult::Value(Ok(7)));
    }

    #[test]
    fn failure_names_its_seed() {
        let failure = OperationFailure {
            seed: 1234,
            max_value: 8,
            op_num: 3,
            operation: ListOperation::PopBack,
            expected: OpResult::Value(Ok(1)),
            actual: OpResult::Value(Err(ListError::Empty)),
            reference: vec![],
            target: vec![],
        };
        assert!(failure.to_string().contains("seed 1234"));
    }

    #[test]
    fn generator_is_deterministic() {
        let a: Vec<_> = generator(7, 16).take(200).collect();
        let b: Vec<_> = generator(7, 16).take(200).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn fixed_seeds() {
        init_logger();
        for seed in [0, 1, 0xdead_beef, u64::MAX] {
            if let Err(failure) = run_seeded(seed, 3000, 32) {
                failure.playback();
                panic!("{failure}");
            }
        }
    }

    #[test]
    fn from_env() {
        init_logger();
        let config = TesterConfig::from_env().expect("invalid tester configuration");
        let seed = config.resolve_seed();
        let (ops, max_value) = (config.ops, config.max_value);
        info!("running {ops} list operations with seed {seed}");
        match catch_unwind(|| run_seeded(seed, ops, max_value)) {
            Ok(Ok(())) => {}
            Ok(Err(failure)) => {
                failure.playback();
                panic!("{failure}");
            }
            Err(_) => panic!("list panicked during run, rerun with {SEED_VAR}={seed}"),
        }
    }
}
