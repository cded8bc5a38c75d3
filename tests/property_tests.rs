#![cfg(not(loom))]

use std::collections::VecDeque;

use proptest::prelude::*;
use turbo_spsc::{Cached, Full, Observe, Queue, Uncached};

#[derive(Debug, Clone)]
enum Op {
    Offer(u64),
    Poll,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u64>().prop_map(Op::Offer), Just(Op::Poll)]
}

/// Replays `ops` against the queue and a `VecDeque` bounded at `capacity`.
fn check_against_model<O: Observe>(capacity: usize, ops: &[Op]) -> Result<(), TestCaseError> {
    let mut queue = Queue::<u64, O>::with_observer(capacity).unwrap();
    let mut model = VecDeque::with_capacity(capacity);
    let mut offered = 0usize;
    let mut polled = 0usize;

    for op in ops {
        match *op {
            Op::Offer(v) => {
                let result = queue.offer(v);
                if model.len() < capacity {
                    prop_assert_eq!(result, Ok(()));
                    model.push_back(v);
                    offered += 1;
                } else {
                    prop_assert_eq!(result, Err(Full(v)));
                }
            }
            Op::Poll => {
                let got = queue.poll();
                prop_assert_eq!(got, model.pop_front());
                if got.is_some() {
                    polled += 1;
                }
            }
        }
        prop_assert_eq!(queue.len(), model.len());
    }

    while let Some(v) = queue.poll() {
        prop_assert_eq!(Some(v), model.pop_front());
        polled += 1;
    }
    prop_assert!(model.is_empty());
    prop_assert_eq!(offered, polled);
    Ok(())
}

proptest! {
    #[test]
    fn cached_matches_model(
        capacity in 1usize..12,
        ops in proptest::collection::vec(op_strategy(), 0..400),
    ) {
        check_against_model::<Cached>(capacity, &ops)?;
    }

    #[test]
    fn uncached_matches_model(
        capacity in 1usize..12,
        ops in proptest::collection::vec(op_strategy(), 0..400),
    ) {
        check_against_model::<Uncached>(capacity, &ops)?;
    }

    #[test]
    fn clear_then_reuse(
        capacity in 1usize..8,
        before in proptest::collection::vec(op_strategy(), 0..50),
        after in proptest::collection::vec(op_strategy(), 0..50),
    ) {
        let mut queue = Queue::<u64>::new(capacity).unwrap();
        for op in &before {
            match *op {
                Op::Offer(v) => { let _ = queue.offer(v); }
                Op::Poll => { let _ = queue.poll(); }
            }
        }
        queue.clear();
        prop_assert!(queue.is_empty());

        let mut model = VecDeque::new();
        for op in &after {
            match *op {
                Op::Offer(v) => {
                    if queue.offer(v).is_ok() {
                        model.push_back(v);
                    }
                }
                Op::Poll => prop_assert_eq!(queue.poll(), model.pop_front()),
            }
        }
    }
}
