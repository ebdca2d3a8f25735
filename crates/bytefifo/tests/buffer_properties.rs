//! Occupancy, ordering and eviction laws of the byte FIFO.

use bytefifo::{BoundedFifo, FifoError, OverwriteFifo, RingBuffer};

fn drain<P: bytefifo::Policy>(buf: &mut RingBuffer<Vec<u8>, P>) -> Vec<u8> {
    let mut out = vec![0u8; buf.used()];
    buf.pop_block(&mut out).expect("exactly used bytes are buffered");
    out
}

#[test]
fn pushed_bytes_pop_in_order() {
    let mut buf = BoundedFifo::with_capacity(8).unwrap();
    buf.push_block(&[1, 2, 3]).unwrap();
    let mut out = [0u8; 3];
    buf.pop_block(&mut out).unwrap();
    assert_eq!(out, [1, 2, 3]);
}

#[test]
fn bounded_capacity_four_rejects_fifth_byte() {
    let mut buf = BoundedFifo::with_capacity(4).unwrap();
    for byte in 1..=4 {
        buf.push_byte(byte).unwrap();
    }
    assert_eq!(buf.available(), 0);
    assert!(matches!(
        buf.push_byte(5),
        Err(FifoError::NotSpace { requested: 1, available: 0 })
    ));
    assert_eq!(buf.used(), 4);
}

#[test]
fn overwrite_capacity_four_evicts_first_byte() {
    let mut buf = OverwriteFifo::with_capacity(4).unwrap();
    for byte in 1..=5 {
        buf.push_byte(byte).expect("overwrite pushes always succeed");
    }
    assert_eq!(buf.used(), 4);
    assert_eq!(drain(&mut buf), vec![2, 3, 4, 5]);
}

#[test]
fn repeated_queries_are_stable_until_mutation() {
    let mut buf = BoundedFifo::with_capacity(4).unwrap();
    buf.push_block(&[7, 8, 9]).unwrap();
    let first = buf.query(1).unwrap();
    assert_eq!(buf.query(1).unwrap(), first);
    assert_eq!(buf.used(), 3);

    buf.pop_byte().unwrap();
    assert_eq!(buf.query(1).unwrap(), 9);
}

#[test]
fn query_at_used_is_out_of_range() {
    let mut buf = BoundedFifo::with_capacity(4).unwrap();
    buf.push_block(&[1, 2]).unwrap();
    assert_eq!(
        buf.query(buf.used()),
        Err(FifoError::OutOfRange { index: 2, used: 2 })
    );
}

#[test]
fn reset_empties_regardless_of_content() {
    let mut buf = BoundedFifo::with_capacity(4).unwrap();
    buf.push_block(&[1, 2, 3, 4]).unwrap();
    buf.reset();
    assert_eq!(buf.used(), 0);
    assert_eq!(buf.available(), buf.capacity());

    buf.push_block(&[5, 6, 7, 8]).unwrap();
    assert_eq!(drain(&mut buf), vec![5, 6, 7, 8]);
}

#[test]
fn reset_leaves_storage_contents_in_place() {
    let mut buf = BoundedFifo::with_capacity(4).unwrap();
    buf.push_block(&[1, 2, 3]).unwrap();
    buf.reset();
    buf.push_byte(9).unwrap();
    assert_eq!(buf.into_storage(), vec![1, 2, 3, 9, 0]);
}

#[test]
fn wraparound_neither_duplicates_nor_loses() {
    let mut buf = BoundedFifo::with_capacity(4).unwrap();
    let mut popped = Vec::new();

    buf.push_block(&[1, 2, 3]).unwrap();
    let mut two = [0u8; 2];
    buf.pop_block(&mut two).unwrap();
    popped.extend_from_slice(&two);
    buf.push_block(&[4, 5, 6]).unwrap();
    popped.extend(drain(&mut buf));

    assert_eq!(popped, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn empty_blocks_always_succeed() {
    let mut full = BoundedFifo::with_capacity(1).unwrap();
    full.push_byte(1).unwrap();
    full.push_block(&[]).unwrap();
    let mut empty = BoundedFifo::with_capacity(1).unwrap();
    empty.pop_block(&mut []).unwrap();
    assert_eq!(full.used(), 1);
    assert_eq!(empty.used(), 0);
}

#[test]
fn borrowed_region_is_returned_on_release() {
    let mut region = vec![0u8; 6];
    let mut buf: RingBuffer<&mut [u8]> = RingBuffer::from_storage(region.as_mut_slice()).unwrap();
    buf.push_block(b"uart").unwrap();
    assert_eq!(buf.capacity(), 5);
    let storage = buf.into_storage();
    assert_eq!(&storage[..4], b"uart");
}

mod model {
    //! Random operation sequences checked against `VecDeque`.

    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[derive(Clone, Debug)]
    enum Op {
        PushByte(u8),
        PushBlock(Vec<u8>),
        PopByte,
        PopBlock(usize),
        Query(usize),
        Reset,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<u8>().prop_map(Op::PushByte),
            proptest::collection::vec(any::<u8>(), 0..12).prop_map(Op::PushBlock),
            Just(Op::PopByte),
            (0usize..12).prop_map(Op::PopBlock),
            (0usize..12).prop_map(Op::Query),
            Just(Op::Reset),
        ]
    }

    fn push_model(model: &mut VecDeque<u8>, capacity: usize, bytes: &[u8], overwrite: bool) -> bool {
        if !overwrite && model.len() + bytes.len() > capacity {
            return false;
        }
        for &byte in bytes {
            model.push_back(byte);
            if model.len() > capacity {
                model.pop_front();
            }
        }
        true
    }

    fn run<P: bytefifo::Policy>(capacity: usize, ops: &[Op], overwrite: bool) -> Result<(), TestCaseError> {
        let mut buf: RingBuffer<Vec<u8>, P> = RingBuffer::with_capacity(capacity).unwrap();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::PushByte(byte) => {
                    let admitted = push_model(&mut model, capacity, &[*byte], overwrite);
                    prop_assert_eq!(buf.push_byte(*byte).is_ok(), admitted);
                }
                Op::PushBlock(bytes) => {
                    let admitted = push_model(&mut model, capacity, bytes, overwrite);
                    prop_assert_eq!(buf.push_block(bytes).is_ok(), admitted);
                }
                Op::PopByte => {
                    prop_assert_eq!(buf.pop_byte().ok(), model.pop_front());
                }
                Op::PopBlock(len) => {
                    let mut out = vec![0u8; *len];
                    let result = buf.pop_block(&mut out);
                    if *len <= model.len() {
                        prop_assert!(result.is_ok());
                        let expected: Vec<u8> = model.drain(..*len).collect();
                        prop_assert_eq!(out, expected);
                    } else {
                        prop_assert!(result.is_err());
                    }
                }
                Op::Query(index) => {
                    prop_assert_eq!(buf.query(*index).ok(), model.get(*index).copied());
                }
                Op::Reset => {
                    buf.reset();
                    model.clear();
                }
            }

            prop_assert_eq!(buf.used(), model.len());
            prop_assert_eq!(buf.used(), buf.capacity() - buf.available());
            prop_assert_eq!(buf.iter().collect::<Vec<_>>(), model.iter().copied().collect::<Vec<_>>());
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn bounded_matches_model(capacity in 0usize..10, ops in proptest::collection::vec(op(), 0..64)) {
            run::<bytefifo::Bounded>(capacity, &ops, false)?;
        }

        #[test]
        fn overwrite_matches_model(capacity in 0usize..10, ops in proptest::collection::vec(op(), 0..64)) {
            run::<bytefifo::Overwrite>(capacity, &ops, true)?;
        }
    }
}
