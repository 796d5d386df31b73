//! Integration test: ownership transfer, deep copies, and drop accounting.

use std::cell::Cell;
use std::mem;
use std::rc::Rc;

use dynarr::prelude::*;
use dynarr::RawBuffer;
use dynarr_test_utils::{DropCounter, NonCopy};

#[test]
fn mem_take_moves_and_resets_source() {
    let mut src = dynarr![NonCopy::from("a"), NonCopy::from("b")];
    src.reserve(5);
    let dst = mem::take(&mut src);
    assert_eq!((src.len(), src.capacity()), (0, 0));
    assert_eq!((dst.len(), dst.capacity()), (2, 5));
    assert_eq!(dst, [NonCopy::from("a"), NonCopy::from("b")]);
}

#[test]
fn move_assign_replaces_destination() {
    let mut src = dynarr![1, 2, 3];
    let mut dst = dynarr![9];
    assert_eq!(dst, [9]);
    dst = src.take();
    assert_eq!(dst, [1, 2, 3]);
    assert!(src.is_empty());
    assert_eq!(src.capacity(), 0);
}

#[test]
fn move_keeps_storage_address() {
    let mut src = dynarr![1, 2, 3];
    let ptr = src.as_ptr();
    let dst = src.take();
    assert_eq!(dst.as_ptr(), ptr);
}

#[test]
fn copies_are_isolated() {
    let original = dynarr![NonCopy::from("keep")];
    let mut copy = original.clone();
    assert_eq!(copy, original);

    copy[0] = NonCopy::from("changed");
    copy.push_back(NonCopy::from("more"));
    copy.erase(0).unwrap();
    assert_eq!(original, [NonCopy::from("keep")]);
}

#[test]
fn copy_assign_replaces_contents_and_capacity() {
    let mut src = dynarr![1, 2];
    src.reserve(9);
    let mut dst = dynarr![5, 6, 7, 8];
    dst.clone_from(&src);
    assert_eq!(dst, [1, 2]);
    assert_eq!(dst.capacity(), 9);
    assert_eq!(src, [1, 2]);
}

#[test]
fn every_element_is_dropped_exactly_once() {
    let drops = Rc::new(Cell::new(0));
    {
        let mut arr = DynamicArray::new();
        for id in 0..5 {
            arr.push_back(DropCounter::new(id, &drops));
        }
        // Growth 1 → 2 → 4 → 8 drops only default placeholders, which
        // carry their own private counters.
        assert_eq!(drops.get(), 0);
        arr.erase(1).unwrap();
        arr.pop_back();
        assert_eq!(drops.get(), 0);
    }
    assert_eq!(drops.get(), 5);
}

#[test]
fn overwriting_a_stale_slot_drops_its_value() {
    let drops = Rc::new(Cell::new(0));
    let mut arr = DynamicArray::from(vec![DropCounter::new(0, &drops)]);
    arr.pop_back();
    assert_eq!(drops.get(), 0);
    arr.push_back(DropCounter::new(1, &drops));
    assert_eq!(drops.get(), 1);
}

#[test]
fn owning_iteration_drops_stale_slots() {
    let drops = Rc::new(Cell::new(0));
    let mut arr = DynamicArray::from(vec![
        DropCounter::new(0, &drops),
        DropCounter::new(1, &drops),
    ]);
    arr.pop_back();
    let live: Vec<DropCounter> = arr.into_iter().collect();
    assert_eq!(drops.get(), 1);
    assert_eq!(live.len(), 1);
    assert_eq!(live[0].id, 0);
}

#[test]
fn raw_buffer_release_transplants_storage() {
    let mut buf = RawBuffer::from(vec![1, 2, 3]);
    let storage = buf.release();
    assert!(buf.is_empty());
    let mut other = RawBuffer::from(storage);
    assert_eq!(other.as_slice(), &[1, 2, 3]);
    other[0] = 10;
    assert_eq!(other[0], 10);
}

#[test]
fn swap_is_constant_time_exchange() {
    let mut a = dynarr![1, 2, 3];
    let mut b = dynarr![4];
    let (pa, pb) = (a.as_ptr(), b.as_ptr());
    a.swap(&mut b);
    assert_eq!((a.as_ptr(), b.as_ptr()), (pb, pa));
    assert_eq!(a, [4]);
    assert_eq!(b, [1, 2, 3]);
}
