//! Integration test: `len <= capacity` and content agreement with
//! `std::vec::Vec` across random operation sequences.

use dynarr::prelude::*;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Push(u16),
    Insert(usize, u16),
    Erase(usize),
    Pop,
    Resize(usize),
    Clear,
    CloneAssign,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u16>().prop_map(Op::Push),
        2 => (0usize..64, any::<u16>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..64).prop_map(Op::Erase),
        1 => Just(Op::Pop),
        1 => (0usize..48).prop_map(Op::Resize),
        1 => Just(Op::Clear),
        1 => Just(Op::CloneAssign),
    ]
}

proptest! {
    #[test]
    fn len_never_exceeds_capacity(ops in proptest::collection::vec(op(), 1..120)) {
        let mut arr: DynamicArray<u16> = DynamicArray::new();
        let mut model: Vec<u16> = Vec::new();
        for op in ops {
            match op {
                Op::Push(v) => {
                    let (len, cap) = (arr.len(), arr.capacity());
                    arr.push_back(v);
                    model.push(v);
                    if len == cap {
                        prop_assert_eq!(arr.capacity(), if cap == 0 { 1 } else { cap * 2 });
                    } else {
                        prop_assert_eq!(arr.capacity(), cap);
                    }
                }
                Op::Insert(i, v) => {
                    if arr.insert(i, v).is_ok() {
                        model.insert(i, v);
                    } else {
                        prop_assert!(i > model.len());
                    }
                }
                Op::Erase(i) => {
                    if arr.erase(i).is_ok() {
                        model.remove(i);
                    } else {
                        prop_assert!(i >= model.len());
                    }
                }
                Op::Pop => {
                    if !arr.is_empty() {
                        arr.pop_back();
                        model.pop();
                    }
                }
                Op::Resize(n) => {
                    arr.resize(n);
                    model.resize(n, 0);
                }
                Op::Clear => {
                    let cap = arr.capacity();
                    arr.clear();
                    model.clear();
                    prop_assert_eq!(arr.capacity(), cap);
                }
                Op::CloneAssign => {
                    let mut copy = DynamicArray::new();
                    copy.clone_from(&arr);
                    arr = copy;
                }
            }
            prop_assert!(arr.len() <= arr.capacity());
            prop_assert_eq!(arr.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn ordering_agrees_with_slices(
        a in proptest::collection::vec(0u8..4, 0..6),
        b in proptest::collection::vec(0u8..4, 0..6),
    ) {
        let (x, y) = (DynamicArray::from(a.clone()), DynamicArray::from(b.clone()));
        prop_assert_eq!(x.cmp(&y), a.cmp(&b));
        prop_assert_eq!(x == y, a == b);
    }
}
