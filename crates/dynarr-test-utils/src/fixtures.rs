//! Element fixtures.

use std::cell::Cell;
use std::rc::Rc;

// ── DropCounter ────────────────────────────────────────────────────

/// Increments a shared counter when dropped.
///
/// Clones share the counter, so the count covers every copy made from one
/// seed value. A `Default` value gets a private counter nobody observes.
#[derive(Clone, Debug, Default)]
pub struct DropCounter {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for DropCounter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

// ── FaultyClone ────────────────────────────────────────────────────

/// Panics on `clone()` once the shared budget is spent.
///
/// The budget counts successful clones across every value sharing it.
#[derive(Debug)]
pub struct FaultyClone {
    pub value: i32,
    budget: Rc<Cell<usize>>,
}

impl FaultyClone {
    pub fn new(value: i32, budget: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            budget: Rc::clone(budget),
        }
    }
}

impl Clone for FaultyClone {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("FaultyClone: clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self {
            value: self.value,
            budget: Rc::clone(&self.budget),
        }
    }
}

impl Default for FaultyClone {
    fn default() -> Self {
        Self {
            value: 0,
            budget: Rc::new(Cell::new(usize::MAX)),
        }
    }
}

impl PartialEq for FaultyClone {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

// ── FaultyDefault ──────────────────────────────────────────────────

thread_local! {
    static DEFAULT_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
}

/// Panics in `Default::default()` once an armed budget is spent.
///
/// Unarmed, it behaves like a plain integer wrapper. The budget is
/// thread-local, so parallel tests do not interfere.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FaultyDefault(pub i32);

impl FaultyDefault {
    /// Allow `budget` more default constructions on this thread, then panic.
    ///
    /// The returned guard disarms on drop.
    #[must_use = "the budget is disarmed when the guard is dropped"]
    pub fn arm(budget: usize) -> ArmGuard {
        DEFAULT_BUDGET.with(|b| b.set(Some(budget)));
        ArmGuard { _private: () }
    }

    /// Remove any armed budget on this thread.
    pub fn disarm() {
        DEFAULT_BUDGET.with(|b| b.set(None));
    }
}

impl Default for FaultyDefault {
    fn default() -> Self {
        DEFAULT_BUDGET.with(|b| match b.get() {
            None => {}
            Some(0) => panic!("FaultyDefault: default budget exhausted"),
            Some(left) => b.set(Some(left - 1)),
        });
        Self(0)
    }
}

/// Disarms [`FaultyDefault`] when dropped.
pub struct ArmGuard {
    _private: (),
}

impl Drop for ArmGuard {
    fn drop(&mut self) {
        FaultyDefault::disarm();
    }
}

// ── NonCopy ────────────────────────────────────────────────────────

/// A heap-owning value type.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonCopy(pub String);

impl From<&str> for NonCopy {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
