//! Array reference cells

use std::cell::{Cell, RefCell};

use super::{SlotValue, StoreError};
use crate::variant::Variant;

/// A homogeneous-sequence cell whose length is decided by the callee.
///
/// List-shaped queries (`GetNameList`, `GetRunCaseFlag`, …) fill an array
/// argument with however many elements the model currently holds. The
/// caller cannot know that length up front, so the cell records a
/// *reported count* alongside its storage: indexed reads are meaningful
/// only below the reported count, and whatever capacity exists beyond it
/// is an implementation detail, not part of the contract.
///
/// Like scalar slots, an array cell is a per-call transient.
pub struct ArraySlot<T: SlotValue> {
    items: RefCell<Vec<T>>,
    reported: Cell<usize>,
    wanted: bool,
}

/// Integer array cell
pub type IntArraySlot = ArraySlot<i32>;
/// Double array cell
pub type DoubleArraySlot = ArraySlot<f64>;
/// Boolean array cell
pub type BoolArraySlot = ArraySlot<bool>;
/// Text array cell
pub type TextArraySlot = ArraySlot<String>;

impl<T: SlotValue> ArraySlot<T> {
    /// Create an empty cell (pure output).
    pub fn empty() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            reported: Cell::new(0),
            wanted: true,
        }
    }

    /// Create a seeded cell (in-out use). The reported count starts at the
    /// seed length.
    pub fn seeded(seed: &[T]) -> Self {
        Self {
            items: RefCell::new(seed.to_vec()),
            reported: Cell::new(seed.len()),
            wanted: true,
        }
    }

    /// The sentinel form: the callee's write is accepted and ignored.
    pub fn discard() -> Self {
        Self {
            items: RefCell::new(Vec::new()),
            reported: Cell::new(0),
            wanted: false,
        }
    }

    /// The element count reported by the callee's most recent write (the
    /// seed length before any call).
    pub fn count(&self) -> usize {
        self.reported.get()
    }

    /// Read one element. `None` at or beyond the reported count.
    pub fn get(&self, index: usize) -> Option<T> {
        if index < self.reported.get() {
            self.items.borrow().get(index).cloned()
        } else {
            None
        }
    }

    /// Snapshot the reported range as an owned vector.
    pub fn to_vec(&self) -> Vec<T> {
        let items = self.items.borrow();
        items[..self.reported.get().min(items.len())].to_vec()
    }

    /// Whether this is a discard sentinel.
    pub fn is_discard(&self) -> bool {
        !self.wanted
    }

    /// Snapshot the seed as wire values (marshaling out).
    pub(crate) fn load(&self) -> Vec<Variant> {
        self.to_vec()
            .into_iter()
            .map(SlotValue::into_variant)
            .collect()
    }

    /// Accept the callee's write (marshaling back in). The written length
    /// becomes the reported count.
    pub(crate) fn store(&self, written: Vec<Variant>) -> Result<(), StoreError> {
        if !self.wanted {
            return Ok(());
        }
        let converted = written
            .iter()
            .map(T::from_variant)
            .collect::<Option<Vec<T>>>()
            .ok_or(StoreError { expected: T::KIND })?;
        self.reported.set(converted.len());
        *self.items.borrow_mut() = converted;
        Ok(())
    }
}

impl<T: SlotValue> Default for ArraySlot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: SlotValue + std::fmt::Debug> std::fmt::Debug for ArraySlot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.wanted {
            write!(f, "ArraySlot({:?})", self.to_vec())
        } else {
            write!(f, "ArraySlot(discard)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cell_reports_zero() {
        let cell = TextArraySlot::empty();
        assert_eq!(cell.count(), 0);
        assert_eq!(cell.get(0), None);
        assert!(cell.to_vec().is_empty());
    }

    #[test]
    fn test_seeded_cell_reports_seed() {
        let cell = DoubleArraySlot::seeded(&[1.0, 2.5]);
        assert_eq!(cell.count(), 2);
        assert_eq!(cell.get(1), Some(2.5));
        assert_eq!(cell.load(), vec![Variant::Double(1.0), Variant::Double(2.5)]);
    }

    #[test]
    fn test_store_sets_reported_count() {
        let cell = IntArraySlot::empty();
        cell.store(vec![Variant::Int(5), Variant::Int(6), Variant::Int(7)])
            .unwrap();
        assert_eq!(cell.count(), 3);
        assert_eq!(cell.get(2), Some(7));
        assert_eq!(cell.get(3), None);
    }

    #[test]
    fn test_store_shrinks_reported_range() {
        let cell = IntArraySlot::seeded(&[1, 2, 3, 4]);
        cell.store(vec![Variant::Int(9)]).unwrap();
        assert_eq!(cell.count(), 1);
        assert_eq!(cell.to_vec(), vec![9]);
        assert_eq!(cell.get(1), None);
    }

    #[test]
    fn test_store_rejects_mixed_shapes() {
        let cell = IntArraySlot::empty();
        let err = cell
            .store(vec![Variant::Int(1), Variant::text("x")])
            .unwrap_err();
        assert_eq!(err.expected, "integer");
        assert_eq!(cell.count(), 0);
    }

    #[test]
    fn test_discard_ignores_writes() {
        let cell = BoolArraySlot::discard();
        cell.store(vec![Variant::Bool(true)]).unwrap();
        assert_eq!(cell.count(), 0);
    }
}
