//! Scalar reference cells

use std::cell::RefCell;

use super::{SlotValue, StoreError};
use crate::variant::Variant;

/// A single-value mutable cell passed to a remote call so the callee can
/// write a result back into it.
///
/// Three construction forms cover the three argument roles:
///
/// - [`Slot::new`] seeds the cell for in-out use;
/// - [`Slot::empty`] is a pure output (default seed);
/// - [`Slot::discard`] is the sentinel: "caller does not need this output".
///
/// After a successful call, [`Slot::get`] returns exactly what the callee
/// wrote. After a failed call the content is unspecified. A slot is a
/// per-call transient: construct it, pass it once, read it, drop it.
pub struct Slot<T: SlotValue> {
    value: RefCell<T>,
    wanted: bool,
}

/// Integer cell
pub type IntSlot = Slot<i32>;
/// Double cell
pub type DoubleSlot = Slot<f64>;
/// Boolean cell
pub type BoolSlot = Slot<bool>;
/// Text cell
pub type TextSlot = Slot<String>;

impl<T: SlotValue> Slot<T> {
    /// Create a seeded cell (in-out use).
    pub fn new(seed: T) -> Self {
        Self {
            value: RefCell::new(seed),
            wanted: true,
        }
    }

    /// Create a pure-output cell seeded with the type's default.
    pub fn empty() -> Self {
        Self::new(T::default())
    }

    /// The sentinel form: the callee's write is accepted and ignored.
    ///
    /// Passing a discard cell never changes whether a call succeeds: the
    /// host still receives a well-formed by-ref argument, it just has no
    /// observer. Whether the operation actually required the output is the
    /// host's to judge, through its own status signaling.
    pub fn discard() -> Self {
        Self {
            value: RefCell::new(T::default()),
            wanted: false,
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Whether this is a discard sentinel.
    pub fn is_discard(&self) -> bool {
        !self.wanted
    }

    /// Snapshot the seed as a wire value (marshaling out).
    pub(crate) fn load(&self) -> Variant {
        self.get().into_variant()
    }

    /// Accept the callee's write (marshaling back in).
    pub(crate) fn store(&self, v: &Variant) -> Result<(), StoreError> {
        if !self.wanted {
            return Ok(());
        }
        match T::from_variant(v) {
            Some(value) => {
                *self.value.borrow_mut() = value;
                Ok(())
            }
            None => Err(StoreError { expected: T::KIND }),
        }
    }
}

impl<T: SlotValue> Default for Slot<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: SlotValue + std::fmt::Debug> std::fmt::Debug for Slot<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.wanted {
            write!(f, "Slot({:?})", self.value.borrow())
        } else {
            write!(f, "Slot(discard)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_slot_round_trip() {
        let slot = IntSlot::new(7);
        assert_eq!(slot.get(), 7);
        assert_eq!(slot.load(), Variant::Int(7));
        slot.store(&Variant::Int(42)).unwrap();
        assert_eq!(slot.get(), 42);
    }

    #[test]
    fn test_empty_slot_seeds_default() {
        assert_eq!(IntSlot::empty().get(), 0);
        assert_eq!(DoubleSlot::empty().get(), 0.0);
        assert!(!BoolSlot::empty().get());
        assert_eq!(TextSlot::empty().get(), "");
    }

    #[test]
    fn test_discard_ignores_writes() {
        let slot = TextSlot::discard();
        assert!(slot.is_discard());
        slot.store(&Variant::text("DEAD")).unwrap();
        assert_eq!(slot.get(), "");
        // even a mismatched shape is ignored, not rejected
        slot.store(&Variant::Int(3)).unwrap();
    }

    #[test]
    fn test_store_rejects_shape_mismatch() {
        let slot = IntSlot::empty();
        let err = slot.store(&Variant::text("oops")).unwrap_err();
        assert_eq!(err.expected, "integer");
        // content untouched by the rejected write
        assert_eq!(slot.get(), 0);
    }

    #[test]
    fn test_double_slot_accepts_integer_write() {
        let slot = DoubleSlot::empty();
        slot.store(&Variant::Int(3)).unwrap();
        assert_eq!(slot.get(), 3.0);
    }
}
