//! Reference cells for output and in-out call arguments
//!
//! The host writes results *into* its arguments: a query like
//! `GetNameList` fills an integer count and an array of names rather than
//! returning them. Slots are the caller-side holders for those writes.
//!
//! A slot is constructed immediately before a call, handed to the invoke
//! primitive, and read (or ignored) immediately after. It must never be
//! reused for a second call and never shared across threads; slots are
//! cheap transients and are not `Sync`.

mod array;
mod scalar;

pub use array::{ArraySlot, BoolArraySlot, DoubleArraySlot, IntArraySlot, TextArraySlot};
pub use scalar::{BoolSlot, DoubleSlot, IntSlot, Slot, TextSlot};

use crate::variant::Variant;

/// Write-back rejection: the callee wrote a shape the slot cannot hold.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StoreError {
    /// The shape the slot holds
    pub expected: &'static str,
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for i32 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for String {}
}

/// The primitive types a slot can carry across the boundary.
///
/// Sealed: the wire protocol knows exactly four shapes, so the set of slot
/// element types is closed.
pub trait SlotValue: Clone + Default + sealed::Sealed {
    /// Shape name used in coercion diagnostics.
    const KIND: &'static str;

    /// Convert into a wire value.
    fn into_variant(self) -> Variant;

    /// Recover from a wire value; `None` on shape mismatch.
    fn from_variant(v: &Variant) -> Option<Self>;
}

impl SlotValue for i32 {
    const KIND: &'static str = "integer";

    fn into_variant(self) -> Variant {
        Variant::Int(self)
    }

    fn from_variant(v: &Variant) -> Option<Self> {
        v.as_int()
    }
}

impl SlotValue for f64 {
    const KIND: &'static str = "double";

    fn into_variant(self) -> Variant {
        Variant::Double(self)
    }

    fn from_variant(v: &Variant) -> Option<Self> {
        v.as_double()
    }
}

impl SlotValue for bool {
    const KIND: &'static str = "boolean";

    fn into_variant(self) -> Variant {
        Variant::Bool(self)
    }

    fn from_variant(v: &Variant) -> Option<Self> {
        v.as_bool()
    }
}

impl SlotValue for String {
    const KIND: &'static str = "text";

    fn into_variant(self) -> Variant {
        Variant::Text(self)
    }

    fn from_variant(v: &Variant) -> Option<Self> {
        v.as_text().map(str::to_owned)
    }
}
