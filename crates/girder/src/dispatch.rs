//! Lowering, write-back, and result narrowing
//!
//! This is the sole place where typed call sites meet the untyped wire:
//! arguments are lowered to positional [`WireArg`]s, the transport runs the
//! call, by-ref results are copied back into the originating cells, and the
//! raw result is narrowed to the primitive shape the operation declares.

use crate::error::{BindingError, Result};
use crate::slot::{
    BoolArraySlot, BoolSlot, DoubleArraySlot, DoubleSlot, IntArraySlot, IntSlot, TextArraySlot,
    TextSlot,
};
use crate::transport::{Automation, TargetId, WireArg, WireValue};
use crate::variant::Variant;

/// One argument at a typed call site: a plain value, a scalar cell, or an
/// array cell.
///
/// Plain values are passed by value and never touched by the callee. Cell
/// arguments are passed by reference; the callee's writes land back in the
/// cell when the call succeeds. Argument order and count must match what
/// the remote operation expects; there is no named-argument resolution at
/// the boundary.
pub enum Arg<'a> {
    /// Plain integer input
    Int(i32),
    /// Plain double input
    Double(f64),
    /// Plain boolean input
    Bool(bool),
    /// Plain text input
    Text(&'a str),
    /// Writable integer cell
    IntOut(&'a IntSlot),
    /// Writable double cell
    DoubleOut(&'a DoubleSlot),
    /// Writable boolean cell
    BoolOut(&'a BoolSlot),
    /// Writable text cell
    TextOut(&'a TextSlot),
    /// Writable integer array cell
    IntArrayOut(&'a IntArraySlot),
    /// Writable double array cell
    DoubleArrayOut(&'a DoubleArraySlot),
    /// Writable boolean array cell
    BoolArrayOut(&'a BoolArraySlot),
    /// Writable text array cell
    TextArrayOut(&'a TextArraySlot),
}

impl From<i32> for Arg<'_> {
    fn from(n: i32) -> Self {
        Arg::Int(n)
    }
}

impl From<f64> for Arg<'_> {
    fn from(x: f64) -> Self {
        Arg::Double(x)
    }
}

impl From<bool> for Arg<'_> {
    fn from(b: bool) -> Self {
        Arg::Bool(b)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Text(s)
    }
}

impl<'a> From<&'a IntSlot> for Arg<'a> {
    fn from(slot: &'a IntSlot) -> Self {
        Arg::IntOut(slot)
    }
}

impl<'a> From<&'a DoubleSlot> for Arg<'a> {
    fn from(slot: &'a DoubleSlot) -> Self {
        Arg::DoubleOut(slot)
    }
}

impl<'a> From<&'a BoolSlot> for Arg<'a> {
    fn from(slot: &'a BoolSlot) -> Self {
        Arg::BoolOut(slot)
    }
}

impl<'a> From<&'a TextSlot> for Arg<'a> {
    fn from(slot: &'a TextSlot) -> Self {
        Arg::TextOut(slot)
    }
}

impl<'a> From<&'a IntArraySlot> for Arg<'a> {
    fn from(slot: &'a IntArraySlot) -> Self {
        Arg::IntArrayOut(slot)
    }
}

impl<'a> From<&'a DoubleArraySlot> for Arg<'a> {
    fn from(slot: &'a DoubleArraySlot) -> Self {
        Arg::DoubleArrayOut(slot)
    }
}

impl<'a> From<&'a BoolArraySlot> for Arg<'a> {
    fn from(slot: &'a BoolArraySlot) -> Self {
        Arg::BoolArrayOut(slot)
    }
}

impl<'a> From<&'a TextArraySlot> for Arg<'a> {
    fn from(slot: &'a TextArraySlot) -> Self {
        Arg::TextArrayOut(slot)
    }
}

/// Lower typed arguments into positional wire arguments.
fn lower(args: &[Arg<'_>]) -> Vec<WireArg> {
    args.iter()
        .map(|arg| match arg {
            Arg::Int(n) => WireArg::by_value(Variant::Int(*n)),
            Arg::Double(x) => WireArg::by_value(Variant::Double(*x)),
            Arg::Bool(b) => WireArg::by_value(Variant::Bool(*b)),
            Arg::Text(s) => WireArg::by_value(Variant::text(*s)),
            Arg::IntOut(slot) => WireArg::by_ref(WireValue::Scalar(slot.load())),
            Arg::DoubleOut(slot) => WireArg::by_ref(WireValue::Scalar(slot.load())),
            Arg::BoolOut(slot) => WireArg::by_ref(WireValue::Scalar(slot.load())),
            Arg::TextOut(slot) => WireArg::by_ref(WireValue::Scalar(slot.load())),
            Arg::IntArrayOut(slot) => WireArg::by_ref(WireValue::Array(slot.load())),
            Arg::DoubleArrayOut(slot) => WireArg::by_ref(WireValue::Array(slot.load())),
            Arg::BoolArrayOut(slot) => WireArg::by_ref(WireValue::Array(slot.load())),
            Arg::TextArrayOut(slot) => WireArg::by_ref(WireValue::Array(slot.load())),
        })
        .collect()
}

fn coercion(operation: &str, expected: &'static str, got: impl std::fmt::Display) -> BindingError {
    BindingError::Coercion {
        operation: operation.to_owned(),
        expected,
        got: got.to_string(),
    }
}

/// Copy by-ref results back into the originating cells.
///
/// Only runs after a successful call; on failure the cells keep whatever
/// state they had, which the slot contract declares unspecified.
fn write_back(operation: &str, args: &[Arg<'_>], wire: Vec<WireArg>) -> Result<()> {
    for (arg, wire_arg) in args.iter().zip(wire) {
        match (arg, wire_arg.value) {
            (Arg::IntOut(slot), WireValue::Scalar(v)) => slot
                .store(&v)
                .map_err(|e| coercion(operation, e.expected, &v))?,
            (Arg::DoubleOut(slot), WireValue::Scalar(v)) => slot
                .store(&v)
                .map_err(|e| coercion(operation, e.expected, &v))?,
            (Arg::BoolOut(slot), WireValue::Scalar(v)) => slot
                .store(&v)
                .map_err(|e| coercion(operation, e.expected, &v))?,
            (Arg::TextOut(slot), WireValue::Scalar(v)) => slot
                .store(&v)
                .map_err(|e| coercion(operation, e.expected, &v))?,
            (Arg::IntArrayOut(slot), WireValue::Array(items)) => slot
                .store(items)
                .map_err(|e| coercion(operation, e.expected, "a mixed-shape array"))?,
            (Arg::DoubleArrayOut(slot), WireValue::Array(items)) => slot
                .store(items)
                .map_err(|e| coercion(operation, e.expected, "a mixed-shape array"))?,
            (Arg::BoolArrayOut(slot), WireValue::Array(items)) => slot
                .store(items)
                .map_err(|e| coercion(operation, e.expected, "a mixed-shape array"))?,
            (Arg::TextArrayOut(slot), WireValue::Array(items)) => slot
                .store(items)
                .map_err(|e| coercion(operation, e.expected, "a mixed-shape array"))?,

            // by-value inputs: nothing comes back
            (Arg::Int(_) | Arg::Double(_) | Arg::Bool(_) | Arg::Text(_), _) => {}

            // scalar cell handed back an array, or the reverse
            (Arg::IntOut(_) | Arg::DoubleOut(_) | Arg::BoolOut(_) | Arg::TextOut(_), v) => {
                return Err(coercion(operation, "a scalar write-back", describe(&v)))
            }
            (_, v) => return Err(coercion(operation, "an array write-back", describe(&v))),
        }
    }
    Ok(())
}

fn describe(value: &WireValue) -> String {
    match value {
        WireValue::Scalar(v) => v.to_string(),
        WireValue::Array(items) => format!("an array of {} elements", items.len()),
    }
}

/// Perform one remote call: lower, call, write back, return the raw result.
///
/// This is the single insertion point every remote interaction flows
/// through; the trace events here see all traffic.
pub(crate) fn perform(
    automation: &dyn Automation,
    target: TargetId,
    path: &str,
    operation: &str,
    args: &[Arg<'_>],
) -> Result<Variant> {
    let mut wire = lower(args);
    tracing::trace!(path, operation, argc = wire.len(), "invoke");
    let raw = automation.call(target, operation, &mut wire).map_err(|e| {
        tracing::debug!(path, operation, error = %e, "invoke failed at boundary");
        e
    })?;
    write_back(operation, args, wire)?;
    tracing::trace!(path, operation, result = %raw, "invoke returned");
    Ok(raw)
}

// ═══════════════════════════════════════════════════════════════════════
// Result Narrowing
// ═══════════════════════════════════════════════════════════════════════

/// Narrow a raw result to a status/code integer.
pub(crate) fn narrow_int(operation: &str, raw: Variant) -> Result<i32> {
    raw.as_int().ok_or_else(|| coercion(operation, "integer", &raw))
}

/// Narrow a raw result to a double.
pub(crate) fn narrow_double(operation: &str, raw: Variant) -> Result<f64> {
    raw.as_double()
        .ok_or_else(|| coercion(operation, "double", &raw))
}

/// Narrow a raw result to a boolean.
pub(crate) fn narrow_bool(operation: &str, raw: Variant) -> Result<bool> {
    raw.as_bool()
        .ok_or_else(|| coercion(operation, "boolean", &raw))
}

/// Narrow a raw result to text.
pub(crate) fn narrow_text(operation: &str, raw: Variant) -> Result<String> {
    match raw {
        Variant::Text(s) => Ok(s),
        other => Err(coercion(operation, "text", &other)),
    }
}
