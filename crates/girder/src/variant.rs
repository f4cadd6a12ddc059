//! Wire value representation for remote calls

use std::fmt;

/// The untyped value that crosses the automation boundary.
///
/// Every remote operation consumes and produces values of exactly four
/// primitive shapes: status/code integers, floating-point quantities,
/// flags, and names/labels. Anything else coming back from the host is a
/// binding defect, surfaced during narrowing.
#[derive(Clone, PartialEq)]
pub enum Variant {
    /// 32-bit signed integer (status codes, counts, enumerated options)
    Int(i32),

    /// 64-bit floating point (engineering quantities)
    Double(f64),

    /// Boolean flag
    Bool(bool),

    /// Text (entity names, file paths, code labels)
    Text(String),
}

impl Variant {
    /// Create a text variant.
    pub fn text(s: impl Into<String>) -> Self {
        Variant::Text(s.into())
    }

    /// The name of this variant's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Variant::Int(_) => "integer",
            Variant::Double(_) => "double",
            Variant::Bool(_) => "boolean",
            Variant::Text(_) => "text",
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe narrowing)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract an integer. Strict: no cross-shape conversion.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Variant::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract a double.
    ///
    /// Accepts `Int` as well: the host reports some numeric results as
    /// integers, and widening to `f64` is lossless.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Variant::Double(x) => Some(*x),
            Variant::Int(n) => Some(f64::from(*n)),
            _ => None,
        }
    }

    /// Extract a boolean. Strict.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variant::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract a string slice. Strict.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Variant::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Int(n) => write!(f, "{}", n),
            Variant::Double(x) => write!(f, "{}", x),
            Variant::Bool(b) => write!(f, "{}", b),
            Variant::Text(s) => write!(f, "{:?}", s),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // kind-qualified form, used in coercion error messages
        match self {
            Variant::Text(s) => write!(f, "text {:?}", s),
            other => write!(f, "{} {:?}", other.kind(), other),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════════

impl From<i32> for Variant {
    fn from(n: i32) -> Self {
        Variant::Int(n)
    }
}

impl From<f64> for Variant {
    fn from(x: f64) -> Self {
        Variant::Double(x)
    }
}

impl From<bool> for Variant {
    fn from(b: bool) -> Self {
        Variant::Bool(b)
    }
}

impl From<String> for Variant {
    fn from(s: String) -> Self {
        Variant::Text(s)
    }
}

impl From<&str> for Variant {
    fn from(s: &str) -> Self {
        Variant::text(s)
    }
}
