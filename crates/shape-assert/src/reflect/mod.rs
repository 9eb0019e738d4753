//! Runtime introspection of values.
//!
//! [`Reflect`] is the object-safe capability the engine walks: it exposes a
//! value's runtime [`Shape`], its identity-bearing [`Any`] view, its public
//! members by name, its items when it is iterable, and its numeric or scalar
//! content. Implementations for the standard library live in `std_impls`,
//! for date/time, identifier, URI and decimal types in `external`, and for
//! `serde_json::Value` in `json`. User records, interfaces and enums get
//! theirs from `reflect_record!`, `reflect_interface!` and `reflect_enum!`.

mod external;
mod json;
mod std_impls;

use std::any::{Any, TypeId};
use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use url::Url;
use uuid::Uuid;

use crate::numeric::CanonicalNumeric;
use crate::shape::{ObjectShape, Shape, ShapeKind, Shaped};


// ---------------------------------------------------------------------------
// ScalarRef
// ---------------------------------------------------------------------------

/// Borrowed content of an atomic value, compared with native equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarRef<'a> {
    /// Boolean.
    Bool(bool),
    /// Character.
    Char(char),
    /// Text.
    Text(&'a str),
    /// Calendar date.
    Date(NaiveDate),
    /// Date and time without offset.
    DateTime(NaiveDateTime),
    /// Date and time with offset; equal when the instants are equal.
    DateTimeOffset(DateTime<FixedOffset>),
    /// Elapsed time.
    Duration(Duration),
    /// Unique identifier.
    Uuid(Uuid),
    /// Absolute URI.
    Uri(&'a Url),
    /// Enumeration member.
    Enum {
        /// Name of the enumeration type.
        type_name: &'static str,
        /// Name of the member.
        variant: &'static str,
    },
    /// Type reference.
    TypeRef(&'a Shape),
}

impl fmt::Display for ScalarRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Char(c) => write!(f, "{c}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{d}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::DateTimeOffset(dt) => f.write_str(&dt.to_rfc3339()),
            Self::Duration(d) => write!(f, "{d:?}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Uri(u) => f.write_str(u.as_str()),
            Self::Enum { variant, .. } => f.write_str(variant),
            Self::TypeRef(shape) => f.write_str(shape.name()),
        }
    }
}

// ---------------------------------------------------------------------------
// Reflect
// ---------------------------------------------------------------------------

/// Object-safe runtime view of a value.
///
/// Smart pointers and optional wrappers delegate every method to the value
/// they hold, so `Rc<T>`, `Box<T>` and `Some(T)` are indistinguishable from
/// `T` to the engine. An empty optional reports [`Reflect::is_null`].
pub trait Reflect: Any {
    /// The value's own runtime shape.
    fn runtime_shape(&self) -> &'static Shape;

    /// The [`Any`] view of the underlying value.
    ///
    /// Its address and [`TypeId`] are the value's reference identity.
    fn as_any(&self) -> &dyn Any;

    /// Returns `true` when the value stands for null.
    fn is_null(&self) -> bool {
        false
    }

    /// Reads a public member by name.
    ///
    /// `None` means the runtime type exposes no such member; a member whose
    /// value is null is returned as a value reporting [`Reflect::is_null`].
    fn member(&self, _name: &str) -> Option<&dyn Reflect> {
        None
    }

    /// Names of the members this value exposes.
    fn member_names(&self) -> Vec<&str> {
        self.runtime_shape()
            .own_members()
            .iter()
            .map(|m| m.name)
            .collect()
    }

    /// Items in iteration order when the value has the iterable capability.
    fn items(&self) -> Option<Vec<&dyn Reflect>> {
        None
    }

    /// Canonical numeric form when the runtime type is a numeric kind.
    fn canonical_number(&self) -> Option<CanonicalNumeric> {
        None
    }

    /// Atomic content when the runtime type is a scalar kind.
    fn scalar(&self) -> Option<ScalarRef<'_>> {
        None
    }
}

impl fmt::Debug for dyn Reflect + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::render::render_value(Some(self)))
    }
}

/// Maps a null-reporting value to `None`.
pub fn present(value: &dyn Reflect) -> Option<&dyn Reflect> {
    if value.is_null() { None } else { Some(value) }
}

/// Returns `true` when the value carries reference identity.
///
/// Records, anonymous records, interfaces and sequences are reference kinds;
/// numerics and scalars are compared by value only.
pub fn is_reference_kind(value: &dyn Reflect) -> bool {
    matches!(
        value.runtime_shape().kind(),
        ShapeKind::Sequence(_) | ShapeKind::Composite(_)
    )
}

/// Identity of a reference-kind value: address and concrete type.
///
/// The type is part of the identity because a record and its first field
/// share an address.
pub fn identity(value: &dyn Reflect) -> (*const (), TypeId) {
    let any = value.as_any();
    (std::ptr::from_ref(any).cast::<()>(), Any::type_id(any))
}

/// Returns `true` when both values are the same reference.
pub fn same_reference(a: &dyn Reflect, b: &dyn Reflect) -> bool {
    identity(a) == identity(b)
}

// ---------------------------------------------------------------------------
// Null
// ---------------------------------------------------------------------------

/// An untyped null value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Null;

impl Shaped for Null {
    fn shape_of() -> &'static Shape {
        ObjectShape::shape_of()
    }
}

impl Reflect for Null {
    fn runtime_shape(&self) -> &'static Shape {
        ObjectShape::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_null(&self) -> bool {
        true
    }
}
