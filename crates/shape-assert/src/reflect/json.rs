//! [`Reflect`] for `serde_json::Value`.
//!
//! A JSON value has no static shape of its own: each variant reports the
//! runtime shape of the Rust type it mirrors. Numbers look like `i64`, `u64`
//! or `f64`, strings like `String`, arrays like an untyped built-in sequence
//! and objects like an anonymous record whose members are its keys.

use std::any::Any;

use serde_json::Value;

use super::{Reflect, ScalarRef};
use crate::numeric::CanonicalNumeric;
use crate::shape::{ObjectShape, Shape, ShapeFn, Shaped, intern};

enum JsonArray {}

impl Shaped for JsonArray {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::sequence::<Self>("json array", None))
    }
}

enum JsonObject {}

impl Shaped for JsonObject {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::open::<Self>("json object"))
    }
}

impl Shaped for Value {
    fn shape_of() -> &'static Shape {
        ObjectShape::shape_of()
    }

    fn declared() -> Option<ShapeFn> {
        None
    }
}

impl Reflect for Value {
    fn runtime_shape(&self) -> &'static Shape {
        match self {
            Self::Null => ObjectShape::shape_of(),
            Self::Bool(_) => bool::shape_of(),
            Self::Number(n) if n.is_i64() => i64::shape_of(),
            Self::Number(n) if n.is_u64() => u64::shape_of(),
            Self::Number(_) => f64::shape_of(),
            Self::String(_) => String::shape_of(),
            Self::Array(_) => JsonArray::shape_of(),
            Self::Object(_) => JsonObject::shape_of(),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    fn member(&self, name: &str) -> Option<&dyn Reflect> {
        self.as_object()
            .and_then(|map| map.get(name))
            .map(|value| value as &dyn Reflect)
    }

    fn member_names(&self) -> Vec<&str> {
        self.as_object()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn items(&self) -> Option<Vec<&dyn Reflect>> {
        self.as_array()
            .map(|items| items.iter().map(|item| item as &dyn Reflect).collect())
    }

    fn canonical_number(&self) -> Option<CanonicalNumeric> {
        let Self::Number(n) = self else {
            return None;
        };
        if let Some(i) = n.as_i64() {
            Some(CanonicalNumeric::from_integer(i))
        } else if let Some(u) = n.as_u64() {
            Some(CanonicalNumeric::from_integer(u))
        } else {
            n.as_f64().map(CanonicalNumeric::from_f64)
        }
    }

    fn scalar(&self) -> Option<ScalarRef<'_>> {
        match self {
            Self::Bool(b) => Some(ScalarRef::Bool(*b)),
            Self::String(s) => Some(ScalarRef::Text(s)),
            Self::Null | Self::Number(_) | Self::Array(_) | Self::Object(_) => None,
        }
    }
}
