//! [`Reflect`] and [`Shaped`] for the date/time, identifier, URI and decimal
//! types of the wider ecosystem.

use std::any::Any;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use url::Url;
use uuid::Uuid;

use super::std_impls::impl_scalar;
use super::{Reflect, ScalarRef};
use crate::numeric::CanonicalNumeric;
use crate::shape::{NumericKind, ScalarKind, Shape, Shaped, intern};

impl Shaped for Decimal {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::numeric::<Self>("Decimal", NumericKind::Decimal))
    }
}

impl Reflect for Decimal {
    fn runtime_shape(&self) -> &'static Shape {
        Self::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn canonical_number(&self) -> Option<CanonicalNumeric> {
        Some(CanonicalNumeric::from_decimal(*self))
    }
}

impl_scalar! {
    NaiveDate => "NaiveDate", Date, |v| ScalarRef::Date(*v);
    NaiveDateTime => "NaiveDateTime", DateTime, |v| ScalarRef::DateTime(*v);
    DateTime<FixedOffset> => "DateTime<FixedOffset>", DateTimeOffset, |v| ScalarRef::DateTimeOffset(*v);
    Uuid => "Uuid", Uuid, |v| ScalarRef::Uuid(*v);
    Url => "Url", Uri, |v| ScalarRef::Uri(v);
}

/// UTC timestamps share the offset-aware shape so either satisfies the other.
impl Shaped for DateTime<Utc> {
    fn shape_of() -> &'static Shape {
        <DateTime<FixedOffset> as Shaped>::shape_of()
    }
}

impl Reflect for DateTime<Utc> {
    fn runtime_shape(&self) -> &'static Shape {
        <Self as Shaped>::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn scalar(&self) -> Option<ScalarRef<'_>> {
        Some(ScalarRef::DateTimeOffset(self.fixed_offset()))
    }
}
