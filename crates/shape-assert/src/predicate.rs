//! Custom assertion conditions embedded in an expectation.
//!
//! A [`Satisfies`] placed where a value is expected replaces the structural
//! comparison of that node with a call to the predicate on the other
//! operand.

use std::any::Any;
use std::fmt;

use crate::reflect::Reflect;
use crate::shape::{Shape, Shaped, intern};

/// Result of evaluating a predicate against an operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The operand satisfies the condition.
    Accepted,
    /// The operand does not satisfy the condition.
    Rejected,
    /// The operand is not of the type the predicate accepts.
    WrongType,
}

type Check = dyn Fn(Option<&dyn Reflect>) -> Verdict;

/// A predicate standing in for an expected value.
///
/// ```
/// use shape_assert::{Satisfies, anon, assert_is};
///
/// struct Order {
///     id: i32,
///     total: f64,
/// }
///
/// shape_assert::reflect_record! { Order { id: i32, total: f64 } }
///
/// let order = Order { id: 7, total: 12.5 };
/// assert_is!(
///     order,
///     anon! { id: 7, total: Satisfies::typed(|total: &f64| *total > 10.0) },
///     as Order
/// );
/// ```
pub struct Satisfies {
    description: String,
    check: Box<Check>,
}

impl Satisfies {
    /// A predicate over any operand; `None` is a null operand.
    pub fn new(check: impl Fn(Option<&dyn Reflect>) -> bool + 'static) -> Self {
        Self {
            description: "predicate".to_owned(),
            check: Box::new(move |value: Option<&dyn Reflect>| {
                if check(value) {
                    Verdict::Accepted
                } else {
                    Verdict::Rejected
                }
            }),
        }
    }

    /// A predicate over operands of concrete type `T`.
    ///
    /// An operand of any other runtime type, or a null operand, is a type
    /// violation rather than a rejection.
    pub fn typed<T: Any>(check: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            description: format!("predicate on {}", std::any::type_name::<T>()),
            check: Box::new(move |value: Option<&dyn Reflect>| {
                match value.and_then(|v| v.as_any().downcast_ref::<T>()) {
                    Some(typed) if check(typed) => Verdict::Accepted,
                    Some(_) => Verdict::Rejected,
                    None => Verdict::WrongType,
                }
            }),
        }
    }

    /// Replaces the description used in failure reasons.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Human-readable description of the condition.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Evaluates the predicate.
    pub fn evaluate(&self, value: Option<&dyn Reflect>) -> Verdict {
        (self.check)(value)
    }

    /// Returns the predicate when `value` is one.
    pub fn downcast(value: &dyn Reflect) -> Option<&Self> {
        value.as_any().downcast_ref::<Self>()
    }
}

impl fmt::Debug for Satisfies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Shaped for Satisfies {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::open::<Self>("predicate"))
    }
}

impl Reflect for Satisfies {
    fn runtime_shape(&self) -> &'static Shape {
        Self::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
