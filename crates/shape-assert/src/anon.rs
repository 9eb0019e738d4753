//! Anonymous expectations.
//!
//! An [`Anon`] is a record whose members are supplied at construction time
//! rather than declared by a type, and an [`AnonList`] is a heterogeneous
//! list. Both are the loosely-typed side of a comparison: the target shape
//! decides which of their members matter.

use std::any::Any;

use crate::reflect::Reflect;
use crate::shape::{Shape, Shaped, intern};

#[cfg(test)]
mod tests;

// ---------------------------------------------------------------------------
// Anon
// ---------------------------------------------------------------------------

/// An anonymous record: an ordered list of named members.
///
/// Built with [`crate::anon!`] in most cases:
///
/// ```
/// use shape_assert::{Reflect, anon};
///
/// let expected = anon! { account_id: 1, name: "A" };
/// assert_eq!(expected.member_names(), vec!["account_id", "name"]);
/// ```
#[derive(Default)]
pub struct Anon {
    fields: Vec<(&'static str, Box<dyn Reflect>)>,
}

impl Anon {
    /// Creates an anonymous record from its members.
    ///
    /// A later member with the same name as an earlier one shadows it.
    pub fn new(fields: Vec<(&'static str, Box<dyn Reflect>)>) -> Self {
        let mut anon = Self::default();
        for (name, value) in fields {
            anon.insert(name, value);
        }
        anon
    }

    /// Adds or replaces a member.
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Reflect) -> Self {
        self.insert(name, Box::new(value));
        self
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the record has no members.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, name: &'static str, value: Box<dyn Reflect>) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }
}

impl Shaped for Anon {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::open::<Self>("anonymous"))
    }
}

impl Reflect for Anon {
    fn runtime_shape(&self) -> &'static Shape {
        Self::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn member(&self, name: &str) -> Option<&dyn Reflect> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| &**value)
    }

    fn member_names(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| *name).collect()
    }
}

// ---------------------------------------------------------------------------
// AnonList
// ---------------------------------------------------------------------------

/// A heterogeneous list that behaves as an untyped built-in sequence.
#[derive(Default)]
pub struct AnonList {
    items: Vec<Box<dyn Reflect>>,
}

impl AnonList {
    /// Creates a list from its items.
    pub fn new(items: Vec<Box<dyn Reflect>>) -> Self {
        Self { items }
    }

    /// Appends an item.
    #[must_use]
    pub fn with(mut self, item: impl Reflect) -> Self {
        self.items.push(Box::new(item));
        self
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Shaped for AnonList {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::sequence::<Self>("anonymous list", None))
    }
}

impl Reflect for AnonList {
    fn runtime_shape(&self) -> &'static Shape {
        Self::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn items(&self) -> Option<Vec<&dyn Reflect>> {
        Some(self.items.iter().map(|item| &**item).collect())
    }
}
