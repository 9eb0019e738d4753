//! Structural (duck-typed) compatibility.
//!
//! A type satisfies a target either nominally, by being the target or
//! implementing it, or structurally, by exposing every member name the
//! target declares. Only member names take part; declared member types are
//! checked later by the recursive comparison itself.

use std::collections::HashSet;

use crate::error::ShapeError;
use crate::members::member_names;
use crate::reflect::Reflect;
use crate::shape::Shape;

#[cfg(test)]
mod tests;

/// Type-level check: does `candidate` satisfy `target`?
///
/// Open shapes carry their members per value, so an open candidate only
/// satisfies targets it is nominally assignable to or that declare no
/// members. Use [`value_satisfies`] when a value is at hand.
///
/// # Errors
///
/// Returns a [`ShapeError`] when either member set is ambiguous.
pub fn is_structurally_compatible(
    candidate: &'static Shape,
    target: &'static Shape,
) -> Result<bool, ShapeError> {
    if candidate.is_assignable_to(target) {
        return Ok(true);
    }
    let available: HashSet<&str> = member_names(candidate)?.into_iter().collect();
    is_subset(target, &available)
}

/// Value-level check: does `value`'s runtime type satisfy `target`?
///
/// The value's own member names are used, so anonymous records and JSON
/// objects take part in the subset test.
///
/// # Errors
///
/// Returns a [`ShapeError`] when the target's member set is ambiguous.
pub fn value_satisfies(value: &dyn Reflect, target: &'static Shape) -> Result<bool, ShapeError> {
    if value.runtime_shape().is_assignable_to(target) {
        return Ok(true);
    }
    let available: HashSet<&str> = value.member_names().into_iter().collect();
    is_subset(target, &available)
}

fn is_subset(target: &'static Shape, available: &HashSet<&str>) -> Result<bool, ShapeError> {
    Ok(member_names(target.unwrap_optional())?
        .into_iter()
        .all(|name| available.contains(name)))
}
