//! Enumeration of a shape's data members.
//!
//! Records and custom iterables expose the members they declare. Interfaces
//! expose the union of their own members and those of every interface they
//! extend, visited depth-first in declaration order with each interface
//! visited once. The same name reached twice resolves to one member when
//! both declarations agree on the declared type; otherwise the shape is
//! ambiguous and enumeration fails.

use std::any::TypeId;
use std::collections::HashSet;

use crate::error::ShapeError;
use crate::reflect::Reflect;
use crate::shape::{Shape, ShapeFn};

#[cfg(test)]
mod tests;

/// A readable member of a shape.
#[derive(Debug, Clone, Copy)]
pub struct DataMember {
    /// Member name.
    pub name: &'static str,
    /// Declared type; `None` defers to the member value's runtime shape.
    pub declared: Option<ShapeFn>,
    /// Shape that declares the member.
    pub owner: &'static Shape,
}

impl DataMember {
    /// The declared type, resolved.
    pub fn declared_shape(&self) -> Option<&'static Shape> {
        self.declared.map(|declared| declared())
    }

    /// Reads the member from a value.
    pub fn get<'v>(&self, value: &'v dyn Reflect) -> Option<&'v dyn Reflect> {
        value.member(self.name)
    }
}

/// Returns the data members of a shape in declaration order.
///
/// # Errors
///
/// Returns [`ShapeError::AmbiguousMember`] when two interfaces reachable
/// from `shape` declare same-named members of different types.
pub fn get_data_members(shape: &'static Shape) -> Result<Vec<DataMember>, ShapeError> {
    let mut members: Vec<DataMember> = Vec::new();
    if !shape.is_interface() {
        collect_own(shape, &mut members);
        return Ok(members);
    }

    let mut visited: HashSet<TypeId> = HashSet::new();
    let mut stack: Vec<&'static Shape> = vec![shape];
    while let Some(current) = stack.pop() {
        if !visited.insert(current.type_id()) {
            continue;
        }
        for decl in current.own_members() {
            let candidate = DataMember {
                name: decl.name,
                declared: decl.declared,
                owner: current,
            };
            match members.iter().find(|m| m.name == decl.name) {
                None => members.push(candidate),
                Some(existing) if same_declared_type(existing, &candidate) => {}
                Some(existing) => {
                    return Err(ShapeError::AmbiguousMember {
                        shape: shape.name().to_owned(),
                        member: decl.name.to_owned(),
                        first: existing.owner.name().to_owned(),
                        second: current.name().to_owned(),
                    });
                }
            }
        }
        let bases: Vec<&'static Shape> = current.bases().collect();
        stack.extend(bases.into_iter().rev());
    }
    Ok(members)
}

/// Looks up a single data member by name.
///
/// # Errors
///
/// Propagates [`get_data_members`] errors.
pub fn get_member(shape: &'static Shape, name: &str) -> Result<Option<DataMember>, ShapeError> {
    Ok(get_data_members(shape)?
        .into_iter()
        .find(|member| member.name == name))
}

/// Names of a shape's data members.
///
/// # Errors
///
/// Propagates [`get_data_members`] errors.
pub fn member_names(shape: &'static Shape) -> Result<Vec<&'static str>, ShapeError> {
    Ok(get_data_members(shape)?
        .into_iter()
        .map(|member| member.name)
        .collect())
}

fn collect_own(shape: &'static Shape, members: &mut Vec<DataMember>) {
    for decl in shape.own_members() {
        if members.iter().any(|m| m.name == decl.name) {
            continue;
        }
        members.push(DataMember {
            name: decl.name,
            declared: decl.declared,
            owner: shape,
        });
    }
}

fn same_declared_type(a: &DataMember, b: &DataMember) -> bool {
    match (a.declared_shape(), b.declared_shape()) {
        (Some(x), Some(y)) => x.type_id() == y.type_id(),
        (None, None) => true,
        (Some(_), None) | (None, Some(_)) => false,
    }
}
