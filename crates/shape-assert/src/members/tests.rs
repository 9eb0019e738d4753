#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::shape::Shaped;

crate::reflect_interface! {
    IName {
        name: String,
    }
}

crate::reflect_interface! {
    IId {
        id: i32,
    }
}

crate::reflect_interface! {
    IEntity: IId, IName {
        kind: String,
    }
}

crate::reflect_interface! {
    ILeft: IId {
        left: i32,
    }
}

crate::reflect_interface! {
    IRight: IId {
        right: i32,
    }
}

crate::reflect_interface! {
    IDiamond: ILeft, IRight {}
}

crate::reflect_interface! {
    ITextId {
        id: String,
    }
}

crate::reflect_interface! {
    IConflict: IId, ITextId {}
}

struct Person {
    id: i32,
    name: String,
}

crate::reflect_record! {
    Person implements [IId, IName] {
        id: i32,
        name: String,
    }
}

fn names(shape: &'static Shape) -> Vec<&'static str> {
    member_names(shape).expect("unambiguous shape")
}

#[test]
fn record_members_in_declaration_order() {
    assert_eq!(names(Person::shape_of()), vec!["id", "name"]);
}

#[test]
fn record_members_do_not_include_interfaces() {
    let members = get_data_members(Person::shape_of()).expect("record members");
    assert!(members.iter().all(|m| m.owner == Person::shape_of()));
}

#[test]
fn interface_members_include_extended_interfaces() {
    assert_eq!(names(IEntity::shape_of()), vec!["kind", "id", "name"]);
}

#[test]
fn diamond_inheritance_yields_one_member() {
    assert_eq!(names(IDiamond::shape_of()), vec!["left", "id", "right"]);
}

#[test]
fn conflicting_declared_types_are_ambiguous() {
    let err = get_data_members(IConflict::shape_of()).expect_err("ambiguous member");
    let ShapeError::AmbiguousMember {
        shape,
        member,
        first,
        second,
    } = err;
    assert_eq!(shape, "IConflict");
    assert_eq!(member, "id");
    assert_eq!(first, "IId");
    assert_eq!(second, "ITextId");
}

#[test]
fn declared_shape_resolves_member_type() {
    let member = get_member(IEntity::shape_of(), "id")
        .expect("unambiguous shape")
        .expect("id member");
    assert_eq!(member.declared_shape(), Some(i32::shape_of()));
    assert_eq!(member.owner, IId::shape_of());
}

#[test]
fn get_member_absent() {
    let member = get_member(IName::shape_of(), "id").expect("unambiguous shape");
    assert!(member.is_none());
}

#[test]
fn get_reads_member_value() {
    let person = Person {
        id: 4,
        name: "P".to_owned(),
    };
    let member = get_member(Person::shape_of(), "id")
        .expect("unambiguous shape")
        .expect("id member");
    let value = member.get(&person).expect("id value");
    assert_eq!(
        value.canonical_number().map(|n| n.to_string()),
        Some("4".to_owned())
    );
}

#[test]
fn scalars_have_no_members() {
    assert!(names(i32::shape_of()).is_empty());
    assert!(names(String::shape_of()).is_empty());
}
