#![allow(clippy::expect_used)]

use super::*;
use crate::shape::{ObjectShape, Shaped};

crate::reflect_interface! {
    IFoo {
        foo: i32,
    }
}

crate::reflect_interface! {
    IFooBar: IFoo {
        bar: String,
    }
}

struct Foo {
    foo: i32,
}

crate::reflect_record! {
    Foo { foo: i32 }
}

struct FooBar {
    foo: i32,
    bar: String,
}

crate::reflect_record! {
    FooBar implements [IFooBar] {
        foo: i32,
        bar: String,
    }
}

struct Unrelated {
    other: bool,
}

crate::reflect_record! {
    Unrelated { other: bool }
}

fn compatible(candidate: &'static Shape, target: &'static Shape) -> bool {
    is_structurally_compatible(candidate, target).expect("unambiguous shapes")
}

#[test]
fn nominal_implementation_is_compatible() {
    assert!(compatible(FooBar::shape_of(), IFooBar::shape_of()));
    assert!(compatible(FooBar::shape_of(), IFoo::shape_of()));
}

#[test]
fn matching_member_names_are_compatible() {
    assert!(compatible(Foo::shape_of(), IFoo::shape_of()));
    assert!(compatible(FooBar::shape_of(), Foo::shape_of()));
}

#[test]
fn missing_member_names_are_incompatible() {
    assert!(!compatible(Foo::shape_of(), IFooBar::shape_of()));
    assert!(!compatible(Unrelated::shape_of(), IFoo::shape_of()));
}

#[test]
fn object_target_accepts_everything() {
    assert!(compatible(Unrelated::shape_of(), ObjectShape::shape_of()));
    assert!(compatible(i32::shape_of(), ObjectShape::shape_of()));
}

#[test]
fn optional_target_uses_inner_members() {
    assert!(compatible(Foo::shape_of(), Option::<Foo>::shape_of()));
    assert!(!compatible(Unrelated::shape_of(), Option::<Foo>::shape_of()));
}

#[test]
fn anonymous_values_satisfy_by_their_own_members() {
    let value = crate::anon! { foo: 1, extra: true };
    assert!(value_satisfies(&value, IFoo::shape_of()).expect("unambiguous"));
    assert!(!value_satisfies(&value, IFooBar::shape_of()).expect("unambiguous"));
}

#[test]
fn records_satisfy_by_value_as_by_type() {
    let foo = Foo { foo: 1 };
    let unrelated = Unrelated { other: false };
    assert!(value_satisfies(&foo, IFoo::shape_of()).expect("unambiguous"));
    assert!(!value_satisfies(&unrelated, IFoo::shape_of()).expect("unambiguous"));
}

#[test]
fn implementing_record_value_satisfies_base_interface() {
    let fb = FooBar {
        foo: 2,
        bar: "b".to_owned(),
    };
    assert!(value_satisfies(&fb, IFoo::shape_of()).expect("unambiguous"));
    assert!(value_satisfies(&fb, IFooBar::shape_of()).expect("unambiguous"));
}
