#![allow(clippy::expect_used)]

use super::*;
use crate::reflect::ScalarRef;

#[test]
fn members_keep_insertion_order() {
    let anon = crate::anon! { b: 1, a: "x", c: true };
    assert_eq!(anon.member_names(), vec!["b", "a", "c"]);
    assert_eq!(anon.len(), 3);
}

#[test]
fn later_member_shadows_earlier() {
    let anon = Anon::default().with("a", 1_i32).with("a", "two");
    assert_eq!(anon.len(), 1);
    let a = anon.member("a").expect("member a");
    assert_eq!(a.scalar(), Some(ScalarRef::Text("two")));
}

#[test]
fn missing_member_is_none() {
    let anon = crate::anon! { a: 1 };
    assert!(anon.member("b").is_none());
}

#[test]
fn null_member_is_present_but_null() {
    let anon = crate::anon! { a: None::<i32> };
    let a = anon.member("a").expect("member a");
    assert!(a.is_null());
}

#[test]
fn anon_has_open_shape() {
    let anon = Anon::default();
    assert!(anon.is_empty());
    assert!(anon.runtime_shape().has_open_members());
}

#[test]
fn anon_list_is_a_builtin_sequence() {
    let list = crate::anon_list![1, "two", crate::anon! { three: 3 }];
    assert_eq!(list.len(), 3);
    let items = list.items().expect("list is iterable");
    assert_eq!(items.len(), 3);
    assert!(items[2].runtime_shape().has_open_members());
    assert!(matches!(
        list.runtime_shape().kind(),
        crate::shape::ShapeKind::Sequence(seq) if seq.builtin
    ));
}

#[test]
fn anon_list_with_appends() {
    let list = AnonList::default().with(1_u8).with(2_u8);
    assert_eq!(list.len(), 2);
    assert!(!list.is_empty());
}
