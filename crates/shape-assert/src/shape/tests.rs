#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use super::*;
use crate::reflect::Reflect;

crate::reflect_interface! {
    IBase {
        id: i32,
    }
}

crate::reflect_interface! {
    IDerived: IBase {
        name: String,
    }
}

struct Widget {
    id: i32,
    name: String,
}

crate::reflect_record! {
    Widget implements [IDerived] {
        id: i32,
        name: String,
    }
}

#[test]
fn numeric_shapes_are_numeric_value_kinds() {
    let shape = i32::shape_of();
    assert_eq!(shape.name(), "i32");
    assert!(matches!(shape.kind(), ShapeKind::Numeric(NumericKind::I32)));
    assert!(shape.is_value_kind());
    assert!(!shape.is_optional());
}

#[test]
fn text_and_uri_are_not_value_kinds() {
    assert!(!String::shape_of().is_value_kind());
    assert!(!url::Url::shape_of().is_value_kind());
    assert!(bool::shape_of().is_value_kind());
    assert!(chrono::NaiveDate::shape_of().is_value_kind());
}

#[test]
fn optional_wraps_inner_shape() {
    let shape = Option::<i64>::shape_of();
    assert_eq!(shape.name(), "Option<i64>");
    assert!(shape.is_optional());
    assert!(!shape.is_value_kind());
    assert_eq!(shape.unwrap_optional(), i64::shape_of());
}

#[test]
fn once_cell_shares_option_shape() {
    assert_eq!(
        std::cell::OnceCell::<i32>::shape_of(),
        Option::<i32>::shape_of()
    );
}

#[test]
fn str_shares_string_shape() {
    assert_eq!(<&'static str>::shape_of(), String::shape_of());
}

#[test]
fn smart_pointers_are_transparent() {
    assert_eq!(std::rc::Rc::<Widget>::shape_of(), Widget::shape_of());
    assert_eq!(Box::<i32>::shape_of(), i32::shape_of());
}

#[test]
fn sequence_records_element_type() {
    let shape = Vec::<u8>::shape_of();
    assert_eq!(shape.name(), "Vec<u8>");
    let ShapeKind::Sequence(seq) = shape.kind() else {
        panic!("expected a sequence shape");
    };
    assert!(seq.builtin);
    let element = seq.element.map(|f| f());
    assert_eq!(element, Some(u8::shape_of()));
}

#[test]
fn interned_shapes_are_identical() {
    assert!(std::ptr::eq(
        Vec::<Widget>::shape_of(),
        Vec::<Widget>::shape_of()
    ));
}

#[test]
fn nominal_assignability_follows_bases() {
    let widget = Widget::shape_of();
    assert!(widget.is_assignable_to(widget));
    assert!(widget.is_assignable_to(IDerived::shape_of()));
    assert!(widget.is_assignable_to(IBase::shape_of()));
    assert!(!IBase::shape_of().is_assignable_to(widget));
}

#[test]
fn assignable_to_optional_of_assignable() {
    assert!(i32::shape_of().is_assignable_to(Option::<i32>::shape_of()));
    assert!(!i64::shape_of().is_assignable_to(Option::<i32>::shape_of()));
}

#[test]
fn interface_shape_lists_own_members_only() {
    let derived = IDerived::shape_of();
    assert!(derived.is_interface());
    let names: Vec<&str> = derived.own_members().iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["name"]);
    let bases: Vec<&str> = derived.bases().map(Shape::name).collect();
    assert_eq!(bases, vec!["IBase"]);
}

#[test]
fn object_shape_is_an_empty_interface() {
    let object = ObjectShape::shape_of();
    assert!(object.is_interface());
    assert!(object.own_members().is_empty());
}

#[test]
fn iterable_marker_has_no_element_type() {
    let ShapeKind::Sequence(seq) = Iterable::shape_of().kind() else {
        panic!("expected a sequence shape");
    };
    assert!(seq.element.is_none());
}

#[test]
fn tuple_members_are_positional() {
    let shape = <(i32, String)>::shape_of();
    assert_eq!(shape.name(), "(i32, String)");
    let names: Vec<&str> = shape.own_members().iter().map(|m| m.name).collect();
    assert_eq!(names, vec!["0", "1"]);
}

#[test]
fn display_prints_the_name() {
    assert_eq!(Widget::shape_of().to_string(), "Widget");
}

#[test]
fn record_runtime_shape_matches_static_shape() {
    let widget = Widget {
        id: 3,
        name: "w".to_owned(),
    };
    assert_eq!(widget.runtime_shape(), Widget::shape_of());
    assert_eq!(widget.member_names(), vec!["id", "name"]);
    let id = widget
        .member("id")
        .and_then(crate::Reflect::canonical_number)
        .expect("id is numeric");
    assert_eq!(id.as_str(), "3");
}
