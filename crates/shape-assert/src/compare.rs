//! Public comparison entry points.

use crate::config::AssertConfig;
use crate::engine::{Engine, OpenMembers};
use crate::error::AssertError;
use crate::node::AssertNode;
use crate::reflect::{Reflect, present};
use crate::shape::{Shape, Shaped};

/// Compares `actual` and `expected` against `actual`'s runtime shape.
///
/// A null `actual` gives a null target, so only a null `expected` passes.
/// The check is symmetric only when both sides share runtime shapes at every
/// level; prefer [`assert_equal_as`] when the target is known. Open
/// composites such as anonymous records and JSON objects are compared on
/// `actual`'s members, so extra members on `expected` are ignored.
///
/// # Errors
///
/// See [`assert_equal_with`].
pub fn assert_equal(actual: &dyn Reflect, expected: &dyn Reflect) -> Result<(), AssertError> {
    let target = present(actual).map(Reflect::runtime_shape);
    let root = AssertNode::root(target, present(actual), present(expected));
    Engine::new(&AssertConfig::default())
        .with_open_members(OpenMembers::Actual)
        .assert_node(&root)
}

/// Compares `actual` and `expected` against the shape of `T`.
///
/// Types that leave their shape to the runtime value, such as
/// `serde_json::Value`, fall back to `actual`'s runtime shape.
///
/// ```
/// use shape_assert::{anon, assert_equal_as, reflect_interface};
///
/// reflect_interface! {
///     pub IFoo {
///         foo: i32,
///     }
/// }
///
/// let actual = anon! { foo: 1, bar: "x" };
/// let expected = anon! { foo: 1 };
/// assert!(assert_equal_as::<IFoo>(&actual, &expected).is_ok());
/// ```
///
/// # Errors
///
/// See [`assert_equal_with`].
pub fn assert_equal_as<T: Shaped>(
    actual: &dyn Reflect,
    expected: &dyn Reflect,
) -> Result<(), AssertError> {
    let target = T::declared()
        .map(|declared| declared())
        .or_else(|| present(actual).map(Reflect::runtime_shape));
    assert_equal_with(actual, target, expected, &AssertConfig::default())
}

/// Compares `actual` and `expected` against an explicit target shape.
///
/// # Errors
///
/// See [`assert_equal_with`].
pub fn assert_equal_to(
    actual: &dyn Reflect,
    target: Option<&'static Shape>,
    expected: &dyn Reflect,
) -> Result<(), AssertError> {
    assert_equal_with(actual, target, expected, &AssertConfig::default())
}

/// Compares `actual` and `expected` against `target` with per-call options.
///
/// Open composites are compared on the members of both operands, so a
/// member present on only one side is a missing-member violation.
///
/// # Errors
///
/// Returns [`AssertError::Failed`] describing the first node that differs,
/// or [`AssertError::Configuration`] when a target shape has ambiguous
/// members.
pub fn assert_equal_with(
    actual: &dyn Reflect,
    target: Option<&'static Shape>,
    expected: &dyn Reflect,
    config: &AssertConfig<'_>,
) -> Result<(), AssertError> {
    let root = AssertNode::root(target, present(actual), present(expected));
    Engine::new(config).assert_node(&root)
}
