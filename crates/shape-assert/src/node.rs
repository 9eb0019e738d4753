//! Comparison nodes.
//!
//! Each recursive step of a comparison is an [`AssertNode`] linked to its
//! parent by reference. The chain mirrors the traversal path, so it stays
//! acyclic even when the operand graphs are not.

use std::fmt;

use crate::render::render_value;
use crate::reflect::Reflect;
use crate::shape::Shape;

/// One step of a comparison.
pub struct AssertNode<'a> {
    target: Option<&'static Shape>,
    actual: Option<&'a dyn Reflect>,
    expected: Option<&'a dyn Reflect>,
    parent: Option<&'a AssertNode<'a>>,
    path: String,
}

impl<'a> AssertNode<'a> {
    /// The root node. Its path is empty.
    pub fn root(
        target: Option<&'static Shape>,
        actual: Option<&'a dyn Reflect>,
        expected: Option<&'a dyn Reflect>,
    ) -> Self {
        Self {
            target,
            actual,
            expected,
            parent: None,
            path: String::new(),
        }
    }

    /// A child of `parent` reached through `member_name`.
    pub fn child(
        parent: &'a AssertNode<'a>,
        member_name: impl fmt::Display,
        target: Option<&'static Shape>,
        actual: Option<&'a dyn Reflect>,
        expected: Option<&'a dyn Reflect>,
    ) -> Self {
        Self {
            path: format!("{}/{member_name}", parent.path),
            target,
            actual,
            expected,
            parent: Some(parent),
        }
    }

    /// Target shape; `None` is a null target.
    pub fn target(&self) -> Option<&'static Shape> {
        self.target
    }

    /// Actual operand; `None` when null.
    pub fn actual(&self) -> Option<&'a dyn Reflect> {
        self.actual
    }

    /// Expected operand; `None` when null.
    pub fn expected(&self) -> Option<&'a dyn Reflect> {
        self.expected
    }

    /// Slash-separated path from the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Ancestors from the parent up to the root.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a AssertNode<'a>> {
        std::iter::successors(self.parent, |node| node.parent)
    }
}

impl fmt::Display for AssertNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() {
            "(root)"
        } else {
            &self.path
        };
        writeln!(f, "{{")?;
        writeln!(f, "      path: {path}")?;
        writeln!(
            f,
            "    target: {}",
            self.target.map_or("(null)", Shape::name)
        )?;
        writeln!(f, "    actual: {}", render_value(self.actual))?;
        writeln!(f, "  expected: {}", render_value(self.expected))?;
        write!(f, "}}")
    }
}
