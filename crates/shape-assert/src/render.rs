//! Deterministic structural rendering of values for diagnostics.
//!
//! Numerics render as their canonical text, booleans bare, other scalars
//! quoted. Sequences render as bracketed item lists and composites as
//! `name: value` maps in member order; a custom iterable renders its members
//! followed by its items. A reference-kind value that was already rendered
//! once renders as `(nested)`, which also cuts cycles.
//!
//! Rendering never takes part in comparison.

use std::any::TypeId;
use std::collections::HashSet;

use crate::predicate::Satisfies;
use crate::reflect::{Reflect, ScalarRef, identity, is_reference_kind, present};
use crate::shape::{Members, ShapeKind};


const INDENT: &str = "    ";

/// Renders a value on a single line.
pub fn render_value(value: Option<&dyn Reflect>) -> String {
    let mut renderer = Renderer::new(false);
    renderer.value(value, 0);
    renderer.out
}

/// Renders a value across lines, nesting indented by four spaces.
pub fn render_value_indented(value: Option<&dyn Reflect>) -> String {
    let mut renderer = Renderer::new(true);
    renderer.value(value, 0);
    renderer.out
}

struct Renderer {
    out: String,
    seen: HashSet<(*const (), TypeId)>,
    pretty: bool,
}

impl Renderer {
    fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            seen: HashSet::new(),
            pretty,
        }
    }

    fn value(&mut self, value: Option<&dyn Reflect>, depth: usize) {
        let Some(value) = value.and_then(present) else {
            self.out.push_str("null");
            return;
        };
        if value.as_any().is::<Satisfies>() {
            self.out.push_str("(predicate)");
            return;
        }
        if let Some(number) = value.canonical_number() {
            self.out.push_str(number.as_str());
            return;
        }
        if let Some(scalar) = value.scalar() {
            match scalar {
                ScalarRef::Bool(b) => self.out.push_str(if b { "true" } else { "false" }),
                ScalarRef::Char(_)
                | ScalarRef::Text(_)
                | ScalarRef::Date(_)
                | ScalarRef::DateTime(_)
                | ScalarRef::DateTimeOffset(_)
                | ScalarRef::Duration(_)
                | ScalarRef::Uuid(_)
                | ScalarRef::Uri(_)
                | ScalarRef::Enum { .. }
                | ScalarRef::TypeRef(_) => {
                    self.out.push_str(&format!("\"{scalar}\""));
                }
            }
            return;
        }
        if is_reference_kind(value) && !self.seen.insert(identity(value)) {
            self.out.push_str("(nested)");
            return;
        }

        match value.runtime_shape().kind() {
            ShapeKind::Sequence(seq) if seq.builtin => self.items(value, depth),
            ShapeKind::Sequence(_) => {
                let mut entries = member_entries(value);
                entries.push(None);
                self.map(value, &entries, depth);
            }
            ShapeKind::Composite(composite) => {
                let entries: Vec<Option<&str>> = match &composite.members {
                    Members::Declared(_) => member_entries(value),
                    Members::Open => value.member_names().into_iter().map(Some).collect(),
                };
                self.map(value, &entries, depth);
            }
            ShapeKind::Numeric(_) | ShapeKind::Scalar(_) | ShapeKind::Optional(_) => {
                self.out.push_str("{}");
            }
        }
    }

    /// Renders `{ name: value, .. }`; a `None` entry stands for the item list.
    fn map(&mut self, value: &dyn Reflect, entries: &[Option<&str>], depth: usize) {
        self.out.push('{');
        for (i, entry) in entries.iter().enumerate() {
            self.separator(i, depth + 1);
            match entry {
                Some(name) => {
                    self.out.push_str(name);
                    self.out.push_str(": ");
                    self.value(value.member(name), depth + 1);
                }
                None => self.items(value, depth + 1),
            }
        }
        self.close(entries.is_empty(), depth, '}');
    }

    fn items(&mut self, value: &dyn Reflect, depth: usize) {
        let items = value.items().unwrap_or_default();
        self.out.push('[');
        for (i, item) in items.iter().enumerate() {
            self.separator(i, depth + 1);
            self.value(Some(*item), depth + 1);
        }
        self.close(items.is_empty(), depth, ']');
    }

    fn separator(&mut self, index: usize, depth: usize) {
        if index > 0 {
            self.out.push(',');
            if !self.pretty {
                self.out.push(' ');
            }
        }
        if self.pretty {
            self.newline(depth);
        }
    }

    fn close(&mut self, empty: bool, depth: usize, bracket: char) {
        if self.pretty && !empty {
            self.newline(depth);
        }
        self.out.push(bracket);
    }

    fn newline(&mut self, depth: usize) {
        self.out.push('\n');
        for _ in 0..depth {
            self.out.push_str(INDENT);
        }
    }
}

fn member_entries(value: &dyn Reflect) -> Vec<Option<&str>> {
    value
        .runtime_shape()
        .own_members()
        .iter()
        .map(|decl| Some(decl.name))
        .collect()
}
