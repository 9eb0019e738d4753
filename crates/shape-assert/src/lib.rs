#![deny(clippy::print_stdout, clippy::print_stderr)]

#[macro_use]
mod macros;

pub mod anon;
pub mod classify;
pub mod compare;
pub mod config;
pub mod duck;
pub mod engine;
pub mod error;
pub mod members;
pub mod node;
pub mod numeric;
pub mod predicate;
pub mod reflect;
pub mod render;
pub mod shape;
pub mod trace;

pub use anon::{Anon, AnonList};
pub use classify::{Category, classify};
pub use compare::{assert_equal, assert_equal_as, assert_equal_to, assert_equal_with};
pub use config::AssertConfig;
pub use duck::{is_structurally_compatible, value_satisfies};
pub use error::{AssertError, AssertFailure, FailureKind, ShapeError};
pub use members::{DataMember, get_data_members, get_member};
pub use numeric::{CanonicalNumeric, canonicalize};
pub use predicate::{Satisfies, Verdict};
pub use reflect::{Null, Reflect, ScalarRef};
pub use render::{render_value, render_value_indented};
pub use shape::{
    Iterable, MemberDecl, NumericKind, ObjectShape, ScalarKind, Shape, ShapeFn, ShapeKind, Shaped,
};
pub use trace::{LogSink, NoopSink, TraceSink, set_trace_logging, trace_logging};

/// Returns the current version of the shape-assert library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn version_is_semver() {
        let v = version();
        let parts: Vec<&str> = v.split('.').collect();
        assert_eq!(parts.len(), 3, "version should have 3 parts: {v}");
        for part in parts {
            part.parse::<u32>().expect("each part should be a number");
        }
    }

    #[test]
    fn shape_of_is_stable_across_calls() {
        assert!(std::ptr::eq(i32::shape_of(), i32::shape_of()));
        assert!(std::ptr::eq(
            Vec::<String>::shape_of(),
            Vec::<String>::shape_of()
        ));
    }
}
