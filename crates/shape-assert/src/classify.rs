//! Five-way classification of target shapes.

use std::fmt;

use crate::shape::{Shape, ShapeKind};


/// Comparison strategy selected by a node's target shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// No target shape: both operands must be null.
    NullTarget,
    /// A numeric kind, or an optional wrapper around one.
    Numeric,
    /// An atomic value compared with native equality.
    PrimitiveScalar,
    /// An iterable sequence other than text.
    Collection,
    /// Everything else: records, anonymous records and interfaces.
    Composite,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NullTarget => "null target",
            Self::Numeric => "numeric",
            Self::PrimitiveScalar => "primitive scalar",
            Self::Collection => "collection",
            Self::Composite => "composite",
        };
        f.write_str(s)
    }
}

/// Classifies a target shape.
///
/// Optional wrappers classify as the shape they wrap. Numerics are checked
/// before scalars; text is a scalar and never a collection.
pub fn classify(target: Option<&'static Shape>) -> Category {
    let Some(target) = target else {
        return Category::NullTarget;
    };
    match target.unwrap_optional().kind() {
        ShapeKind::Numeric(_) => Category::Numeric,
        ShapeKind::Scalar(_) => Category::PrimitiveScalar,
        ShapeKind::Sequence(_) => Category::Collection,
        ShapeKind::Composite(_) | ShapeKind::Optional(_) => Category::Composite,
    }
}
