//! Failure and configuration errors.
//!
//! A comparison ends in at most one [`AssertFailure`]: the first violation
//! anywhere in the traversal aborts the call. A [`ShapeError`] reports a
//! defect in a target shape itself and is independent of the operands.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// FailureKind
// ---------------------------------------------------------------------------

/// Why a node failed to compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// The target shape is absent but an operand is not null.
    NullTargetViolation,
    /// The target is a non-optional value kind but an operand is null.
    NonNullableNullViolation,
    /// Exactly one operand is null.
    NullMismatch,
    /// An asymmetric cycle, or a cycle closing on an incompatible shape.
    CircularReferenceViolation,
    /// An operand's runtime type does not fit the target's category.
    TypeViolation,
    /// Both operands fit the target but their values differ.
    ValueMismatch,
    /// Collections of different lengths.
    LengthMismatch,
    /// A target member is absent from an operand's runtime type.
    MissingMemberViolation,
}

impl FailureKind {
    /// Stable reason code, e.g. `"value-mismatch"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NullTargetViolation => "null-target-violation",
            Self::NonNullableNullViolation => "non-nullable-null-violation",
            Self::NullMismatch => "null-mismatch",
            Self::CircularReferenceViolation => "circular-reference-violation",
            Self::TypeViolation => "type-violation",
            Self::ValueMismatch => "value-mismatch",
            Self::LengthMismatch => "length-mismatch",
            Self::MissingMemberViolation => "missing-member-violation",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// AssertFailure
// ---------------------------------------------------------------------------

/// The payload of a failed comparison.
///
/// `actual` and `expected` hold the compact structural rendering of the
/// offending operands at `path`; `target` is the name of the node's target
/// shape, absent for a null target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertFailure {
    /// Failure category.
    pub kind: FailureKind,
    /// Human-readable explanation.
    pub reason: String,
    /// Slash-separated member path from the root; empty at the root.
    pub path: String,
    /// Target shape name.
    pub target: Option<String>,
    /// Rendered actual operand.
    pub actual: String,
    /// Rendered expected operand.
    pub expected: String,
    /// Caller-supplied message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AssertFailure {
    /// Serializes the failure as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The path as displayed, `(root)` for the root node.
    pub fn display_path(&self) -> &str {
        if self.path.is_empty() {
            "(root)"
        } else {
            &self.path
        }
    }
}

impl fmt::Display for AssertFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            write!(f, "{message}: ")?;
        }
        writeln!(f, "{} [{}]", self.reason, self.kind.code())?;
        writeln!(f, "{{")?;
        writeln!(f, "      path: {}", self.display_path())?;
        writeln!(
            f,
            "    target: {}",
            self.target.as_deref().unwrap_or("(null)")
        )?;
        writeln!(f, "    actual: {}", self.actual)?;
        writeln!(f, "  expected: {}", self.expected)?;
        write!(f, "}}")
    }
}

impl std::error::Error for AssertFailure {}

// ---------------------------------------------------------------------------
// ShapeError
// ---------------------------------------------------------------------------

/// A target shape that cannot be compared against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Two distinct members with the same name reach the shape through
    /// different interfaces.
    AmbiguousMember {
        /// Shape whose member set is ambiguous.
        shape: String,
        /// The duplicated member name.
        member: String,
        /// Interface declaring the first member.
        first: String,
        /// Interface declaring the conflicting member.
        second: String,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousMember {
                shape,
                member,
                first,
                second,
            } => write!(
                f,
                "shape {shape} has ambiguous member {member}: declared by both {first} and {second}"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

// ---------------------------------------------------------------------------
// AssertError
// ---------------------------------------------------------------------------

/// Error returned by every comparison entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssertError {
    /// The operands are not structurally equal.
    Failed(Box<AssertFailure>),
    /// The target shape is malformed.
    Configuration(ShapeError),
}

impl AssertError {
    /// The comparison failure, if this is one.
    pub fn failure(&self) -> Option<&AssertFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            Self::Configuration(_) => None,
        }
    }

    /// The failure kind, if this is a comparison failure.
    pub fn kind(&self) -> Option<FailureKind> {
        self.failure().map(|failure| failure.kind)
    }
}

impl fmt::Display for AssertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(failure) => write!(f, "assertion failed: {failure}"),
            Self::Configuration(err) => write!(f, "invalid target shape: {err}"),
        }
    }
}

impl std::error::Error for AssertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Failed(failure) => Some(failure.as_ref()),
            Self::Configuration(err) => Some(err),
        }
    }
}

impl From<AssertFailure> for AssertError {
    fn from(failure: AssertFailure) -> Self {
        Self::Failed(Box::new(failure))
    }
}

impl From<ShapeError> for AssertError {
    fn from(err: ShapeError) -> Self {
        Self::Configuration(err)
    }
}
