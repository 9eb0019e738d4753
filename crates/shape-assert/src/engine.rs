//! The recursive comparison driver.
//!
//! [`Engine::assert_node`] settles one [`AssertNode`] and recurses into
//! collection items and composite members. Checks run in a fixed order:
//! predicates, null handling, the circular-reference scan, then the
//! strategy chosen by [`classify`]. The first violation aborts the whole
//! comparison.

use crate::classify::{Category, classify};
use crate::config::AssertConfig;
use crate::duck::value_satisfies;
use crate::error::{AssertError, AssertFailure, FailureKind};
use crate::members::get_data_members;
use crate::node::AssertNode;
use crate::numeric::canonicalize;
use crate::predicate::{Satisfies, Verdict};
use crate::reflect::{Reflect, is_reference_kind, present, same_reference};
use crate::render::render_value;
use crate::shape::{Shape, ShapeKind};
use crate::trace::{LogSink, TraceSink, trace_logging};


/// Outcome of a strategy that may hand the node on to the next one.
enum Step {
    /// The node is settled.
    Done,
    /// The next strategy applies as well.
    Continue,
}

/// Which operands supply the member names of an open composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OpenMembers {
    /// Members of `actual` only. Extra members on `expected` are ignored.
    Actual,
    /// Members present on either operand.
    Both,
}

/// Comparison driver for a single top-level call.
pub struct Engine<'c> {
    message: Option<&'c str>,
    trace: Option<&'c dyn TraceSink>,
    open_members: OpenMembers,
}

impl<'c> Engine<'c> {
    /// Creates an engine from per-call options.
    ///
    /// Without an explicit sink, trace lines go to the `log` facade when the
    /// process-wide toggle is on and are dropped otherwise.
    pub fn new(config: &AssertConfig<'c>) -> Self {
        let trace = config
            .trace
            .or_else(|| trace_logging().then_some(&LogSink as &dyn TraceSink));
        Self {
            message: config.message,
            trace,
            open_members: OpenMembers::Both,
        }
    }

    /// Sets which operands supply the members of open composites.
    pub(crate) fn with_open_members(mut self, open_members: OpenMembers) -> Self {
        self.open_members = open_members;
        self
    }

    /// Compares one node and, recursively, everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`AssertError::Failed`] for the first violation found and
    /// [`AssertError::Configuration`] when a target shape is ambiguous.
    pub fn assert_node(&self, node: &AssertNode<'_>) -> Result<(), AssertError> {
        if let Step::Done = self.try_predicate(node)? {
            return Ok(());
        }

        let (actual, expected) = (node.actual(), node.expected());
        let Some(target) = node.target() else {
            if actual.is_some() {
                return Err(self.fail(
                    node,
                    FailureKind::NullTargetViolation,
                    "the target type is null but actual is not null",
                ));
            }
            if expected.is_some() {
                return Err(self.fail(
                    node,
                    FailureKind::NullTargetViolation,
                    "the target type is null but expected is not null",
                ));
            }
            self.trace(node, "actual and expected are both null");
            return Ok(());
        };

        if target.is_value_kind() {
            if actual.is_none() {
                return Err(self.fail(
                    node,
                    FailureKind::NonNullableNullViolation,
                    format!("the target type {target} is not nullable but actual is null"),
                ));
            }
            if expected.is_none() {
                return Err(self.fail(
                    node,
                    FailureKind::NonNullableNullViolation,
                    format!("the target type {target} is not nullable but expected is null"),
                ));
            }
        }

        let (actual, expected) = match (actual, expected) {
            (None, None) => {
                self.trace(node, "actual and expected are both null");
                return Ok(());
            }
            (None, Some(_)) => {
                return Err(self.fail(
                    node,
                    FailureKind::NullMismatch,
                    "actual is null but expected is not null",
                ));
            }
            (Some(_), None) => {
                return Err(self.fail(
                    node,
                    FailureKind::NullMismatch,
                    "actual is not null but expected is null",
                ));
            }
            (Some(actual), Some(expected)) => (actual, expected),
        };

        if let Step::Done = self.try_circular_reference(node, target, actual, expected)? {
            return Ok(());
        }

        match classify(Some(target)) {
            Category::Numeric => self.assert_numeric(node, actual, expected),
            Category::PrimitiveScalar => self.assert_primitive(node, target, actual, expected),
            Category::Collection => {
                if let Step::Done = self.assert_collection(node, target, actual, expected)? {
                    return Ok(());
                }
                self.assert_composite(node, target, actual, expected)
            }
            Category::Composite => self.assert_composite(node, target, actual, expected),
            Category::NullTarget => Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!("the target type {target} classifies as a null target"),
            )),
        }
    }

    // -----------------------------------------------------------------------
    // Predicates
    // -----------------------------------------------------------------------

    fn try_predicate(&self, node: &AssertNode<'_>) -> Result<Step, AssertError> {
        let (actual, expected) = (node.actual(), node.expected());
        let on_actual = actual.and_then(Satisfies::downcast);
        let on_expected = expected.and_then(Satisfies::downcast);
        let (predicate, operand, side) = match (on_actual, on_expected) {
            (None, None) => return Ok(Step::Continue),
            (Some(_), Some(_)) => {
                return Err(self.fail(
                    node,
                    FailureKind::TypeViolation,
                    "actual and expected are both predicates",
                ));
            }
            (None, Some(predicate)) => (predicate, actual, "actual"),
            (Some(predicate), None) => (predicate, expected, "expected"),
        };

        match predicate.evaluate(operand) {
            Verdict::Accepted => {
                self.trace(node, &format!("{side} satisfies the {}", predicate.description()));
                Ok(Step::Done)
            }
            Verdict::Rejected => Err(self.fail(
                node,
                FailureKind::ValueMismatch,
                format!("{side} does not satisfy the {}", predicate.description()),
            )),
            Verdict::WrongType => Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "{side} is not of the type accepted by the {}",
                    predicate.description()
                ),
            )),
        }
    }

    // -----------------------------------------------------------------------
    // Circular references
    // -----------------------------------------------------------------------

    fn try_circular_reference(
        &self,
        node: &AssertNode<'_>,
        target: &'static Shape,
        actual: &dyn Reflect,
        expected: &dyn Reflect,
    ) -> Result<Step, AssertError> {
        if !is_reference_kind(actual) || !is_reference_kind(expected) {
            return Ok(Step::Continue);
        }

        for ancestor in node.ancestors() {
            let actual_revisit = ancestor
                .actual()
                .is_some_and(|prior| same_reference(prior, actual));
            let expected_revisit = ancestor
                .expected()
                .is_some_and(|prior| same_reference(prior, expected));
            match (actual_revisit, expected_revisit) {
                (true, true) => {
                    if !value_satisfies(actual, target.unwrap_optional())? {
                        return Err(self.fail(
                            node,
                            FailureKind::CircularReferenceViolation,
                            format!(
                                "actual and expected are circular references to the same path \
                                 but do not satisfy the target type {target}"
                            ),
                        ));
                    }
                    let back = if ancestor.path().is_empty() {
                        "(root)"
                    } else {
                        ancestor.path()
                    };
                    self.trace(
                        node,
                        &format!("actual and expected are circular references to {back}"),
                    );
                    return Ok(Step::Done);
                }
                (true, false) => {
                    return Err(self.fail(
                        node,
                        FailureKind::CircularReferenceViolation,
                        "actual is a circular reference but expected is not",
                    ));
                }
                (false, true) => {
                    return Err(self.fail(
                        node,
                        FailureKind::CircularReferenceViolation,
                        "expected is a circular reference but actual is not",
                    ));
                }
                (false, false) => {}
            }
        }
        Ok(Step::Continue)
    }

    // -----------------------------------------------------------------------
    // Strategies
    // -----------------------------------------------------------------------

    fn assert_numeric(
        &self,
        node: &AssertNode<'_>,
        actual: &dyn Reflect,
        expected: &dyn Reflect,
    ) -> Result<(), AssertError> {
        let Some(actual_number) = canonicalize(actual) else {
            return Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "the target type is numeric but actual is of non-numeric type {}",
                    actual.runtime_shape()
                ),
            ));
        };
        let Some(expected_number) = canonicalize(expected) else {
            return Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "the target type is numeric but expected is of non-numeric type {}",
                    expected.runtime_shape()
                ),
            ));
        };
        if actual_number != expected_number {
            return Err(self.fail(
                node,
                FailureKind::ValueMismatch,
                format!(
                    "actual {actual_number} and expected {expected_number} are not equal as numbers"
                ),
            ));
        }
        self.trace(node, "actual and expected are equal as numbers");
        Ok(())
    }

    fn assert_primitive(
        &self,
        node: &AssertNode<'_>,
        target: &'static Shape,
        actual: &dyn Reflect,
        expected: &dyn Reflect,
    ) -> Result<(), AssertError> {
        let actual_scalar = actual
            .scalar()
            .filter(|_| actual.runtime_shape().is_assignable_to(target));
        let Some(actual_scalar) = actual_scalar else {
            return Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "the target type {target} is primitive but actual is of type {}",
                    actual.runtime_shape()
                ),
            ));
        };
        let expected_scalar = expected
            .scalar()
            .filter(|_| expected.runtime_shape().is_assignable_to(target));
        let Some(expected_scalar) = expected_scalar else {
            return Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "the target type {target} is primitive but expected is of type {}",
                    expected.runtime_shape()
                ),
            ));
        };
        if actual_scalar != expected_scalar {
            return Err(self.fail(
                node,
                FailureKind::ValueMismatch,
                format!("actual and expected are not equal as {target}"),
            ));
        }
        self.trace(node, &format!("actual and expected are equal as {target}"));
        Ok(())
    }

    fn assert_collection(
        &self,
        node: &AssertNode<'_>,
        target: &'static Shape,
        actual: &dyn Reflect,
        expected: &dyn Reflect,
    ) -> Result<Step, AssertError> {
        let ShapeKind::Sequence(sequence) = target.unwrap_optional().kind() else {
            return Ok(Step::Continue);
        };
        let Some(actual_items) = actual.items() else {
            return Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "the target type {target} is a collection but actual is of non-collection type {}",
                    actual.runtime_shape()
                ),
            ));
        };
        let Some(expected_items) = expected.items() else {
            return Err(self.fail(
                node,
                FailureKind::TypeViolation,
                format!(
                    "the target type {target} is a collection but expected is of non-collection type {}",
                    expected.runtime_shape()
                ),
            ));
        };
        if actual_items.len() != expected_items.len() {
            return Err(self.fail(
                node,
                FailureKind::LengthMismatch,
                format!(
                    "actual has {} items but expected has {}",
                    actual_items.len(),
                    expected_items.len()
                ),
            ));
        }

        let element = sequence.element.map(|element| element());
        for (index, (a, e)) in actual_items.into_iter().zip(expected_items).enumerate() {
            let (a, e) = (present(a), present(e));
            let item_target = element.or_else(|| a.map(Reflect::runtime_shape));
            let child = AssertNode::child(node, index, item_target, a, e);
            self.assert_node(&child)?;
        }

        if sequence.builtin {
            self.trace(node, "actual and expected are equal as collections");
            return Ok(Step::Done);
        }
        Ok(Step::Continue)
    }

    fn assert_composite(
        &self,
        node: &AssertNode<'_>,
        target: &'static Shape,
        actual: &dyn Reflect,
        expected: &dyn Reflect,
    ) -> Result<(), AssertError> {
        let target = target.unwrap_optional();

        if same_reference(actual, expected) {
            if !value_satisfies(actual, target)? {
                return Err(self.fail(
                    node,
                    FailureKind::TypeViolation,
                    format!(
                        "actual and expected are the same reference but do not satisfy the target type {target}"
                    ),
                ));
            }
            self.trace(node, "actual and expected are the same reference");
            return Ok(());
        }

        let members: Vec<(&str, Option<&'static Shape>)> = if target.has_open_members() {
            let mut names = actual.member_names();
            if self.open_members == OpenMembers::Both {
                for name in expected.member_names() {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                }
            }
            names.into_iter().map(|name| (name, None)).collect()
        } else {
            get_data_members(target)?
                .into_iter()
                .map(|member| (member.name, member.declared_shape()))
                .collect()
        };

        for (name, declared) in members {
            let Some(actual_member) = actual.member(name) else {
                return Err(self.fail(
                    node,
                    FailureKind::MissingMemberViolation,
                    format!("data member {name} was not found on actual"),
                ));
            };
            let Some(expected_member) = expected.member(name) else {
                return Err(self.fail(
                    node,
                    FailureKind::MissingMemberViolation,
                    format!("data member {name} was not found on expected"),
                ));
            };
            let (a, e) = (present(actual_member), present(expected_member));
            let member_target = declared.or_else(|| a.map(Reflect::runtime_shape));
            let child = AssertNode::child(node, name, member_target, a, e);
            self.assert_node(&child)?;
        }

        self.trace(node, &format!("actual and expected are equal as {target}"));
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Reporting
    // -----------------------------------------------------------------------

    fn fail(
        &self,
        node: &AssertNode<'_>,
        kind: FailureKind,
        reason: impl Into<String>,
    ) -> AssertError {
        let failure = AssertFailure {
            kind,
            reason: reason.into(),
            path: node.path().to_owned(),
            target: node.target().map(|target| target.name().to_owned()),
            actual: render_value(node.actual()),
            expected: render_value(node.expected()),
            message: self.message.map(str::to_owned),
        };
        log::debug!(
            target: "shape_assert",
            "comparison failed at {}: {} [{}]",
            failure.display_path(),
            failure.reason,
            kind.code()
        );
        AssertError::from(failure)
    }

    fn trace(&self, node: &AssertNode<'_>, note: &str) {
        let Some(sink) = self.trace else {
            return;
        };
        let path = if node.path().is_empty() {
            "(root)"
        } else {
            node.path()
        };
        let target = node.target().map_or("(null)", Shape::name);
        let line = match self.message {
            Some(message) => format!("{message}: {note}: {path} ({target})"),
            None => format!("{note}: {path} ({target})"),
        };
        sink.write(&line);
    }
}
