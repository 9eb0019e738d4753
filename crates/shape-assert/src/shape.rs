//! Interned type descriptors that anchor every comparison.
//!
//! A [`Shape`] is the runtime stand-in for a type: its display name, its
//! [`TypeId`], the category-bearing [`ShapeKind`], and the interfaces it
//! nominally implements. Shapes are built once per type and interned in a
//! process-wide registry so that generic instantiations (`Vec<T>`,
//! `Option<T>`, ...) get a stable `&'static Shape` of their own.
//!
//! Declared member and element types are stored as [`ShapeFn`] thunks rather
//! than resolved references. Resolving lazily means a recursive type such as
//! `struct Link { next: Option<Rc<Link>> }` never re-enters its own descriptor
//! while it is being built.

use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;
use std::sync::{LazyLock, RwLock};

#[cfg(test)]
mod tests;

/// A lazily-resolved reference to a [`Shape`].
pub type ShapeFn = fn() -> &'static Shape;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The fixed numeric kinds that compare through canonical decimal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// `i8`.
    I8,
    /// `i16`.
    I16,
    /// `i32`.
    I32,
    /// `i64`.
    I64,
    /// `i128`.
    I128,
    /// `isize`.
    Isize,
    /// `u8`.
    U8,
    /// `u16`.
    U16,
    /// `u32`.
    U32,
    /// `u64`.
    U64,
    /// `u128`.
    U128,
    /// `usize`.
    Usize,
    /// Single-precision float.
    F32,
    /// Double-precision float.
    F64,
    /// Arbitrary-precision decimal (`rust_decimal::Decimal`).
    Decimal,
}

/// Atomic, non-numeric value kinds compared through native value equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`.
    Bool,
    /// `char`.
    Char,
    /// `String` and `&'static str`.
    Text,
    /// Calendar date without time.
    Date,
    /// Date and time without offset.
    DateTime,
    /// Date and time with a UTC offset.
    DateTimeOffset,
    /// Elapsed time.
    Duration,
    /// Unique identifier.
    Uuid,
    /// Absolute URI.
    Uri,
    /// Member of a unit-only enumeration.
    Enum,
    /// A reference to a [`Shape`] itself.
    TypeRef,
}

/// A member declared by a record or interface shape.
#[derive(Debug, Clone, Copy)]
pub struct MemberDecl {
    /// Member name as exposed by [`crate::Reflect::member`].
    pub name: &'static str,
    /// Declared type; `None` means the type is taken from the member value.
    pub declared: Option<ShapeFn>,
}

impl MemberDecl {
    /// Creates a member declaration.
    pub const fn new(name: &'static str, declared: Option<ShapeFn>) -> Self {
        Self { name, declared }
    }
}

/// How a composite shape knows its members.
#[derive(Debug, Clone)]
pub enum Members {
    /// A fixed, ordered member list known from the type declaration.
    Declared(Vec<MemberDecl>),
    /// Members are carried by each value (anonymous records, JSON objects).
    Open,
}

/// Shape data for types with the iterable capability.
#[derive(Debug, Clone)]
pub struct SequenceShape {
    /// Statically known element type, if any.
    pub element: Option<ShapeFn>,
    /// `true` for opaque built-in containers whose only state is their items.
    pub builtin: bool,
    /// Extra public members of a custom iterable type.
    pub members: Vec<MemberDecl>,
}

/// Shape data for records and interfaces.
#[derive(Debug, Clone)]
pub struct CompositeShape {
    /// Member list.
    pub members: Members,
    /// `true` for interface shapes, whose member set includes extended interfaces.
    pub interface: bool,
}

/// Category-bearing part of a [`Shape`].
#[derive(Debug, Clone)]
pub enum ShapeKind {
    /// One of the fixed numeric kinds.
    Numeric(NumericKind),
    /// An atomic value kind.
    Scalar(ScalarKind),
    /// Optional wrapper around another shape.
    Optional(ShapeFn),
    /// Iterable sequence.
    Sequence(SequenceShape),
    /// Record, anonymous record or interface.
    Composite(CompositeShape),
}

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

/// Descriptor of a type's public shape.
pub struct Shape {
    name: String,
    type_id: TypeId,
    kind: ShapeKind,
    bases: Vec<ShapeFn>,
}

impl Shape {
    /// Creates a shape for `T` with the given kind and no bases.
    pub fn of<T: 'static>(name: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            name: name.into(),
            type_id: TypeId::of::<T>(),
            kind,
            bases: Vec::new(),
        }
    }

    /// Creates a numeric shape.
    pub fn numeric<T: 'static>(name: impl Into<String>, kind: NumericKind) -> Self {
        Self::of::<T>(name, ShapeKind::Numeric(kind))
    }

    /// Creates a scalar shape.
    pub fn scalar<T: 'static>(name: impl Into<String>, kind: ScalarKind) -> Self {
        Self::of::<T>(name, ShapeKind::Scalar(kind))
    }

    /// Creates an optional wrapper shape around `inner`.
    pub fn optional<T: 'static>(name: impl Into<String>, inner: ShapeFn) -> Self {
        Self::of::<T>(name, ShapeKind::Optional(inner))
    }

    /// Creates an opaque built-in sequence shape.
    pub fn sequence<T: 'static>(name: impl Into<String>, element: Option<ShapeFn>) -> Self {
        Self::of::<T>(
            name,
            ShapeKind::Sequence(SequenceShape {
                element,
                builtin: true,
                members: Vec::new(),
            }),
        )
    }

    /// Creates a custom iterable shape that also carries public members.
    pub fn iterable_record<T: 'static>(
        name: impl Into<String>,
        element: Option<ShapeFn>,
        members: Vec<MemberDecl>,
    ) -> Self {
        Self::of::<T>(
            name,
            ShapeKind::Sequence(SequenceShape {
                element,
                builtin: false,
                members,
            }),
        )
    }

    /// Creates a record shape with a declared member list.
    pub fn record<T: 'static>(name: impl Into<String>, members: Vec<MemberDecl>) -> Self {
        Self::of::<T>(
            name,
            ShapeKind::Composite(CompositeShape {
                members: Members::Declared(members),
                interface: false,
            }),
        )
    }

    /// Creates an interface shape with a declared member list.
    pub fn interface<T: 'static>(name: impl Into<String>, members: Vec<MemberDecl>) -> Self {
        Self::of::<T>(
            name,
            ShapeKind::Composite(CompositeShape {
                members: Members::Declared(members),
                interface: true,
            }),
        )
    }

    /// Creates a composite shape whose members are carried by each value.
    pub fn open<T: 'static>(name: impl Into<String>) -> Self {
        Self::of::<T>(
            name,
            ShapeKind::Composite(CompositeShape {
                members: Members::Open,
                interface: false,
            }),
        )
    }

    /// Sets the interfaces this shape implements (or, for an interface, extends).
    #[must_use]
    pub fn with_bases(mut self, bases: Vec<ShapeFn>) -> Self {
        self.bases = bases;
        self
    }

    /// Display name of the type.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The [`TypeId`] the shape was interned for.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Category-bearing kind.
    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    /// Interfaces implemented or extended, resolved.
    pub fn bases(&self) -> impl Iterator<Item = &'static Shape> + '_ {
        self.bases.iter().map(|base| base())
    }

    /// Returns `true` for the optional wrapper.
    pub fn is_optional(&self) -> bool {
        matches!(self.kind, ShapeKind::Optional(_))
    }

    /// Returns `true` for interface shapes.
    pub fn is_interface(&self) -> bool {
        matches!(&self.kind, ShapeKind::Composite(c) if c.interface)
    }

    /// Returns `true` when the member set is carried by values instead of the type.
    pub fn has_open_members(&self) -> bool {
        matches!(
            &self.kind,
            ShapeKind::Composite(CompositeShape {
                members: Members::Open,
                ..
            })
        )
    }

    /// Returns `true` when a null operand can never satisfy this shape.
    ///
    /// Numerics and scalars are value kinds, except text, URIs and type
    /// references which are nullable in the same way records and sequences are.
    pub fn is_value_kind(&self) -> bool {
        match &self.kind {
            ShapeKind::Numeric(_) => true,
            ShapeKind::Scalar(kind) => !matches!(
                kind,
                ScalarKind::Text | ScalarKind::Uri | ScalarKind::TypeRef
            ),
            ShapeKind::Optional(_) | ShapeKind::Sequence(_) | ShapeKind::Composite(_) => false,
        }
    }

    /// Strips any optional wrappers.
    pub fn unwrap_optional(&'static self) -> &'static Shape {
        let mut shape = self;
        while let ShapeKind::Optional(inner) = &shape.kind {
            shape = inner();
        }
        shape
    }

    /// Nominal assignability: the same type, a transitive base of this
    /// shape, or an optional wrapper around an assignable type.
    pub fn is_assignable_to(&self, target: &Shape) -> bool {
        if self.type_id == target.type_id {
            return true;
        }
        if let ShapeKind::Optional(inner) = &target.kind {
            return self.is_assignable_to(inner());
        }
        self.bases().any(|base| base.is_assignable_to(target))
    }

    /// Declared members of the shape itself, not including bases.
    pub fn own_members(&self) -> &[MemberDecl] {
        match &self.kind {
            ShapeKind::Composite(CompositeShape {
                members: Members::Declared(members),
                ..
            }) => members,
            ShapeKind::Sequence(seq) => &seq.members,
            ShapeKind::Composite(CompositeShape {
                members: Members::Open,
                ..
            })
            | ShapeKind::Numeric(_)
            | ShapeKind::Scalar(_)
            | ShapeKind::Optional(_) => &[],
        }
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for Shape {}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shape")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

static REGISTRY: LazyLock<RwLock<HashMap<TypeId, &'static Shape>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the interned shape for `T`, building it with `build` on first use.
///
/// `build` runs outside the registry lock, so it may resolve other shapes.
/// Two threads racing on the same type both build; the first insert wins and
/// every caller observes that one.
pub fn intern<T: 'static>(build: impl FnOnce() -> Shape) -> &'static Shape {
    let id = TypeId::of::<T>();
    if let Some(shape) = REGISTRY.read().ok().and_then(|map| map.get(&id).copied()) {
        return shape;
    }
    let built: &'static Shape = Box::leak(Box::new(build()));
    match REGISTRY.write() {
        Ok(mut map) => *map.entry(id).or_insert(built),
        Err(_) => built,
    }
}

// ---------------------------------------------------------------------------
// Shaped
// ---------------------------------------------------------------------------

/// Static access to a type's [`Shape`].
pub trait Shaped: 'static {
    /// The interned shape of `Self`.
    fn shape_of() -> &'static Shape;

    /// The shape to record when `Self` is used as a member or element type.
    ///
    /// `None` leaves the target unspecified so it is resolved from each
    /// runtime value instead.
    fn declared() -> Option<ShapeFn> {
        Some(Self::shape_of as ShapeFn)
    }
}

// ---------------------------------------------------------------------------
// Marker shapes
// ---------------------------------------------------------------------------

/// Target shape with no members: any two non-null operands satisfy it.
pub enum ObjectShape {}

impl Shaped for ObjectShape {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::interface::<Self>("object", Vec::new()))
    }
}

/// Target shape for an untyped built-in sequence.
pub enum Iterable {}

impl Shaped for Iterable {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::sequence::<Self>("iterable", None))
    }
}
