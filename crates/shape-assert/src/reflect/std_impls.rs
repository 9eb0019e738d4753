//! [`Reflect`] and [`Shaped`] for standard library types.

use std::any::Any;
use std::cell::OnceCell;
use std::collections::{BTreeSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use super::{Reflect, ScalarRef};
use crate::numeric::CanonicalNumeric;
use crate::shape::{MemberDecl, NumericKind, ScalarKind, Shape, ShapeFn, Shaped, intern};

// ---------------------------------------------------------------------------
// Numerics
// ---------------------------------------------------------------------------

macro_rules! impl_numeric {
    ($($ty:ty => $kind:ident, $canonical:expr);* $(;)?) => {
        $(
            impl Shaped for $ty {
                fn shape_of() -> &'static Shape {
                    intern::<Self>(|| Shape::numeric::<Self>(stringify!($ty), NumericKind::$kind))
                }
            }

            impl Reflect for $ty {
                fn runtime_shape(&self) -> &'static Shape {
                    Self::shape_of()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn canonical_number(&self) -> Option<CanonicalNumeric> {
                    let canonical: fn($ty) -> CanonicalNumeric = $canonical;
                    Some(canonical(*self))
                }
            }
        )*
    };
}

impl_numeric! {
    i8 => I8, CanonicalNumeric::from_integer;
    i16 => I16, CanonicalNumeric::from_integer;
    i32 => I32, CanonicalNumeric::from_integer;
    i64 => I64, CanonicalNumeric::from_integer;
    i128 => I128, CanonicalNumeric::from_integer;
    isize => Isize, CanonicalNumeric::from_integer;
    u8 => U8, CanonicalNumeric::from_integer;
    u16 => U16, CanonicalNumeric::from_integer;
    u32 => U32, CanonicalNumeric::from_integer;
    u64 => U64, CanonicalNumeric::from_integer;
    u128 => U128, CanonicalNumeric::from_integer;
    usize => Usize, CanonicalNumeric::from_integer;
    f32 => F32, CanonicalNumeric::from_f32;
    f64 => F64, CanonicalNumeric::from_f64;
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

macro_rules! impl_scalar {
    ($($ty:ty => $name:literal, $kind:ident, |$v:ident| $scalar:expr);* $(;)?) => {
        $(
            impl Shaped for $ty {
                fn shape_of() -> &'static Shape {
                    intern::<Self>(|| Shape::scalar::<Self>($name, ScalarKind::$kind))
                }
            }

            impl Reflect for $ty {
                fn runtime_shape(&self) -> &'static Shape {
                    Self::shape_of()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn scalar(&self) -> Option<ScalarRef<'_>> {
                    let $v = self;
                    Some($scalar)
                }
            }
        )*
    };
}

pub(super) use impl_scalar;

impl_scalar! {
    bool => "bool", Bool, |v| ScalarRef::Bool(*v);
    char => "char", Char, |v| ScalarRef::Char(*v);
    String => "String", Text, |v| ScalarRef::Text(v.as_str());
    Duration => "Duration", Duration, |v| ScalarRef::Duration(*v);
}

/// String literals share `String`'s shape, so either satisfies a text target.
impl Shaped for &'static str {
    fn shape_of() -> &'static Shape {
        String::shape_of()
    }
}

impl Reflect for &'static str {
    fn runtime_shape(&self) -> &'static Shape {
        String::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn scalar(&self) -> Option<ScalarRef<'_>> {
        Some(ScalarRef::Text(self))
    }
}

impl Shaped for &'static Shape {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| Shape::scalar::<Self>("type", ScalarKind::TypeRef))
    }
}

impl Reflect for &'static Shape {
    fn runtime_shape(&self) -> &'static Shape {
        <Self as Shaped>::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn scalar(&self) -> Option<ScalarRef<'_>> {
        Some(ScalarRef::TypeRef(self))
    }
}

// ---------------------------------------------------------------------------
// Smart pointers
// ---------------------------------------------------------------------------

macro_rules! impl_pointer {
    ($($ptr:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
                fn runtime_shape(&self) -> &'static Shape {
                    (**self).runtime_shape()
                }

                fn as_any(&self) -> &dyn Any {
                    (**self).as_any()
                }

                fn is_null(&self) -> bool {
                    (**self).is_null()
                }

                fn member(&self, name: &str) -> Option<&dyn Reflect> {
                    (**self).member(name)
                }

                fn member_names(&self) -> Vec<&str> {
                    (**self).member_names()
                }

                fn items(&self) -> Option<Vec<&dyn Reflect>> {
                    (**self).items()
                }

                fn canonical_number(&self) -> Option<CanonicalNumeric> {
                    (**self).canonical_number()
                }

                fn scalar(&self) -> Option<ScalarRef<'_>> {
                    (**self).scalar()
                }
            }

            impl<T: Shaped> Shaped for $ptr<T> {
                fn shape_of() -> &'static Shape {
                    T::shape_of()
                }

                fn declared() -> Option<ShapeFn> {
                    T::declared()
                }
            }
        )*
    };
}

impl_pointer!(Box, Rc, Arc);

// ---------------------------------------------------------------------------
// Optional wrappers
// ---------------------------------------------------------------------------

macro_rules! impl_optional {
    ($($ty:ident => $get:ident),*) => {
        $(
            impl<T: Reflect + Shaped> Reflect for $ty<T> {
                fn runtime_shape(&self) -> &'static Shape {
                    match self.$get() {
                        Some(value) => value.runtime_shape(),
                        None => <Option<T> as Shaped>::shape_of(),
                    }
                }

                fn as_any(&self) -> &dyn Any {
                    match self.$get() {
                        Some(value) => value.as_any(),
                        None => self,
                    }
                }

                fn is_null(&self) -> bool {
                    self.$get().is_none_or(|value| value.is_null())
                }

                fn member(&self, name: &str) -> Option<&dyn Reflect> {
                    self.$get().and_then(|value| value.member(name))
                }

                fn member_names(&self) -> Vec<&str> {
                    self.$get().map_or_else(Vec::new, |value| value.member_names())
                }

                fn items(&self) -> Option<Vec<&dyn Reflect>> {
                    self.$get().and_then(|value| value.items())
                }

                fn canonical_number(&self) -> Option<CanonicalNumeric> {
                    self.$get().and_then(|value| value.canonical_number())
                }

                fn scalar(&self) -> Option<ScalarRef<'_>> {
                    self.$get().and_then(|value| value.scalar())
                }
            }
        )*
    };
}

impl_optional!(Option => as_ref, OnceCell => get);

impl<T: Shaped> Shaped for Option<T> {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| {
            Shape::optional::<Self>(format!("Option<{}>", T::shape_of().name()), T::shape_of)
        })
    }

    fn declared() -> Option<ShapeFn> {
        T::declared().map(|_| Self::shape_of as ShapeFn)
    }
}

impl<T: Shaped> Shaped for OnceCell<T> {
    fn shape_of() -> &'static Shape {
        <Option<T> as Shaped>::shape_of()
    }

    fn declared() -> Option<ShapeFn> {
        <Option<T> as Shaped>::declared()
    }
}

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

macro_rules! impl_sequence {
    ($($ty:ident => $label:literal),*) => {
        $(
            impl<T: Reflect + Shaped> Reflect for $ty<T> {
                fn runtime_shape(&self) -> &'static Shape {
                    <Self as Shaped>::shape_of()
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn items(&self) -> Option<Vec<&dyn Reflect>> {
                    Some(self.iter().map(|item| item as &dyn Reflect).collect())
                }
            }

            impl<T: Shaped> Shaped for $ty<T> {
                fn shape_of() -> &'static Shape {
                    intern::<Self>(|| {
                        Shape::sequence::<Self>(
                            format!(concat!($label, "<{}>"), T::shape_of().name()),
                            T::declared(),
                        )
                    })
                }
            }
        )*
    };
}

impl_sequence!(Vec => "Vec", VecDeque => "VecDeque", BTreeSet => "BTreeSet");

impl<T: Reflect + Shaped, const N: usize> Reflect for [T; N] {
    fn runtime_shape(&self) -> &'static Shape {
        <Self as Shaped>::shape_of()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn items(&self) -> Option<Vec<&dyn Reflect>> {
        Some(self.iter().map(|item| item as &dyn Reflect).collect())
    }
}

impl<T: Shaped, const N: usize> Shaped for [T; N] {
    fn shape_of() -> &'static Shape {
        intern::<Self>(|| {
            Shape::sequence::<Self>(format!("[{}; {N}]", T::shape_of().name()), T::declared())
        })
    }
}

// ---------------------------------------------------------------------------
// Tuples
// ---------------------------------------------------------------------------

macro_rules! impl_tuple {
    ($($idx:tt : $param:ident),+) => {
        impl<$($param: Reflect + Shaped),+> Reflect for ($($param,)+) {
            fn runtime_shape(&self) -> &'static Shape {
                <Self as Shaped>::shape_of()
            }

            fn as_any(&self) -> &dyn Any {
                self
            }

            fn member(&self, name: &str) -> Option<&dyn Reflect> {
                $(
                    if name == stringify!($idx) {
                        return Some(&self.$idx as &dyn Reflect);
                    }
                )+
                None
            }
        }

        impl<$($param: Shaped),+> Shaped for ($($param,)+) {
            fn shape_of() -> &'static Shape {
                intern::<Self>(|| {
                    let names: Vec<String> = vec![$($param::shape_of().name().to_owned()),+];
                    Shape::record::<Self>(
                        format!("({})", names.join(", ")),
                        vec![$(MemberDecl::new(stringify!($idx), $param::declared())),+],
                    )
                })
            }
        }
    };
}

impl_tuple!(0: A, 1: B);
impl_tuple!(0: A, 1: B, 2: C);
