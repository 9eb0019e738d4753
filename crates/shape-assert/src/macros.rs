//! Declarative macros that give user types a [`crate::Shape`].
//!
//! Rust has no runtime member enumeration, so records, interfaces and
//! enumerations describe their public shape once through these macros. The
//! generated accessors read fields directly; nothing is stored per value.

/// Implements [`Shaped`](crate::Shaped) and [`Reflect`](crate::Reflect) for a
/// struct, exposing the listed fields as its data members.
///
/// ```
/// use shape_assert::reflect_record;
///
/// pub struct Account {
///     pub account_id: i32,
///     pub name: String,
/// }
///
/// reflect_record! {
///     Account {
///         account_id: i32,
///         name: String,
///     }
/// }
/// ```
///
/// `implements [IFoo, IBar]` records nominal interface implementation, and
/// `items field: Elem` makes the record a custom iterable over `field`.
#[macro_export]
macro_rules! reflect_record {
    (
        $name:ident
        $(implements [$($base:ty),* $(,)?])?
        items $items:ident : $elem:ty
        { $($field:ident : $fty:ty),* $(,)? }
    ) => {
        impl $crate::Shaped for $name {
            fn shape_of() -> &'static $crate::Shape {
                $crate::shape::intern::<Self>(|| {
                    $crate::Shape::iterable_record::<Self>(
                        stringify!($name),
                        <$elem as $crate::Shaped>::declared(),
                        vec![$($crate::MemberDecl::new(
                            stringify!($field),
                            <$fty as $crate::Shaped>::declared(),
                        )),*],
                    )
                    .with_bases(vec![$($(<$base as $crate::Shaped>::shape_of as $crate::ShapeFn),*)?])
                })
            }
        }

        impl $crate::Reflect for $name {
            fn runtime_shape(&self) -> &'static $crate::Shape {
                <Self as $crate::Shaped>::shape_of()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn member(&self, name: &str) -> ::std::option::Option<&dyn $crate::Reflect> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(&self.$field as &dyn $crate::Reflect);
                    }
                )*
                let _ = name;
                ::std::option::Option::None
            }

            fn items(&self) -> ::std::option::Option<::std::vec::Vec<&dyn $crate::Reflect>> {
                ::std::option::Option::Some(
                    self.$items
                        .iter()
                        .map(|item| item as &dyn $crate::Reflect)
                        .collect(),
                )
            }
        }
    };
    (
        $name:ident
        $(implements [$($base:ty),* $(,)?])?
        { $($field:ident : $fty:ty),* $(,)? }
    ) => {
        impl $crate::Shaped for $name {
            fn shape_of() -> &'static $crate::Shape {
                $crate::shape::intern::<Self>(|| {
                    $crate::Shape::record::<Self>(
                        stringify!($name),
                        vec![$($crate::MemberDecl::new(
                            stringify!($field),
                            <$fty as $crate::Shaped>::declared(),
                        )),*],
                    )
                    .with_bases(vec![$($(<$base as $crate::Shaped>::shape_of as $crate::ShapeFn),*)?])
                })
            }
        }

        impl $crate::Reflect for $name {
            fn runtime_shape(&self) -> &'static $crate::Shape {
                <Self as $crate::Shaped>::shape_of()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn member(&self, name: &str) -> ::std::option::Option<&dyn $crate::Reflect> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(&self.$field as &dyn $crate::Reflect);
                    }
                )*
                let _ = name;
                ::std::option::Option::None
            }
        }
    };
}

/// Declares an interface: an uninhabited marker type whose shape lists the
/// members a view of a record exposes.
///
/// ```
/// use shape_assert::reflect_interface;
///
/// reflect_interface! {
///     pub INamed {
///         name: String,
///     }
/// }
///
/// reflect_interface! {
///     /// An account seen through its identifier and name.
///     pub IAccount: INamed {
///         account_id: i32,
///     }
/// }
/// ```
#[macro_export]
macro_rules! reflect_interface {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident $(: $($base:ty),+)?
        { $($field:ident : $fty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        $vis enum $name {}

        impl $crate::Shaped for $name {
            fn shape_of() -> &'static $crate::Shape {
                $crate::shape::intern::<Self>(|| {
                    $crate::Shape::interface::<Self>(
                        stringify!($name),
                        vec![$($crate::MemberDecl::new(
                            stringify!($field),
                            <$fty as $crate::Shaped>::declared(),
                        )),*],
                    )
                    .with_bases(vec![$($(<$base as $crate::Shaped>::shape_of as $crate::ShapeFn),+)?])
                })
            }
        }
    };
}

/// Implements [`Shaped`](crate::Shaped) and [`Reflect`](crate::Reflect) for a
/// fieldless enum, which then compares as an atomic enumeration value.
///
/// ```
/// use shape_assert::reflect_enum;
///
/// pub enum Color {
///     Red,
///     Green,
/// }
///
/// reflect_enum! { Color { Red, Green } }
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($name:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::Shaped for $name {
            fn shape_of() -> &'static $crate::Shape {
                $crate::shape::intern::<Self>(|| {
                    $crate::Shape::scalar::<Self>(stringify!($name), $crate::ScalarKind::Enum)
                })
            }
        }

        impl $crate::Reflect for $name {
            fn runtime_shape(&self) -> &'static $crate::Shape {
                <Self as $crate::Shaped>::shape_of()
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn scalar(&self) -> ::std::option::Option<$crate::ScalarRef<'_>> {
                let variant = match self {
                    $(Self::$variant => stringify!($variant),)+
                };
                ::std::option::Option::Some($crate::ScalarRef::Enum {
                    type_name: stringify!($name),
                    variant,
                })
            }
        }
    };
}

/// Builds an [`Anon`](crate::Anon) record.
///
/// ```
/// use shape_assert::anon;
///
/// let expected = anon! { foo: 1, inner: anon! { bar: "x" } };
/// assert_eq!(expected.len(), 2);
/// ```
#[macro_export]
macro_rules! anon {
    ($($field:ident : $value:expr),* $(,)?) => {
        $crate::Anon::new(::std::vec![
            $((
                stringify!($field),
                ::std::boxed::Box::new($value) as ::std::boxed::Box<dyn $crate::Reflect>,
            )),*
        ])
    };
}

/// Builds an [`AnonList`](crate::AnonList).
///
/// ```
/// use shape_assert::anon_list;
///
/// let expected = anon_list![1, "two", 3.0];
/// assert_eq!(expected.len(), 3);
/// ```
#[macro_export]
macro_rules! anon_list {
    ($($item:expr),* $(,)?) => {
        $crate::AnonList::new(::std::vec![
            $(::std::boxed::Box::new($item) as ::std::boxed::Box<dyn $crate::Reflect>),*
        ])
    };
}

/// Asserts structural equality, panicking with the rendered failure.
///
/// `assert_is!(actual, expected)` compares against the actual's runtime shape;
/// `assert_is!(actual, expected, as T)` compares against `T`.
///
/// ```
/// use shape_assert::assert_is;
///
/// assert_is!(1_i64, 1.0_f64, as i32);
/// assert_is!(vec![1, 2], vec![1, 2]);
/// ```
#[macro_export]
macro_rules! assert_is {
    ($actual:expr, $expected:expr, as $target:ty $(,)?) => {
        if let ::std::result::Result::Err(err) =
            $crate::assert_equal_as::<$target>(&$actual, &$expected)
        {
            ::std::panic!("{err}");
        }
    };
    ($actual:expr, $expected:expr $(,)?) => {
        if let ::std::result::Result::Err(err) = $crate::assert_equal(&$actual, &$expected) {
            ::std::panic!("{err}");
        }
    };
}
