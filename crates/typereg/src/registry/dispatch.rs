// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Category dispatch: which registry owns the descriptor of a type.
//!
//! | Rust type | Registrar |
//! |-----------|-----------|
//! | `bool`, `char`, integers, floats, `()` | [`NumericFactory`] |
//! | types named in [`reflect_enum!`](crate::reflect_enum) | [`EnumFactory`] |
//! | types named in [`reflect_class!`](crate::reflect_class) | [`ClassFactory`] |
//! | `String`, `str`, `Vec`, `VecDeque`, `Option`, `Result` | [`ClassFactory`] |
//! | sets, maps, arrays, slices, tuples | [`ClassFactory`] |
//! | `&T`, `&mut T` | same as `T` |
//! | `*const T`, `*mut T`, `Box<T>`, `Rc<T>`, `Arc<T>`, `fn(..) -> R` | [`TrivialFactory`] |
//!
//! Each std container instantiation is its own class: `Vec<u8>` and
//! `Vec<String>` have distinct descriptors, named `Unknown-Class` until
//! registered.
//!
//! Trait coherence makes the mapping total over reflected types and stable:
//! a type has at most one `Reflect` impl.

use super::{ClassFactory, Describes, NumericFactory, Registry, TrivialFactory, TypeRef};
use crate::descriptor::NumericKind;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

#[cfg(doc)]
use super::EnumFactory;

/// Routes a type to its category registry.
pub trait Reflect {
    type Registrar: Registry;
}

/// A primitive type described by a numeric descriptor.
pub trait Primitive: 'static {
    const KIND: NumericKind;
    const SIGNED: bool;
}

/// A reflected type that always has a descriptor.
///
/// Implemented for every [`Reflect`] type whose registrar is not
/// [`TrivialFactory`].
pub trait Described {
    fn descriptor() -> TypeRef;
}

impl<T: Reflect + ?Sized> Described for T
where
    T::Registrar: Describes,
{
    fn descriptor() -> TypeRef {
        <T::Registrar as Registry>::instance().type_ref()
    }
}

macro_rules! impl_primitive {
    ($($ty:ty => $kind:ident, $signed:expr;)*) => {
        $(
            impl Primitive for $ty {
                const KIND: NumericKind = NumericKind::$kind;
                const SIGNED: bool = $signed;
            }

            impl Reflect for $ty {
                type Registrar = NumericFactory<$ty>;
            }
        )*
    };
}

impl_primitive! {
    char => Char, false;
    i8 => Char, true;
    u8 => Char, false;
    i16 => Unknown, true;
    u16 => Unknown, false;
    i32 => Int32, true;
    u32 => Int32, false;
    i64 => Int64, true;
    u64 => Int64, false;
    i128 => Unknown, true;
    u128 => Unknown, false;
    f32 => Float, true;
    f64 => Double, true;
    bool => Bool, false;
    () => Void, false;
}

#[cfg(target_pointer_width = "64")]
impl_primitive! {
    isize => Int64, true;
    usize => Int64, false;
}

#[cfg(not(target_pointer_width = "64"))]
impl_primitive! {
    isize => Int32, true;
    usize => Int32, false;
}

impl Reflect for String {
    type Registrar = ClassFactory<String>;
}

impl Reflect for str {
    type Registrar = ClassFactory<str>;
}

macro_rules! impl_std_class {
    ($(<$($param:ident),+> $ty:ty;)*) => {
        $(
            impl<$($param: 'static),+> Reflect for $ty {
                type Registrar = ClassFactory<$ty>;
            }
        )*
    };
}

impl_std_class! {
    <T> Vec<T>;
    <T> VecDeque<T>;
    <T> Option<T>;
    <T, E> Result<T, E>;
    <T, S> HashSet<T, S>;
    <T> BTreeSet<T>;
    <K, V, S> HashMap<K, V, S>;
    <K, V> BTreeMap<K, V>;
    <T> [T];
    <A1> (A1,);
    <A1, A2> (A1, A2);
    <A1, A2, A3> (A1, A2, A3);
    <A1, A2, A3, A4> (A1, A2, A3, A4);
    <A1, A2, A3, A4, A5> (A1, A2, A3, A4, A5);
    <A1, A2, A3, A4, A5, A6> (A1, A2, A3, A4, A5, A6);
}

impl<T: 'static, const N: usize> Reflect for [T; N] {
    type Registrar = ClassFactory<[T; N]>;
}

impl<T: Reflect + ?Sized> Reflect for &T {
    type Registrar = T::Registrar;
}

impl<T: Reflect + ?Sized> Reflect for &mut T {
    type Registrar = T::Registrar;
}

impl<T: ?Sized> Reflect for *const T {
    type Registrar = TrivialFactory;
}

impl<T: ?Sized> Reflect for *mut T {
    type Registrar = TrivialFactory;
}

impl<T: ?Sized> Reflect for Box<T> {
    type Registrar = TrivialFactory;
}

impl<T: ?Sized> Reflect for Rc<T> {
    type Registrar = TrivialFactory;
}

impl<T: ?Sized> Reflect for Arc<T> {
    type Registrar = TrivialFactory;
}

macro_rules! impl_trivial_fn {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Reflect for fn($($arg),*) -> R {
            type Registrar = TrivialFactory;
        }
    };
}

impl_trivial_fn!();
impl_trivial_fn!(A1);
impl_trivial_fn!(A1, A2);
impl_trivial_fn!(A1, A2, A3);
impl_trivial_fn!(A1, A2, A3, A4);
impl_trivial_fn!(A1, A2, A3, A4, A5);
impl_trivial_fn!(A1, A2, A3, A4, A5, A6);

/// Reflect enumerations: their descriptors live in an [`EnumFactory`].
///
/// ```rust
/// use typereg::{get_type, reflect_enum, Kind};
///
/// enum Color { Red, Green }
/// enum Shape { Circle }
/// reflect_enum!(Color, Shape);
///
/// assert_eq!(get_type::<Color>().kind(), Kind::Enum);
/// ```
#[macro_export]
macro_rules! reflect_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                type Registrar = $crate::EnumFactory<$ty>;
            }
        )+
    };
}

/// Reflect classes (records): their descriptors live in a [`ClassFactory`].
///
/// ```rust
/// use typereg::{get_type, reflect_class, Kind};
///
/// struct Point { x: f64, y: f64 }
/// reflect_class!(Point);
///
/// assert_eq!(get_type::<Point>().kind(), Kind::Class);
/// assert_eq!(get_type::<Point>().name(), "Unknown-Class");
/// ```
#[macro_export]
macro_rules! reflect_class {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                type Registrar = $crate::ClassFactory<$ty>;
            }
        )+
    };
}
