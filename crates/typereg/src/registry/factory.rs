// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Per-category factories: fluent builder handles over registry slots.
//!
//! Every factory is a `Copy` handle to the one slot of its type, so
//! `instance()` is idempotent and builder calls can be chained:
//!
//! ```rust
//! use typereg::{reflect_enum, EnumFactory};
//!
//! enum Color { Red, Green }
//! reflect_enum!(Color);
//!
//! EnumFactory::<Color>::instance()
//!     .regist("Color")
//!     .add("Red", Color::Red as i64)
//!     .add("Green", Color::Green as i64);
//! ```

use super::{table, Described, Primitive, Reflect, TypeRef};
use crate::descriptor::{Class, Enum, Kind, MemberFunction, MemberVariable, Numeric, Type};
use crate::error::{Error, Result};
use crate::signature::Signature;
use std::marker::PhantomData;

/// A category registry for one Rust type.
pub trait Registry: Copy {
    /// The registry of this type, created on first call.
    fn instance() -> Self;

    /// The owned descriptor, `None` for [`TrivialFactory`].
    fn descriptor(&self) -> Option<TypeRef>;
}

/// A registry that always owns a descriptor.
pub trait Describes: Registry {
    fn type_ref(&self) -> TypeRef;
}

/// Registry of a primitive type. The descriptor is fixed at creation.
pub struct NumericFactory<T: ?Sized> {
    slot: TypeRef,
    _ty: PhantomData<fn() -> *const T>,
}

impl<T: ?Sized> Clone for NumericFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NumericFactory<T> {}

impl<T> NumericFactory<T>
where
    T: Primitive + Reflect<Registrar = NumericFactory<T>> + ?Sized,
{
    pub fn instance() -> Self {
        let slot =
            table(Kind::Numeric).get_or_create::<T>(|| Type::Numeric(Numeric::create::<T>()));
        Self {
            slot,
            _ty: PhantomData,
        }
    }

    pub fn info(&self) -> TypeRef {
        self.slot
    }
}

impl<T> Registry for NumericFactory<T>
where
    T: Primitive + Reflect<Registrar = NumericFactory<T>> + ?Sized,
{
    fn instance() -> Self {
        NumericFactory::instance()
    }

    fn descriptor(&self) -> Option<TypeRef> {
        Some(self.slot)
    }
}

impl<T> Describes for NumericFactory<T>
where
    T: Primitive + Reflect<Registrar = NumericFactory<T>> + ?Sized,
{
    fn type_ref(&self) -> TypeRef {
        self.slot
    }
}

/// Registry of an enumeration.
///
/// Only available for types whose [`Reflect`] impl routes here, so a type
/// never owns descriptors in two categories:
///
/// ```compile_fail
/// use typereg::EnumFactory;
///
/// // f64 is numeric
/// EnumFactory::<f64>::instance().regist("NotADouble");
/// ```
pub struct EnumFactory<T: ?Sized> {
    slot: TypeRef,
    _ty: PhantomData<fn() -> *const T>,
}

impl<T: ?Sized> Clone for EnumFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for EnumFactory<T> {}

impl<T> EnumFactory<T>
where
    T: Reflect<Registrar = EnumFactory<T>> + ?Sized + 'static,
{
    pub fn instance() -> Self {
        let slot = table(Kind::Enum).get_or_create::<T>(|| Type::Enum(Enum::default()));
        Self {
            slot,
            _ty: PhantomData,
        }
    }

    pub fn info(&self) -> TypeRef {
        self.slot
    }

    /// Register the enum under `name`.
    ///
    /// Registering again replaces the descriptor: the previous items are
    /// dropped and a warning is logged. Items added before the first
    /// registration are kept.
    pub fn regist(self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(mut info) = self.slot.write_enum() {
            if info.is_registered() {
                log::warn!(
                    "[EnumFactory] Replacing '{}' ({} items) with '{}' for {}",
                    info.name(),
                    info.items().len(),
                    name,
                    self.slot.rust_name()
                );
                *info = Enum::new(name);
            } else {
                log::debug!(
                    "[EnumFactory] Registered {} as '{}'",
                    self.slot.rust_name(),
                    name
                );
                info.rename(name);
            }
        }
        self
    }

    /// Register the enum under `name`, failing if it is already registered.
    pub fn try_regist(self, name: impl Into<String>) -> Result<Self> {
        if let Some(mut info) = self.slot.write_enum() {
            if info.is_registered() {
                return Err(Error::AlreadyRegistered {
                    name: info.name().to_string(),
                    rust_type: self.slot.rust_name(),
                });
            }
            let name = name.into();
            log::debug!(
                "[EnumFactory] Registered {} as '{}'",
                self.slot.rust_name(),
                name
            );
            info.rename(name);
        }
        Ok(self)
    }

    /// Append an item.
    pub fn add(self, name: impl Into<String>, value: impl Into<i64>) -> Self {
        if let Some(mut info) = self.slot.write_enum() {
            let name = name.into();
            let value = value.into();
            log::debug!("[EnumFactory] {}: add {} = {}", info.name(), name, value);
            info.add(name, value);
        }
        self
    }

    /// Reset to the unregistered placeholder.
    pub fn unregist(self) -> Self {
        if let Some(mut info) = self.slot.write_enum() {
            log::debug!("[EnumFactory] Unregistered '{}'", info.name());
            *info = Enum::default();
        }
        self
    }
}

impl<T> Registry for EnumFactory<T>
where
    T: Reflect<Registrar = EnumFactory<T>> + ?Sized + 'static,
{
    fn instance() -> Self {
        EnumFactory::instance()
    }

    fn descriptor(&self) -> Option<TypeRef> {
        Some(self.slot)
    }
}

impl<T> Describes for EnumFactory<T>
where
    T: Reflect<Registrar = EnumFactory<T>> + ?Sized + 'static,
{
    fn type_ref(&self) -> TypeRef {
        self.slot
    }
}

/// Registry of a class (record) type.
///
/// Only available for types whose [`Reflect`] impl routes here.
///
/// ```compile_fail
/// use typereg::{reflect_enum, ClassFactory};
///
/// enum Color { Red }
/// reflect_enum!(Color);
///
/// ClassFactory::<Color>::instance();
/// ```
pub struct ClassFactory<T: ?Sized> {
    slot: TypeRef,
    _ty: PhantomData<fn() -> *const T>,
}

impl<T: ?Sized> Clone for ClassFactory<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ClassFactory<T> {}

impl<T> ClassFactory<T>
where
    T: Reflect<Registrar = ClassFactory<T>> + ?Sized + 'static,
{
    pub fn instance() -> Self {
        let slot = table(Kind::Class).get_or_create::<T>(|| Type::Class(Class::default()));
        Self {
            slot,
            _ty: PhantomData,
        }
    }

    pub fn info(&self) -> TypeRef {
        self.slot
    }

    /// Register the class under `name`.
    ///
    /// Registering again replaces the descriptor: the previous members are
    /// dropped and a warning is logged. Members added before the first
    /// registration are kept.
    pub fn regist(self, name: impl Into<String>) -> Self {
        let name = name.into();
        if let Some(mut info) = self.slot.write_class() {
            if info.is_registered() {
                log::warn!(
                    "[ClassFactory] Replacing '{}' ({} variables, {} functions) with '{}' for {}",
                    info.name(),
                    info.variables().len(),
                    info.functions().len(),
                    name,
                    self.slot.rust_name()
                );
                *info = Class::new(name);
            } else {
                log::debug!(
                    "[ClassFactory] Registered {} as '{}'",
                    self.slot.rust_name(),
                    name
                );
                info.rename(name);
            }
        }
        self
    }

    /// Register the class under `name`, failing if it is already registered.
    pub fn try_regist(self, name: impl Into<String>) -> Result<Self> {
        if let Some(mut info) = self.slot.write_class() {
            if info.is_registered() {
                return Err(Error::AlreadyRegistered {
                    name: info.name().to_string(),
                    rust_type: self.slot.rust_name(),
                });
            }
            let name = name.into();
            log::debug!(
                "[ClassFactory] Registered {} as '{}'",
                self.slot.rust_name(),
                name
            );
            info.rename(name);
        }
        Ok(self)
    }

    /// Append a member variable of type `V`.
    pub fn add_variable<V: Described + ?Sized>(self, name: impl Into<String>) -> Self {
        self.push_variable(MemberVariable::create::<V>(name))
    }

    /// Append a member variable whose type is inferred from an accessor.
    ///
    /// ```rust
    /// use typereg::{reflect_class, registrar};
    ///
    /// struct Point { x: f64, y: f64 }
    /// reflect_class!(Point);
    ///
    /// registrar::<Point>()
    ///     .regist("Point")
    ///     .add_field("x", |p| &p.x)
    ///     .add_field("y", |p| &p.y);
    /// ```
    pub fn add_field<V, F>(self, name: impl Into<String>, accessor: F) -> Self
    where
        V: Described + ?Sized,
        F: Fn(&T) -> &V,
    {
        self.push_variable(MemberVariable::from_accessor(name, accessor))
    }

    /// Append a member function with signature `F`.
    ///
    /// `F` is a function-pointer type without the receiver, e.g.
    /// `fn(Person) -> bool` for `fn get_married(&mut self, other: &mut Person) -> bool`.
    pub fn add_function<F: Signature>(self, name: impl Into<String>) -> Self {
        self.push_function(MemberFunction::create::<F>(name))
    }

    /// Reset to the unregistered placeholder, dropping every member.
    pub fn unregist(self) -> Self {
        if let Some(mut info) = self.slot.write_class() {
            log::debug!("[ClassFactory] Unregistered '{}'", info.name());
            *info = Class::default();
        }
        self
    }

    fn push_variable(self, variable: MemberVariable) -> Self {
        if let Some(mut info) = self.slot.write_class() {
            log::debug!(
                "[ClassFactory] {}: add variable {}",
                info.name(),
                variable.name()
            );
            info.add_variable(variable);
        }
        self
    }

    fn push_function(self, function: MemberFunction) -> Self {
        if let Some(mut info) = self.slot.write_class() {
            log::debug!(
                "[ClassFactory] {}: add function {}/{}",
                info.name(),
                function.name(),
                function.arity()
            );
            info.add_function(function);
        }
        self
    }
}

impl<T> Registry for ClassFactory<T>
where
    T: Reflect<Registrar = ClassFactory<T>> + ?Sized + 'static,
{
    fn instance() -> Self {
        ClassFactory::instance()
    }

    fn descriptor(&self) -> Option<TypeRef> {
        Some(self.slot)
    }
}

impl<T> Describes for ClassFactory<T>
where
    T: Reflect<Registrar = ClassFactory<T>> + ?Sized + 'static,
{
    fn type_ref(&self) -> TypeRef {
        self.slot
    }
}

/// Inert registry for types outside every category (raw pointers,
/// function pointers). Holds no descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrivialFactory;

impl TrivialFactory {
    pub fn instance() -> Self {
        TrivialFactory
    }
}

impl Registry for TrivialFactory {
    fn instance() -> Self {
        TrivialFactory
    }

    fn descriptor(&self) -> Option<TypeRef> {
        None
    }
}
