// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! # typereg - Runtime Type Metadata Registry
//!
//! A process-wide registry of type descriptors: primitive numeric kinds,
//! enumerations (name/value items) and classes (member variables and member
//! functions with resolved parameter/return types), all reachable through
//! one uniform, safely-downcastable handle.
//!
//! ## Quick Start
//!
//! ```rust
//! use typereg::{get_type, reflect_class, reflect_enum, registrar, Kind};
//!
//! enum Mood { Happy, Grumpy }
//! struct Person { name: String, height: f32, mood: Mood }
//! reflect_enum!(Mood);
//! reflect_class!(Person);
//!
//! // Initialization: build descriptors once
//! registrar::<Mood>()
//!     .regist("Mood")
//!     .add("Happy", Mood::Happy as i64)
//!     .add("Grumpy", Mood::Grumpy as i64);
//!
//! registrar::<Person>()
//!     .regist("Person")
//!     .add_field("height", |p| &p.height)
//!     .add_variable::<Mood>("mood")
//!     .add_function::<fn(Person) -> bool>("get_married");
//!
//! // Anywhere later: the same descriptor, shared
//! let person = get_type::<Person>();
//! assert_eq!(person, get_type::<&Person>());
//! assert_eq!(person.kind(), Kind::Class);
//!
//! let class = person.as_class().expect("class descriptor");
//! assert_eq!(class.variables()[1].type_ref(), get_type::<Mood>());
//! assert!(person.as_enum().is_none());
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +---------------------------------------------------------------------+
//! |                      Lookup / Build API                             |
//! |   registrar::<T>()  get_type::<T>()  lookup::<T>()                  |
//! +---------------------------------------------------------------------+
//! |                      Category Dispatch                              |
//! |   Reflect::Registrar  (Numeric | Enum | Class | Trivial)            |
//! +---------------------------------------------------------------------+
//! |                      Category Registries                            |
//! |   NumericFactory<T> | EnumFactory<T> | ClassFactory<T> | Trivial    |
//! +---------------------------------------------------------------------+
//! |                      Descriptor Model                               |
//! |   Type = Numeric | Enum | Class    (TypeRef handles, RwLock slots)  |
//! +---------------------------------------------------------------------+
//! ```
//!
//! ## Lifecycle
//!
//! Descriptors are created on first reference, mutated only through
//! factory calls, and live until process exit. Register a type fully before
//! other threads start reading it; single builder calls are atomic, chains
//! of calls are not.
//!
//! ## Modules Overview
//!
//! - [`descriptor`] - Descriptor data model
//! - [`registry`] - Slots, factories, category dispatch, introspection
//! - [`signature`] - Function signature decomposition
//! - [`config`] - Fixed names and sizing

/// Fixed names and sizing (placeholder names, table shards).
pub mod config;
/// Descriptor data model (Type, Numeric, Enum, Class, members).
pub mod descriptor;
mod error;
/// Process-wide registry: slots, factories, category dispatch.
pub mod registry;
/// Function signature decomposition for member functions.
pub mod signature;

pub use descriptor::{
    Class, Enum, EnumItem, Kind, MemberFunction, MemberVariable, Numeric, NumericKind, Type,
};
pub use error::{Error, Result};
pub use registry::{
    ClassFactory, Described, Describes, EnumFactory, NumericFactory, Primitive, Reflect, Registry,
    TrivialFactory, TypeRef,
};
pub use signature::Signature;

/// Get the builder handle of `T`'s category registry.
pub fn registrar<T: Reflect + ?Sized>() -> T::Registrar {
    <T::Registrar as Registry>::instance()
}

/// Get the canonical descriptor of `T`.
///
/// Unregistered enums and classes yield their placeholder descriptor.
/// Types without a descriptor (raw and smart pointers, function pointers)
/// do not compile here; use [`lookup`] for those.
pub fn get_type<T: Described + ?Sized>() -> TypeRef {
    T::descriptor()
}

/// Get the descriptor of `T`, or `None` if its category has none.
///
/// ```rust
/// assert!(typereg::lookup::<*const u8>().is_none());
/// assert_eq!(typereg::lookup::<u8>(), Some(typereg::get_type::<u8>()));
/// ```
pub fn lookup<T: Reflect + ?Sized>() -> Option<TypeRef> {
    registrar::<T>().descriptor()
}

/// typereg version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
