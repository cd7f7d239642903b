// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type descriptors for runtime type information.
//!
//! A descriptor records the *shape* of a Rust type, never its values:
//!
//! - **Numeric**: one of the fixed primitive kinds plus signedness
//! - **Enum**: ordered `(name, value)` items
//! - **Class**: ordered member variables and member functions whose types
//!   are [`TypeRef`] handles into the global registry
//!
//! [`Type`] is the uniform handle over the three variants. Its [`Kind`] is
//! derived from the variant itself, so the tag always matches the payload
//! and the `as_*` accessors are the only way to reach variant data.

mod class;
mod enumeration;
mod format;
mod member;
mod numeric;

pub use class::Class;
pub use enumeration::{Enum, EnumItem};
pub use member::{MemberFunction, MemberVariable};
pub use numeric::{Numeric, NumericKind};

#[cfg(doc)]
use crate::TypeRef;

/// Discriminator of the three descriptor variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Numeric,
    Enum,
    Class,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Numeric => write!(f, "numeric"),
            Kind::Enum => write!(f, "enum"),
            Kind::Class => write!(f, "class"),
        }
    }
}

/// A type descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Primitive numeric type.
    Numeric(Numeric),
    /// Enumeration with named values.
    Enum(Enum),
    /// Record with member variables and member functions.
    Class(Class),
}

impl Type {
    /// Get the descriptor name.
    pub fn name(&self) -> &str {
        match self {
            Type::Numeric(n) => n.name(),
            Type::Enum(e) => e.name(),
            Type::Class(c) => c.name(),
        }
    }

    /// Get the kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Type::Numeric(_) => Kind::Numeric,
            Type::Enum(_) => Kind::Enum,
            Type::Class(_) => Kind::Class,
        }
    }

    /// Get the numeric view, if this is a numeric descriptor.
    pub fn as_numeric(&self) -> Option<&Numeric> {
        match self {
            Type::Numeric(n) => Some(n),
            _ => None,
        }
    }

    /// Get the enum view, if this is an enum descriptor.
    pub fn as_enum(&self) -> Option<&Enum> {
        match self {
            Type::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Get the class view, if this is a class descriptor.
    pub fn as_class(&self) -> Option<&Class> {
        match self {
            Type::Class(c) => Some(c),
            _ => None,
        }
    }

    pub(crate) fn as_enum_mut(&mut self) -> Option<&mut Enum> {
        match self {
            Type::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub(crate) fn as_class_mut(&mut self) -> Option<&mut Class> {
        match self {
            Type::Class(c) => Some(c),
            _ => None,
        }
    }
}
