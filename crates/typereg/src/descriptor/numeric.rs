// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Numeric (primitive) descriptors.

use crate::config::UNKNOWN_NUMERIC_NAME;
use crate::registry::Primitive;

/// Primitive type kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericKind {
    Unknown,
    Char,
    Int32,
    Int64,
    Float,
    Double,
    Void,
    Bool,
}

impl NumericKind {
    /// Fixed name table entry for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Char => "Char",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Void => "Void",
            Self::Bool => "Bool",
            Self::Unknown => UNKNOWN_NUMERIC_NAME,
        }
    }
}

/// Descriptor of a primitive type.
///
/// Fully determined by the primitive it describes; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Numeric {
    kind: NumericKind,
    is_signed: bool,
}

impl Numeric {
    /// Create a numeric descriptor.
    pub fn new(kind: NumericKind, is_signed: bool) -> Self {
        Self { kind, is_signed }
    }

    /// Create the descriptor of primitive `T`.
    pub fn create<T: Primitive + ?Sized>() -> Self {
        Self::new(T::KIND, T::SIGNED)
    }

    /// Name derived from the kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn numeric_kind(&self) -> NumericKind {
        self.kind
    }

    pub fn is_signed(&self) -> bool {
        self.is_signed
    }
}
