// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Member descriptors for class types.
//!
//! Member types are resolved through the same lookup path as [`crate::get_type`],
//! so building a member lazily creates the descriptor of its type if needed.

use crate::registry::{Described, TypeRef};
use crate::signature::Signature;

/// Member variable descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberVariable {
    name: String,
    ty: TypeRef,
}

impl MemberVariable {
    /// Create a member variable descriptor.
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    /// Create a member variable whose value type is `V`.
    pub fn create<V: Described + ?Sized>(name: impl Into<String>) -> Self {
        Self::new(name, V::descriptor())
    }

    /// Create a member variable whose value type is inferred from an accessor.
    ///
    /// The accessor is never called; only its signature is inspected.
    ///
    /// ```rust
    /// use typereg::{get_type, MemberVariable};
    ///
    /// struct Point { x: f64 }
    ///
    /// let x = MemberVariable::from_accessor("x", |p: &Point| &p.x);
    /// assert_eq!(x.type_ref(), get_type::<f64>());
    /// ```
    pub fn from_accessor<C, V, F>(name: impl Into<String>, _accessor: F) -> Self
    where
        C: ?Sized,
        V: Described + ?Sized,
        F: Fn(&C) -> &V,
    {
        Self::create::<V>(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Type of the variable.
    pub fn type_ref(&self) -> TypeRef {
        self.ty
    }
}

/// Member function descriptor.
///
/// The receiver is not part of the parameter list, so free functions,
/// `&self` methods and `&mut self` methods are described the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFunction {
    name: String,
    return_type: TypeRef,
    param_types: Vec<TypeRef>,
}

impl MemberFunction {
    /// Create a member function descriptor.
    pub fn new(name: impl Into<String>, return_type: TypeRef, param_types: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            return_type,
            param_types,
        }
    }

    /// Create a member function descriptor from a function-pointer type.
    ///
    /// ```rust
    /// use typereg::{get_type, MemberFunction};
    ///
    /// let f = MemberFunction::create::<fn(i32, f64) -> bool>("check");
    /// assert_eq!(f.return_type(), get_type::<bool>());
    /// assert_eq!(f.param_types(), [get_type::<i32>(), get_type::<f64>()]);
    /// ```
    pub fn create<F: Signature>(name: impl Into<String>) -> Self {
        Self::new(name, F::return_type(), F::param_types())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return type (`Void` for functions returning `()`).
    pub fn return_type(&self) -> TypeRef {
        self.return_type
    }

    /// Parameter types in declaration order.
    pub fn param_types(&self) -> &[TypeRef] {
        &self.param_types
    }

    pub fn arity(&self) -> usize {
        self.param_types.len()
    }
}
