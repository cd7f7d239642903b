// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Function signature decomposition.
//!
//! A [`Signature`] splits a function-pointer type into an ordered parameter
//! list and a return type, each resolved to its registry descriptor. The
//! receiver of a method is not part of the signature, and references are
//! written as their referent type since both resolve to the same
//! descriptor:
//!
//! | Rust item | Signature type |
//! |-----------|----------------|
//! | `fn introduce(&self)` | `fn()` |
//! | `fn is_female(&self) -> bool` | `fn() -> bool` |
//! | `fn get_married(&mut self, other: &mut Person) -> bool` | `fn(Person) -> bool` |
//! | `fn distance(a: Point, b: Point) -> f64` | `fn(Point, Point) -> f64` |
//!
//! Supported arities: 0 to 6 parameters.
//!
//! Reference parameters in the signature type itself are higher-ranked
//! (`for<'a> fn(&'a Person)`) and are not supported:
//!
//! ```compile_fail
//! use typereg::{reflect_class, MemberFunction};
//!
//! struct Person;
//! reflect_class!(Person);
//!
//! MemberFunction::create::<fn(&Person) -> bool>("get_married");
//! ```
//!
//! ```rust
//! use typereg::{reflect_class, MemberFunction};
//!
//! struct Person;
//! reflect_class!(Person);
//!
//! let f = MemberFunction::create::<fn(Person) -> bool>("get_married");
//! assert_eq!(f.arity(), 1);
//! ```

use crate::registry::{Described, TypeRef};

/// A function-pointer type whose parameter and return types are reflected.
pub trait Signature {
    /// Return type descriptor (`Void` for `()`).
    fn return_type() -> TypeRef;

    /// Parameter type descriptors in declaration order.
    fn param_types() -> Vec<TypeRef>;
}

macro_rules! impl_signature {
    ($($arg:ident),*) => {
        impl<R, $($arg),*> Signature for fn($($arg),*) -> R
        where
            R: Described,
            $($arg: Described,)*
        {
            fn return_type() -> TypeRef {
                R::descriptor()
            }

            fn param_types() -> Vec<TypeRef> {
                vec![$($arg::descriptor()),*]
            }
        }
    };
}

impl_signature!();
impl_signature!(A1);
impl_signature!(A1, A2);
impl_signature!(A1, A2, A3);
impl_signature!(A1, A2, A3, A4);
impl_signature!(A1, A2, A3, A4, A5);
impl_signature!(A1, A2, A3, A4, A5, A6);
