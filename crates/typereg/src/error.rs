// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Errors returned by registry operations.
//!
//! Lookups never fail: an unregistered enum or class yields its placeholder
//! descriptor. Errors only come from the strict builder calls and from
//! name-based searches.

/// Errors returned by typereg operations.
///
/// # Example
///
/// ```rust
/// use typereg::{reflect_enum, registrar, Error};
///
/// enum Mode { Fast }
/// reflect_enum!(Mode);
///
/// registrar::<Mode>().regist("Mode").add("Fast", 0);
///
/// match registrar::<Mode>().try_regist("Mode2") {
///     Err(Error::AlreadyRegistered { name, .. }) => assert_eq!(name, "Mode"),
///     other => panic!("unexpected: {:?}", other.map(|_| ())),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `try_regist` was called on a descriptor that is already registered.
    AlreadyRegistered {
        /// Name the descriptor is currently registered under.
        name: String,
        /// Rust type the descriptor belongs to.
        rust_type: &'static str,
    },
    /// No descriptor carries the requested name.
    UnknownType(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AlreadyRegistered { name, rust_type } => {
                write!(f, "Type already registered as '{}' ({})", name, rust_type)
            }
            Error::UnknownType(name) => write!(f, "Unknown type: {}", name),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for typereg operations.
pub type Result<T> = std::result::Result<T, Error>;
