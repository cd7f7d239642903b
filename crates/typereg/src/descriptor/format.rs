// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Human-readable rendering of descriptors for logs and debugging.
//!
//! ```text
//! Int32
//! enum Color { Red = 0, Green = 1 }
//! class Person { Float height; Bool get_married(Person); }
//! ```

use super::{Class, Enum, MemberFunction, Type};
use std::fmt;

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Numeric(n) => f.write_str(n.name()),
            Type::Enum(e) => fmt_enum(e, f),
            Type::Class(c) => fmt_class(c, f),
        }
    }
}

fn fmt_enum(e: &Enum, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if e.items().is_empty() {
        return write!(f, "enum {} {{}}", e.name());
    }
    write!(f, "enum {} {{ ", e.name())?;
    for (i, item) in e.items().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{} = {}", item.name, item.value)?;
    }
    f.write_str(" }")
}

fn fmt_class(c: &Class, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if c.variables().is_empty() && c.functions().is_empty() {
        return write!(f, "class {} {{}}", c.name());
    }
    write!(f, "class {} {{ ", c.name())?;
    for var in c.variables() {
        write!(f, "{} {}; ", var.type_ref().name(), var.name())?;
    }
    for func in c.functions() {
        fmt_function(func, f)?;
        f.write_str("; ")?;
    }
    f.write_str("}")
}

fn fmt_function(func: &MemberFunction, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}(", func.return_type().name(), func.name())?;
    for (i, param) in func.param_types().iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        f.write_str(&param.name())?;
    }
    f.write_str(")")
}
