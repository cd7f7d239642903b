// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Class (record) descriptors.

use super::{MemberFunction, MemberVariable};
use crate::config::UNKNOWN_CLASS_NAME;

/// Class type descriptor.
///
/// Members keep the order in which they were added. Member types are
/// shared registry handles, a class never owns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    name: String,
    variables: Vec<MemberVariable>,
    functions: Vec<MemberFunction>,
    registered: bool,
}

impl Default for Class {
    fn default() -> Self {
        Self {
            name: UNKNOWN_CLASS_NAME.to_string(),
            variables: Vec::new(),
            functions: Vec::new(),
            registered: false,
        }
    }
}

impl Class {
    /// Create a registered class descriptor without members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variables: Vec::new(),
            functions: Vec::new(),
            registered: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variables(&self) -> &[MemberVariable] {
        &self.variables
    }

    pub fn functions(&self) -> &[MemberFunction] {
        &self.functions
    }

    /// Whether a name was registered since construction or the last reset.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn add_variable(&mut self, variable: MemberVariable) {
        self.variables.push(variable);
    }

    pub fn add_function(&mut self, function: MemberFunction) {
        self.functions.push(function);
    }

    /// Get member variable by name.
    pub fn variable(&self, name: &str) -> Option<&MemberVariable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    /// Get member function by name.
    pub fn function(&self, name: &str) -> Option<&MemberFunction> {
        self.functions.iter().find(|f| f.name() == name)
    }

    /// Set the name, keeping members added before registration.
    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
        self.registered = true;
    }
}
