// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Enumeration descriptors.

use crate::config::UNKNOWN_ENUM_NAME;

/// Enum item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    /// Item name.
    pub name: String,
    /// Item value.
    pub value: i64,
}

impl EnumItem {
    /// Create enum item.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Enumeration type descriptor.
///
/// Items keep the order in which they were added. Neither names nor values
/// are deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enum {
    name: String,
    items: Vec<EnumItem>,
    registered: bool,
}

impl Default for Enum {
    fn default() -> Self {
        Self {
            name: UNKNOWN_ENUM_NAME.to_string(),
            items: Vec::new(),
            registered: false,
        }
    }
}

impl Enum {
    /// Create a registered, empty enum descriptor.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
            registered: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn items(&self) -> &[EnumItem] {
        &self.items
    }

    /// Whether a name was registered since construction or the last reset.
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Append an item.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<i64>) {
        self.items.push(EnumItem::new(name, value.into()));
    }

    /// Get the first item with this name.
    pub fn item(&self, name: &str) -> Option<&EnumItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Get the first item with this value.
    pub fn item_by_value(&self, value: i64) -> Option<&EnumItem> {
        self.items.iter().find(|i| i.value == value)
    }

    /// Set the name, keeping items added before registration.
    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
        self.registered = true;
    }
}
