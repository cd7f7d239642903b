// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! typereg Global Configuration - Single Source of Truth
//!
//! Fixed names and sizing used by the registry. **NEVER hardcode elsewhere!**
//!
//! The registry has no runtime configuration: descriptors are built by
//! explicit builder calls, and everything tunable lives here as a constant.

/// Name carried by an enum descriptor until it is registered.
pub const UNKNOWN_ENUM_NAME: &str = "Unknown-Enum";

/// Name carried by a class descriptor until it is registered.
pub const UNKNOWN_CLASS_NAME: &str = "Unknown-Class";

/// Name of a numeric descriptor whose primitive has no table entry.
pub const UNKNOWN_NUMERIC_NAME: &str = "Unknown";

/// Shard count of each category table (must be a power of two).
pub const REGISTRY_SHARDS: usize = 8;
