// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Process-wide Type Registry
//!
//! Owns exactly one descriptor per Rust type and category, created on first
//! access and kept alive until process exit.
//!
//! # Architecture
//!
//! ```text
//! CategoryTable (one static per Kind: Numeric, Enum, Class)
//! +-- slots: DashMap<std::any::TypeId, &'static Descriptor>
//!
//! Descriptor (leaked, one per type)
//! +-- kind: Kind            (fixed at construction)
//! +-- rust_name: &'static str
//! +-- info: RwLock<Type>    (mutated by factories only)
//!
//! TypeRef
//! +-- &'static Descriptor   (Copy, compared by address)
//! ```
//!
//! # Thread Safety
//!
//! - Slot creation goes through the table's entry API: exactly one thread
//!   builds a descriptor, every other thread observes the finished slot.
//! - Each builder call holds the descriptor's write lock for its own
//!   duration only. A chain of calls is not atomic, so registration of a
//!   type should finish before other threads start reading it.
//! - Reads take recursive read locks, so walking the members of a class
//!   that refers to itself does not deadlock.
//! - Holding a read guard while registering the same type on the same
//!   thread deadlocks.

mod dispatch;
mod factory;

pub use dispatch::{Described, Primitive, Reflect};
pub use factory::{ClassFactory, Describes, EnumFactory, NumericFactory, Registry, TrivialFactory};

use crate::config::REGISTRY_SHARDS;
use crate::descriptor::{Class, Enum, Kind, Numeric, Type};
use crate::error::{Error, Result};
use dashmap::DashMap;
use parking_lot::{
    MappedRwLockReadGuard, MappedRwLockWriteGuard, RwLock, RwLockReadGuard, RwLockWriteGuard,
};
use std::any::TypeId;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Registry slot holding the canonical descriptor of one Rust type.
struct Descriptor {
    kind: Kind,
    rust_name: &'static str,
    info: RwLock<Type>,
}

impl Descriptor {
    fn new(rust_name: &'static str, info: Type) -> Self {
        Self {
            kind: info.kind(),
            rust_name,
            info: RwLock::new(info),
        }
    }
}

/// Non-owning handle to a registered descriptor.
///
/// Two handles are equal when they point at the same slot, which is the
/// case for every lookup of the same type.
#[derive(Clone, Copy)]
pub struct TypeRef(&'static Descriptor);

impl TypeRef {
    /// Kind tag, fixed when the slot was created.
    pub fn kind(self) -> Kind {
        self.0.kind
    }

    /// Rust type name (`std::any::type_name`) the slot was created for.
    pub fn rust_name(self) -> &'static str {
        self.0.rust_name
    }

    /// Current descriptor name.
    pub fn name(self) -> String {
        self.read().name().to_string()
    }

    /// Read the whole descriptor.
    pub fn read(self) -> RwLockReadGuard<'static, Type> {
        self.0.info.read_recursive()
    }

    /// Numeric view, or `None` if this is not a numeric descriptor.
    pub fn as_numeric(self) -> Option<MappedRwLockReadGuard<'static, Numeric>> {
        RwLockReadGuard::try_map(self.read(), Type::as_numeric).ok()
    }

    /// Enum view, or `None` if this is not an enum descriptor.
    pub fn as_enum(self) -> Option<MappedRwLockReadGuard<'static, Enum>> {
        RwLockReadGuard::try_map(self.read(), Type::as_enum).ok()
    }

    /// Class view, or `None` if this is not a class descriptor.
    pub fn as_class(self) -> Option<MappedRwLockReadGuard<'static, Class>> {
        RwLockReadGuard::try_map(self.read(), Type::as_class).ok()
    }

    /// Whether both handles point at the same descriptor.
    pub fn ptr_eq(self, other: TypeRef) -> bool {
        std::ptr::eq(self.0, other.0)
    }

    fn write(self) -> RwLockWriteGuard<'static, Type> {
        self.0.info.write()
    }

    pub(crate) fn write_enum(self) -> Option<MappedRwLockWriteGuard<'static, Enum>> {
        RwLockWriteGuard::try_map(self.write(), Type::as_enum_mut).ok()
    }

    pub(crate) fn write_class(self) -> Option<MappedRwLockWriteGuard<'static, Class>> {
        RwLockWriteGuard::try_map(self.write(), Type::as_class_mut).ok()
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(*other)
    }
}

impl Eq for TypeRef {}

impl Hash for TypeRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(self.0, state);
    }
}

// Debug stays lock-free: a class may refer to itself.
impl std::fmt::Debug for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeRef({} {})", self.0.kind, self.0.rust_name)
    }
}

impl std::fmt::Display for TypeRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&*self.read(), f)
    }
}

/// Slots of one category, keyed by Rust type identity.
pub(crate) struct CategoryTable {
    kind: Kind,
    slots: DashMap<TypeId, &'static Descriptor>,
}

impl CategoryTable {
    fn new(kind: Kind) -> Self {
        Self {
            kind,
            slots: DashMap::with_shard_amount(REGISTRY_SHARDS),
        }
    }

    /// Get the slot of `T`, building it with `init` on first access.
    pub(crate) fn get_or_create<T: ?Sized + 'static>(
        &self,
        init: impl FnOnce() -> Type,
    ) -> TypeRef {
        let key = TypeId::of::<T>();

        // Fast path: slot already exists
        if let Some(slot) = self.slots.get(&key) {
            return TypeRef(*slot);
        }

        let slot = *self.slots.entry(key).or_insert_with(|| {
            let rust_name = std::any::type_name::<T>();
            let info = init();
            debug_assert_eq!(info.kind(), self.kind);
            log::debug!(
                "[TypeRegistry] Created {} descriptor for {}",
                self.kind,
                rust_name
            );
            Box::leak(Box::new(Descriptor::new(rust_name, info)))
        });

        TypeRef(slot)
    }

    fn snapshot(&self) -> Vec<TypeRef> {
        let mut refs: Vec<TypeRef> = self.slots.iter().map(|e| TypeRef(*e.value())).collect();
        refs.sort_by_key(|r| r.rust_name());
        refs
    }

    fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Get the table of a category.
pub(crate) fn table(kind: Kind) -> &'static CategoryTable {
    static NUMERIC: OnceLock<CategoryTable> = OnceLock::new();
    static ENUMS: OnceLock<CategoryTable> = OnceLock::new();
    static CLASSES: OnceLock<CategoryTable> = OnceLock::new();

    match kind {
        Kind::Numeric => NUMERIC.get_or_init(|| CategoryTable::new(Kind::Numeric)),
        Kind::Enum => ENUMS.get_or_init(|| CategoryTable::new(Kind::Enum)),
        Kind::Class => CLASSES.get_or_init(|| CategoryTable::new(Kind::Class)),
    }
}

/// Snapshot of every descriptor created so far.
///
/// Ordered by category (numeric, enum, class), then by Rust type name.
pub fn registered_types() -> Vec<TypeRef> {
    [Kind::Numeric, Kind::Enum, Kind::Class]
        .into_iter()
        .flat_map(|kind| table(kind).snapshot())
        .collect()
}

/// Number of descriptors created so far in one category.
pub fn registered_count(kind: Kind) -> usize {
    table(kind).len()
}

/// Find a descriptor by its current name.
///
/// Placeholder names are shared by every unregistered enum or class, so
/// searching for one returns an arbitrary placeholder.
pub fn find_by_name(name: &str) -> Result<TypeRef> {
    registered_types()
        .into_iter()
        .find(|r| r.read().name() == name)
        .ok_or_else(|| Error::UnknownType(name.to_string()))
}

#[cfg(test)]
mod tests;
