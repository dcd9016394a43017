//! Type Registry - read-only lookup of documented types.
//!
//! Records are kept in registry iteration order (packages in model order, types in
//! declaration order, nested types right after their outer type). Simple names are not
//! unique across packages; a simple-name lookup answers with the first record in that
//! order.

use crate::model::{DocumentationModel, TypeInfo, TypeKind};
use ahash::AHashMap;
use serde::Serialize;

/// A documented type as the query layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeRecord {
    pub qualified_name: String,
    pub name: String,
    pub package_name: String,
    pub kind: TypeKind,
}

impl TypeRecord {
    pub fn new(
        kind: TypeKind,
        package_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let package_name = package_name.into();
        let name = name.into();
        let qualified_name = if package_name.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", package_name, name)
        };
        Self {
            qualified_name,
            name,
            package_name,
            kind,
        }
    }
}

/// Lookup contract the type-expression resolver runs against.
///
/// Absence is `None`, never an error.
pub trait TypeLookup {
    /// Exact match on the qualified name.
    fn lookup_by_qualified_name(&self, qualified_name: &str) -> Option<&TypeRecord>;

    /// First record, in iteration order, whose simple name equals `name`.
    fn lookup_by_simple_name(&self, name: &str) -> Option<&TypeRecord>;
}

/// In-memory [`TypeLookup`] over an ordered set of records.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    records: Vec<TypeRecord>,
    by_qualified_name: AHashMap<String, usize>,
    /// First record index per simple name
    by_simple_name: AHashMap<String, usize>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry from the package tree of a documentation model.
    pub fn from_model(model: &DocumentationModel) -> Self {
        let mut registry = Self::new();
        for package in &model.packages {
            for info in &package.types {
                registry.insert_tree(&package.name, info);
            }
        }

        tracing::debug!(
            types = registry.len(),
            packages = model.packages.len(),
            "Built type registry"
        );
        registry
    }

    fn insert_tree(&mut self, package_name: &str, info: &TypeInfo) {
        self.insert(TypeRecord {
            qualified_name: info.qualified_name.clone(),
            name: info.name.clone(),
            package_name: package_name.to_string(),
            kind: info.kind,
        });
        for inner in &info.inner_types {
            self.insert_tree(package_name, inner);
        }
    }

    /// Append a record. A record whose qualified name is already present is dropped.
    pub fn insert(&mut self, record: TypeRecord) {
        if self.by_qualified_name.contains_key(&record.qualified_name) {
            tracing::warn!(
                qualified_name = %record.qualified_name,
                "Duplicate qualified name in type registry, keeping the first record"
            );
            return;
        }

        let idx = self.records.len();
        self.by_qualified_name
            .insert(record.qualified_name.clone(), idx);
        self.by_simple_name.entry(record.name.clone()).or_insert(idx);
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in registry iteration order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeRecord> {
        self.records.iter()
    }

    /// Qualified lookup first, then simple-name lookup.
    pub fn lookup(&self, name: &str) -> Option<&TypeRecord> {
        self.lookup_by_qualified_name(name)
            .or_else(|| self.lookup_by_simple_name(name))
    }
}

impl TypeLookup for TypeRegistry {
    fn lookup_by_qualified_name(&self, qualified_name: &str) -> Option<&TypeRecord> {
        self.by_qualified_name
            .get(qualified_name)
            .map(|&idx| &self.records[idx])
    }

    fn lookup_by_simple_name(&self, name: &str) -> Option<&TypeRecord> {
        self.by_simple_name.get(name).map(|&idx| &self.records[idx])
    }
}

impl FromIterator<TypeRecord> for TypeRegistry {
    fn from_iter<I: IntoIterator<Item = TypeRecord>>(iter: I) -> Self {
        let mut registry = Self::new();
        for record in iter {
            registry.insert(record);
        }
        registry
    }
}

impl<T: TypeLookup + ?Sized> TypeLookup for &T {
    fn lookup_by_qualified_name(&self, qualified_name: &str) -> Option<&TypeRecord> {
        (**self).lookup_by_qualified_name(qualified_name)
    }

    fn lookup_by_simple_name(&self, name: &str) -> Option<&TypeRecord> {
        (**self).lookup_by_simple_name(name)
    }
}
