//! Documentation model consumed by the query layer.
//!
//! The model is produced by the documentation generator and arrives as JSON. It holds the
//! package/type tree (used to build the [`TypeRegistry`](crate::registry::TypeRegistry))
//! and the flat search index. Nothing in this crate mutates it after loading.

use crate::error::ModelError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Search category of an index entry.
///
/// Variant order is the display order of result sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Class,
    Interface,
    Enum,
    Annotation,
    Method,
    Field,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::Class,
        Self::Interface,
        Self::Enum,
        Self::Annotation,
        Self::Method,
        Self::Field,
    ];

    /// Wire name as it appears in the model (`"class"`, `"method"`, ...).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
            Self::Method => "method",
            Self::Field => "field",
        }
    }

    /// Category for a wire name, if it is one of the six known ones.
    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == name)
    }

    /// Key of the result bucket (`"classes"`, `"methods"`, ...).
    pub const fn bucket_key(self) -> &'static str {
        match self {
            Self::Class => "classes",
            Self::Interface => "interfaces",
            Self::Enum => "enums",
            Self::Annotation => "annotations",
            Self::Method => "methods",
            Self::Field => "fields",
        }
    }

    /// Section heading shown above the bucket.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Interface => "Interfaces",
            Self::Enum => "Enums",
            Self::Annotation => "Annotations",
            Self::Method => "Methods",
            Self::Field => "Fields",
        }
    }

    /// Position in [`Category::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether entries of this category denote a type rather than a member.
    pub const fn is_type(self) -> bool {
        matches!(
            self,
            Self::Class | Self::Interface | Self::Enum | Self::Annotation
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of a documented type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

impl TypeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Annotation => "annotation",
        }
    }

    /// The search category entries for this kind are filed under.
    pub const fn category(self) -> Category {
        match self {
            Self::Class => Category::Class,
            Self::Interface => Category::Interface,
            Self::Enum => Category::Enum,
            Self::Annotation => Category::Annotation,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable element: a type or one of its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchIndexEntry {
    pub category: Category,
    /// Simple name (`User`, `getName`)
    pub name: String,
    /// Fully qualified name, unique within the index (`com.acme.User.getName`)
    pub qualified_name: String,
    /// Pre-rendered signature for methods (`getName(String, int)`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    pub package_name: String,
    /// Simple name of the owning type, for methods and fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Return type for methods, declared type for fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,
}

impl SearchIndexEntry {
    /// Entry for a type.
    pub fn for_type(
        kind: TypeKind,
        package_name: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let package_name = package_name.into();
        let name = name.into();
        Self {
            category: kind.category(),
            qualified_name: qualify(&package_name, &name),
            name,
            signature: None,
            package_name,
            type_name: None,
            return_type: None,
        }
    }

    /// Entry for a method or field of `owner`.
    pub fn for_member(
        category: Category,
        owner: &TypeRecordRef<'_>,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            category,
            qualified_name: format!("{}.{}", owner.qualified_name, name),
            name,
            signature: None,
            package_name: owner.package_name.to_string(),
            type_name: Some(owner.name.to_string()),
            return_type: None,
        }
    }

    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    #[must_use]
    pub fn with_return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }
}

/// Borrowed owner information used when building member entries by hand.
#[derive(Debug, Clone, Copy)]
pub struct TypeRecordRef<'a> {
    pub package_name: &'a str,
    pub name: &'a str,
    pub qualified_name: &'a str,
}

/// A documented type as it appears in the package tree.
///
/// Only the fields the query layer needs are modelled; the generator emits many more
/// (modifiers, javadoc, members) and those are ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeInfo {
    pub kind: TypeKind,
    pub name: String,
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_types: Vec<TypeInfo>,
}

impl TypeInfo {
    pub fn new(kind: TypeKind, package_name: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            kind,
            qualified_name: qualify(package_name, &name),
            name,
            inner_types: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_inner(mut self, inner: Self) -> Self {
        self.inner_types.push(inner);
        self
    }
}

/// A package and the types declared in it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageInfo {
    pub name: String,
    #[serde(default)]
    pub types: Vec<TypeInfo>,
}

/// Root of the generated documentation data.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentationModel {
    #[serde(default)]
    pub packages: Vec<PackageInfo>,
    /// Entries whose category is not one of the six known ones are dropped at load.
    #[serde(default, deserialize_with = "deserialize_search_index")]
    pub search_index: Vec<SearchIndexEntry>,
}

fn deserialize_search_index<'de, D>(deserializer: D) -> Result<Vec<SearchIndexEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    let mut entries = Vec::with_capacity(raw.len());

    for value in raw {
        let unknown = value
            .get("category")
            .and_then(Value::as_str)
            .filter(|category| Category::from_wire(category).is_none())
            .map(str::to_owned);

        if let Some(category) = unknown {
            tracing::warn!(
                category,
                name = value.get("qualifiedName").and_then(serde_json::Value::as_str).unwrap_or_default(),
                "Skipping search index entry with unknown category"
            );
            continue;
        }

        entries.push(SearchIndexEntry::deserialize(value).map_err(serde::de::Error::custom)?);
    }

    Ok(entries)
}

impl DocumentationModel {
    /// Parse a model from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a model from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        if !path.exists() {
            return Err(ModelError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let model = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            packages = model.packages.len(),
            entries = model.search_index.len(),
            "Loaded documentation model"
        );
        Ok(model)
    }

    /// Number of types across all packages, nested types included.
    pub fn type_count(&self) -> usize {
        fn count(types: &[TypeInfo]) -> usize {
            types.iter().map(|t| 1 + count(&t.inner_types)).sum()
        }
        self.packages.iter().map(|p| count(&p.types)).sum()
    }
}

fn qualify(package_name: &str, name: &str) -> String {
    if package_name.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package_name, name)
    }
}
