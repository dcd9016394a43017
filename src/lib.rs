//! Query layer for generated API documentation.
//!
//! Loads a documentation model (packages, types and a flat search index) and offers
//! faceted substring search, type-expression linking against a type registry, and an
//! autocomplete controller for a search widget. The same operations are exposed as MCP
//! tools by [`server::DocSearchServer`].

pub mod autocomplete;
pub mod cli;
pub mod docs;
pub mod error;
pub mod format;
pub mod model;
pub mod registry;
pub mod schema;
pub mod search;
pub mod server;
pub mod tools;
pub mod tracing;
pub mod types;

pub use autocomplete::{AutocompleteController, NavigationTarget, Phase, SearchWidget, WidgetEvent};
pub use docs::Documentation;
pub use error::{ModelError, Result};
pub use model::{Category, DocumentationModel, SearchIndexEntry, TypeKind};
pub use registry::{TypeLookup, TypeRecord, TypeRegistry};
pub use search::{FacetedResultSet, QueryEngine, SearchQueryEngine};
pub use types::{ResolvedType, TypeExpressionResolver, TypeSegment};
