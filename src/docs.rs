//! The loaded documentation: registry and search index, shared read-only.

use crate::autocomplete::{AutocompleteController, SearchWidget};
use crate::error::ModelError;
use crate::model::DocumentationModel;
use crate::registry::TypeRegistry;
use crate::search::SearchQueryEngine;
use crate::types::TypeExpressionResolver;
use std::path::Path;
use std::sync::Arc;

/// Everything the query layer needs, built once from a [`DocumentationModel`].
///
/// Cheap to clone; clones share the same registry and index. There is no writer after
/// construction, so readers need no synchronization.
#[derive(Debug, Clone)]
pub struct Documentation {
    registry: Arc<TypeRegistry>,
    engine: Arc<SearchQueryEngine>,
    package_count: usize,
}

impl Documentation {
    pub fn from_model(model: DocumentationModel) -> Self {
        let registry = TypeRegistry::from_model(&model);
        let package_count = model.packages.len();
        let engine = SearchQueryEngine::new(model.search_index);

        tracing::info!(
            packages = package_count,
            types = registry.len(),
            entries = engine.len(),
            "Documentation ready"
        );

        Self {
            registry: Arc::new(registry),
            engine: Arc::new(engine),
            package_count,
        }
    }

    /// Load and index a model file.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        DocumentationModel::load(path).map(Self::from_model)
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn engine(&self) -> &SearchQueryEngine {
        &self.engine
    }

    pub const fn package_count(&self) -> usize {
        self.package_count
    }

    /// Resolver bound to this documentation's registry.
    pub fn resolver(&self) -> TypeExpressionResolver<'_, TypeRegistry> {
        TypeExpressionResolver::new(&self.registry)
    }

    /// A fresh controller for one search widget, sharing this documentation's index.
    pub fn controller<W: SearchWidget>(
        &self,
        widget: W,
    ) -> AutocompleteController<Arc<SearchQueryEngine>, W> {
        AutocompleteController::new(Arc::clone(&self.engine), widget)
    }
}
