//! Shared test fixtures and utilities for integration tests.
//!
//! # Available Fixtures
//!
//! - `docs`: the sample documentation model, loaded and indexed
//! - `model_file`: the same model written to a temporary JSON file
//!
//! # Helpers
//!
//! [`RecordingWidget`] records every hook a controller calls, and [`CountingEngine`]
//! wraps any engine to count (and remember) the queries it evaluates.

use apidoc_query::autocomplete::{NavigationTarget, SearchWidget};
use apidoc_query::search::{FacetedResultSet, QueryEngine};
use apidoc_query::{Documentation, DocumentationModel};
use rstest::fixture;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Two packages, nested types, and a `User` declared twice under different packages.
pub const SAMPLE_MODEL: &str = r#"{
  "packages": [
    {
      "name": "com.acme.model",
      "types": [
        {
          "kind": "class",
          "name": "User",
          "qualifiedName": "com.acme.model.User",
          "innerTypes": [
            { "kind": "class", "name": "Builder", "qualifiedName": "com.acme.model.User.Builder" }
          ]
        },
        { "kind": "enum", "name": "Role", "qualifiedName": "com.acme.model.Role" },
        { "kind": "interface", "name": "Entity", "qualifiedName": "com.acme.model.Entity" },
        { "kind": "annotation", "name": "Audited", "qualifiedName": "com.acme.model.Audited" }
      ]
    },
    {
      "name": "com.acme.service",
      "types": [
        { "kind": "class", "name": "UserService", "qualifiedName": "com.acme.service.UserService" },
        { "kind": "interface", "name": "UserRepository", "qualifiedName": "com.acme.service.UserRepository" }
      ]
    },
    {
      "name": "com.legacy",
      "types": [
        { "kind": "class", "name": "User", "qualifiedName": "com.legacy.User" }
      ]
    }
  ],
  "searchIndex": [
    { "category": "class", "name": "User", "qualifiedName": "com.acme.model.User", "packageName": "com.acme.model" },
    { "category": "class", "name": "Builder", "qualifiedName": "com.acme.model.User.Builder", "packageName": "com.acme.model" },
    { "category": "enum", "name": "Role", "qualifiedName": "com.acme.model.Role", "packageName": "com.acme.model" },
    { "category": "interface", "name": "Entity", "qualifiedName": "com.acme.model.Entity", "packageName": "com.acme.model" },
    { "category": "annotation", "name": "Audited", "qualifiedName": "com.acme.model.Audited", "packageName": "com.acme.model" },
    { "category": "class", "name": "UserService", "qualifiedName": "com.acme.service.UserService", "packageName": "com.acme.service" },
    { "category": "interface", "name": "UserRepository", "qualifiedName": "com.acme.service.UserRepository", "packageName": "com.acme.service" },
    { "category": "class", "name": "User", "qualifiedName": "com.legacy.User", "packageName": "com.legacy" },
    {
      "category": "method",
      "name": "getName",
      "qualifiedName": "com.acme.model.User.getName",
      "signature": "getName()",
      "packageName": "com.acme.model",
      "typeName": "User",
      "returnType": "String"
    },
    {
      "category": "method",
      "name": "findById",
      "qualifiedName": "com.acme.service.UserService.findById",
      "signature": "findById(long id)",
      "packageName": "com.acme.service",
      "typeName": "UserService",
      "returnType": "Optional<User>"
    },
    {
      "category": "method",
      "name": "rename",
      "qualifiedName": "com.acme.service.UserService.rename",
      "signature": "rename(Identifier target, String name)",
      "packageName": "com.acme.service",
      "typeName": "UserService",
      "returnType": "void"
    },
    {
      "category": "field",
      "name": "role",
      "qualifiedName": "com.acme.model.User.role",
      "packageName": "com.acme.model",
      "typeName": "User",
      "returnType": "Role"
    },
    {
      "category": "field",
      "name": "ADMIN",
      "qualifiedName": "com.acme.model.Role.ADMIN",
      "packageName": "com.acme.model",
      "typeName": "Role"
    }
  ]
}"#;

pub fn sample_model() -> DocumentationModel {
    DocumentationModel::from_json_str(SAMPLE_MODEL).expect("sample model parses")
}

#[fixture]
pub fn docs() -> Documentation {
    Documentation::from_model(sample_model())
}

/// A model JSON file inside a temporary directory, removed on drop.
pub struct ModelFile {
    _temp: TempDir,
    path: PathBuf,
}

#[allow(dead_code)] // Used across different integration test crates
impl ModelFile {
    pub fn with_contents(contents: &str) -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let path = temp.path().join("model.json");
        std::fs::write(&path, contents).expect("write model file");
        Self { _temp: temp, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[fixture]
pub fn model_file() -> ModelFile {
    ModelFile::with_contents(SAMPLE_MODEL)
}

/// Widget that records every hook call.
#[derive(Debug, Default)]
#[allow(dead_code)] // Fields inspected by different integration test crates
pub struct RecordingWidget {
    pub navigated: Vec<NavigationTarget>,
    /// Totals of every result set shown
    pub shown: Vec<usize>,
    pub hidden: usize,
    pub selected: Vec<usize>,
    pub clear_visible: bool,
    pub cleared: usize,
    pub focused: usize,
    pub released_focus: usize,
}

impl SearchWidget for RecordingWidget {
    fn navigate(&mut self, target: &NavigationTarget) {
        self.navigated.push(target.clone());
    }

    fn show_results(&mut self, results: &FacetedResultSet) {
        self.shown.push(results.total());
    }

    fn hide_results(&mut self) {
        self.hidden += 1;
    }

    fn select(&mut self, index: usize) {
        self.selected.push(index);
    }

    fn set_clear_visible(&mut self, visible: bool) {
        self.clear_visible = visible;
    }

    fn clear_input(&mut self) {
        self.cleared += 1;
    }

    fn focus_input(&mut self) {
        self.focused += 1;
    }

    fn release_focus(&mut self) {
        self.released_focus += 1;
    }
}

/// Engine wrapper recording every query it evaluates.
#[derive(Debug)]
pub struct CountingEngine<E> {
    inner: E,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Used across different integration test crates
impl<E: QueryEngine> CountingEngine<E> {
    pub const fn new(inner: E) -> Self {
        Self {
            inner,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.queries.lock().expect("queries lock").len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }
}

impl<E: QueryEngine> QueryEngine for CountingEngine<E> {
    fn filter(&self, query: &str) -> FacetedResultSet {
        self.queries
            .lock()
            .expect("queries lock")
            .push(query.to_string());
        self.inner.filter(query)
    }
}
