use crate::docs::Documentation;
use crate::search::{
    EMPTY_STATE_MESSAGE, FacetedResultSet, MIN_QUERY_LENGTH, QueryEngine, ResultItemView,
    is_searchable, render_results_html,
};
use crate::tools::OutputFormat;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchRequest {
    /// Text to look for in names, qualified names and method signatures (case-insensitive)
    pub query: String,
    /// Output format: text (grouped listing), html (dropdown markup) or json (category buckets)
    #[serde(default)]
    pub format: OutputFormat,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            format: OutputFormat::default(),
        }
    }
}

/// Runs a faceted search over the documentation's index.
pub fn handle_search(docs: &Documentation, request: &SearchRequest) -> Result<String, String> {
    let query = request.query.as_str();

    if !is_searchable(query) {
        return Ok(format!(
            "Query '{}' is too short. Type at least {} characters.",
            query, MIN_QUERY_LENGTH
        ));
    }

    let results = docs.engine().filter(query);
    tracing::debug!(query, total = results.total(), "Handled search request");

    match request.format {
        OutputFormat::Json => serde_json::to_string_pretty(&results)
            .map_err(|e| format!("Failed to serialize results: {}", e)),
        OutputFormat::Html => Ok(render_results_html(&results, query)),
        OutputFormat::Text => Ok(format_search_results(&results, query)),
    }
}

/// Render a result set as a grouped text listing, one section per non-empty category.
pub fn format_search_results(results: &FacetedResultSet, query: &str) -> String {
    if results.is_empty() {
        return format!("{} for '{}'.", EMPTY_STATE_MESSAGE, query);
    }

    let mut output = format!("Results for '{}' ({}):\n", query, results.total());

    for (category, entries) in results.sections() {
        let _ = write!(output, "\n{}\n", category.label());
        for entry in entries {
            let view = ResultItemView::from_entry(entry);
            let _ = writeln!(output, "  [{}] {}", view.badge, view.label);
            let _ = writeln!(output, "      {}", view.context);
        }
    }

    output
}
