use crate::docs::Documentation;
use crate::tools::OutputFormat;
use crate::types::{ResolvedType, TypeSegment};
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ResolveTypeRequest {
    /// Type expression as written in a signature (e.g., "Map<String, List<User>>", "int[]")
    pub type_expression: String,
    /// Output format: text (links listed), html (anchors and spans), json (segments)
    #[serde(default)]
    pub format: OutputFormat,
}

impl ResolveTypeRequest {
    pub fn new(type_expression: impl Into<String>, format: OutputFormat) -> Self {
        Self {
            type_expression: type_expression.into(),
            format,
        }
    }
}

/// Resolves a type expression against the documentation's registry.
pub fn handle_resolve_type(
    docs: &Documentation,
    request: &ResolveTypeRequest,
) -> Result<String, String> {
    let resolved = docs.resolver().resolve(&request.type_expression);

    match request.format {
        OutputFormat::Text => Ok(format_resolved(&resolved)),
        OutputFormat::Html => Ok(resolved.to_html()),
        OutputFormat::Json => serde_json::to_string_pretty(&resolved)
            .map_err(|e| format!("Failed to serialize resolved type: {}", e)),
    }
}

/// The expression on the first line, then one line per identifier and where it points.
pub fn format_resolved(resolved: &ResolvedType) -> String {
    let mut output = resolved.to_string();
    output.push('\n');

    for segment in resolved.segments() {
        match segment {
            TypeSegment::Link { target, label } => {
                let _ = writeln!(output, "  {} -> {}", label, target);
            }
            TypeSegment::External { label } => {
                let _ = writeln!(output, "  {} (external)", label);
            }
            TypeSegment::Text { .. } => {}
        }
    }

    output
}
