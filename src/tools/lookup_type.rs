use crate::docs::Documentation;
use crate::model::SearchIndexEntry;
use crate::registry::TypeRecord;
use crate::search::ResultItemView;
use rmcp::schemars;
use serde::Deserialize;
use std::fmt::Write as _;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupTypeRequest {
    /// Qualified (e.g., "com.acme.User") or simple (e.g., "User") type name
    pub name: String,
}

/// Finds a documented type and lists its indexed members.
pub fn handle_lookup_type(
    docs: &Documentation,
    request: &LookupTypeRequest,
) -> Result<String, String> {
    let record = docs
        .registry()
        .lookup(&request.name)
        .ok_or_else(|| format!("Type '{}' not found in the documentation.", request.name))?;

    let members = docs
        .engine()
        .index()
        .iter()
        .filter(|entry| is_member_of(entry, record));

    Ok(format_type(record, members))
}

fn is_member_of(entry: &SearchIndexEntry, record: &TypeRecord) -> bool {
    !entry.category.is_type()
        && entry.package_name == record.package_name
        && entry.type_name.as_deref() == Some(record.name.as_str())
}

fn format_type<'a>(
    record: &TypeRecord,
    members: impl Iterator<Item = &'a SearchIndexEntry>,
) -> String {
    let mut output = format!(
        "{} {}\n  package: {}\n  link: #{}\n",
        record.kind.as_str(),
        record.qualified_name,
        record.package_name,
        record.qualified_name
    );

    let mut first = true;
    for entry in members {
        if first {
            output.push_str("\nMembers\n");
            first = false;
        }
        let view = ResultItemView::from_entry(entry);
        let _ = write!(output, "  [{}] {}", view.badge, view.label);
        if let Some(return_type) = &entry.return_type {
            let _ = write!(output, " : {}", return_type);
        }
        output.push('\n');
    }

    output
}
