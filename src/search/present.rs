//! Display data for a single search result, as handed to the dropdown renderer.

use super::facets::FacetedResultSet;
use crate::format::{escape_html, highlight_match, write_escaped};
use crate::model::{Category, SearchIndexEntry};
use serde::Serialize;
use std::fmt::{self, Write};

/// Shown when an open dropdown has no entries.
pub const EMPTY_STATE_MESSAGE: &str = "No results found";

/// Everything a renderer needs to draw one result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultItemView {
    pub category: Category,
    /// Single upper-case letter for the category badge
    pub badge: char,
    pub badge_class: String,
    /// Main line: the signature for methods, else the name
    pub label: String,
    /// Secondary line: package, or `package.Type` plus ` : returnType` for members
    pub context: String,
}

impl ResultItemView {
    pub fn from_entry(entry: &SearchIndexEntry) -> Self {
        let category = entry.category;

        let label = match (&entry.signature, category) {
            (Some(signature), Category::Method) => signature.clone(),
            _ => entry.name.clone(),
        };

        let context = if category.is_type() {
            entry.package_name.clone()
        } else {
            let owner = entry.type_name.as_deref().unwrap_or_default();
            let mut context = format!("{}.{}", entry.package_name, owner);
            if let Some(return_type) = &entry.return_type {
                context.push_str(" : ");
                context.push_str(return_type);
            }
            context
        };

        Self {
            category,
            badge: badge_letter(category),
            badge_class: format!("badge-{}", category.as_str()),
            label,
            context,
        }
    }

    /// The label escaped for HTML, with query matches wrapped in `<mark>`.
    pub fn label_html(&self, query: &str) -> String {
        highlight_match(&self.label, query)
    }

    pub fn context_html(&self) -> String {
        escape_html(&self.context).into_owned()
    }

    /// Write the row markup: badge, highlighted label and context line.
    pub fn write_html<W: Write>(&self, w: &mut W, query: &str) -> fmt::Result {
        w.write_str("<div class=\"search-result-item\" role=\"option\" aria-selected=\"false\">")?;
        w.write_str("<span class=\"search-result-badge ")?;
        write_escaped(w, &self.badge_class)?;
        write!(w, "\">{}</span>", self.badge)?;
        w.write_str("<div class=\"search-result-content\">")?;
        write!(w, "<div class=\"search-result-name\">{}</div>", self.label_html(query))?;
        write!(w, "<div class=\"search-result-context\">{}</div>", self.context_html())?;
        w.write_str("</div></div>")
    }
}

/// Render a result set as dropdown markup.
///
/// One `search-facet-section` per non-empty category, in display order, headed by the
/// category label. An empty set renders the empty state.
pub fn render_results_html(results: &FacetedResultSet, query: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = write_results_html(&mut out, results, query);
    out
}

pub fn write_results_html<W: Write>(
    w: &mut W,
    results: &FacetedResultSet,
    query: &str,
) -> fmt::Result {
    if results.is_empty() {
        return write!(w, "<div class=\"search-empty-state\">{}</div>", EMPTY_STATE_MESSAGE);
    }

    for (category, entries) in results.sections() {
        w.write_str("<div class=\"search-facet-section\">")?;
        write!(w, "<div class=\"search-facet-header\">{}</div>", category.label())?;
        for entry in entries {
            ResultItemView::from_entry(entry).write_html(w, query)?;
        }
        w.write_str("</div>")?;
    }
    Ok(())
}

fn badge_letter(category: Category) -> char {
    category
        .as_str()
        .chars()
        .next()
        .map_or('?', |c| c.to_ascii_uppercase())
}
