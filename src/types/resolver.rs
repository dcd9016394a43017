//! Resolution of type expressions into cross-reference segments.

use super::tokenize::{TypeToken, tokenize};
use crate::format::write_escaped;
use crate::registry::TypeLookup;
use serde::Serialize;
use std::fmt::{self, Write};

/// One piece of a resolved type expression.
///
/// Text is stored unescaped; escaping happens when rendering HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeSegment {
    /// Delimiters, keywords and separators, emitted as written
    Text { text: String },
    /// A documented type: navigates to `target` (its qualified name)
    Link { target: String, label: String },
    /// A type outside the documented surface, shown as plain text
    External { label: String },
}

impl TypeSegment {
    /// The text shown to the reader.
    pub fn display_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::Link { label, .. } | Self::External { label } => label,
        }
    }

    /// Navigation target, for links only.
    pub fn target(&self) -> Option<&str> {
        match self {
            Self::Link { target, .. } => Some(target),
            _ => None,
        }
    }

    pub const fn is_link(&self) -> bool {
        matches!(self, Self::Link { .. })
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External { .. })
    }

    /// Write this segment as HTML.
    pub fn write_html<W: Write>(&self, w: &mut W) -> fmt::Result {
        match self {
            Self::Text { text } => write_escaped(w, text),
            Self::Link { target, label } => {
                w.write_str("<a class=\"type-link\" href=\"#")?;
                write_escaped(w, target)?;
                w.write_str("\">")?;
                write_escaped(w, label)?;
                w.write_str("</a>")
            }
            Self::External { label } => {
                w.write_str("<span class=\"type-external\">")?;
                write_escaped(w, label)?;
                w.write_str("</span>")
            }
        }
    }
}

/// A type expression after resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedType {
    segments: Vec<TypeSegment>,
}

impl ResolvedType {
    pub fn segments(&self) -> &[TypeSegment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<TypeSegment> {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segments that link to documented types.
    pub fn links(&self) -> impl Iterator<Item = &TypeSegment> {
        self.segments.iter().filter(|s| s.is_link())
    }

    /// Render to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_html(&mut out);
        out
    }

    pub fn write_html<W: Write>(&self, w: &mut W) -> fmt::Result {
        for segment in &self.segments {
            segment.write_html(w)?;
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        if let Some(TypeSegment::Text { text: last }) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(TypeSegment::Text {
                text: text.to_string(),
            });
        }
    }
}

/// Plain-text rendering: the expression as the reader sees it.
impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.display_text())?;
        }
        Ok(())
    }
}

/// Turns type-expression strings into link/text segments against a registry.
///
/// Tokenizing and resolution are separate passes: [`tokenize`] yields the typed token
/// stream, and each identifier token is then looked up by qualified name, falling back to
/// simple name.
#[derive(Debug, Clone, Copy)]
pub struct TypeExpressionResolver<'a, L: TypeLookup + ?Sized> {
    registry: &'a L,
}

impl<'a, L: TypeLookup + ?Sized> TypeExpressionResolver<'a, L> {
    pub const fn new(registry: &'a L) -> Self {
        Self { registry }
    }

    /// Resolve a whole type expression. Empty input gives an empty result.
    pub fn resolve(&self, expr: &str) -> ResolvedType {
        let mut resolved = ResolvedType::default();

        for token in tokenize(expr) {
            match token {
                TypeToken::Delimiter(ch) => {
                    let mut buf = [0u8; 4];
                    resolved.push_text(ch.encode_utf8(&mut buf));
                }
                TypeToken::Keyword(word) => resolved.push_text(word),
                TypeToken::Space => resolved.push_text(" "),
                TypeToken::Identifier(identifier) => {
                    resolved
                        .segments
                        .push(self.resolve_identifier(identifier, None));
                }
            }
        }

        resolved
    }

    /// Resolve a single identifier, optionally overriding the label shown.
    ///
    /// Without an override the label is the record's simple name when found, otherwise
    /// the part after the last `.` of the identifier.
    pub fn resolve_identifier(&self, identifier: &str, label: Option<&str>) -> TypeSegment {
        let record = self
            .registry
            .lookup_by_qualified_name(identifier)
            .or_else(|| self.registry.lookup_by_simple_name(identifier));

        match record {
            Some(record) => TypeSegment::Link {
                target: record.qualified_name.clone(),
                label: label.unwrap_or(record.name.as_str()).to_string(),
            },
            None => {
                let label = label.unwrap_or_else(|| short_name(identifier));
                tracing::trace!(identifier, "Unresolved type, rendering as external");
                TypeSegment::External {
                    label: label.to_string(),
                }
            }
        }
    }
}

/// The part after the last `.`, or the whole identifier.
fn short_name(identifier: &str) -> &str {
    identifier
        .rsplit_once('.')
        .map_or(identifier, |(_, name)| name)
}
