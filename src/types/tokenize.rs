//! Type-expression tokenizer.
//!
//! A single left-to-right scan that splits a type expression such as
//! `Map<String, List<Integer>>` into delimiters, keywords and identifiers. The scan is
//! deliberately not a grammar: unbalanced delimiters come out exactly as written.

/// Primitive and `void` keywords. Never linked.
pub const PRIMITIVE_KEYWORDS: &[&str] = &[
    "void", "boolean", "byte", "short", "int", "long", "float", "double", "char",
];

/// Keywords introducing a bound inside a type argument.
pub const BOUND_KEYWORDS: &[&str] = &["extends", "super"];

/// Characters that end an identifier and are emitted on their own.
pub const DELIMITERS: &[char] = &['<', '>', ',', '[', ']'];

/// One lexical unit of a type expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeToken<'a> {
    /// One of [`DELIMITERS`]
    Delimiter(char),
    /// A primitive or bound keyword
    Keyword(&'a str),
    /// Anything else: a simple or qualified type name (trimmed)
    Identifier(&'a str),
    /// Separator emitted after `,` and after a bound keyword
    Space,
}

pub fn is_primitive(word: &str) -> bool {
    PRIMITIVE_KEYWORDS.contains(&word)
}

pub fn is_bound_keyword(word: &str) -> bool {
    BOUND_KEYWORDS.contains(&word)
}

fn is_keyword(word: &str) -> bool {
    is_primitive(word) || is_bound_keyword(word)
}

/// Split `expr` into tokens.
///
/// Spaces normally stay inside the identifier being accumulated so that multi-word bound
/// clauses are not split early; only a buffer consisting of exactly `extends` or `super`
/// is cut at a space. Identifiers are trimmed, empty ones are dropped.
pub fn tokenize(expr: &str) -> Vec<TypeToken<'_>> {
    if is_primitive(expr) {
        return vec![TypeToken::Keyword(expr)];
    }

    let mut tokens = Vec::new();
    let mut start = 0;

    for (pos, ch) in expr.char_indices() {
        if DELIMITERS.contains(&ch) {
            flush(&expr[start..pos], &mut tokens);
            tokens.push(TypeToken::Delimiter(ch));
            if ch == ',' {
                tokens.push(TypeToken::Space);
            }
            start = pos + ch.len_utf8();
        } else if ch == ' ' {
            let word = expr[start..pos].trim();
            if is_bound_keyword(word) {
                tokens.push(TypeToken::Keyword(word));
                tokens.push(TypeToken::Space);
                start = pos + 1;
            }
        }
    }
    flush(&expr[start..], &mut tokens);

    tokens
}

fn flush<'a>(buffer: &'a str, tokens: &mut Vec<TypeToken<'a>>) {
    let word = buffer.trim();
    if word.is_empty() {
        return;
    }
    if is_keyword(word) {
        tokens.push(TypeToken::Keyword(word));
    } else {
        tokens.push(TypeToken::Identifier(word));
    }
}
