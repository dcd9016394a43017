//! Type-expression linking.
//!
//! Turns strings such as `Map<String, List<Integer>>` into a sequence of cross-reference
//! links and literal text, resolving each identifier against the type registry.

pub mod resolver;
pub mod tokenize;

pub use resolver::{ResolvedType, TypeExpressionResolver, TypeSegment};
pub use tokenize::{
    BOUND_KEYWORDS, DELIMITERS, PRIMITIVE_KEYWORDS, TypeToken, is_bound_keyword, is_primitive,
    tokenize,
};
