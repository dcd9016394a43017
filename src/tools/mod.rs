//! Request handlers shared by the MCP server and the command line.

pub mod lookup_type;
pub mod resolve_type;
pub mod search;

pub use lookup_type::*;
pub use resolve_type::*;
pub use search::*;

use rmcp::schemars;
use serde::Deserialize;

/// How a handler renders its answer.
///
/// Variants carry no doc comments: schemars would emit `oneOf` instead of a plain `enum`.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Deserialize,
    schemars::JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}
