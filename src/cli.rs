use crate::tools::OutputFormat;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "apidoc-query", version)]
#[command(
    about = "Faceted search and type linking over generated API documentation",
    long_about = None
)]
pub struct Cli {
    /// Documentation model JSON (packages, types and search index)
    #[arg(short, long, env = "APIDOC_MODEL")]
    pub model: String,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run as an MCP server on stdio
    Serve,
    /// Faceted search over the index
    Search {
        query: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Link the identifiers of a type expression
    Resolve {
        type_expression: String,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show one type and its members
    Lookup { name: String },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}
