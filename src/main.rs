use anyhow::Context;
use apidoc_query::cli::{Cli, Commands};
use apidoc_query::server::{DocSearchServer, expand_tilde};
use apidoc_query::tools::{
    LookupTypeRequest, ResolveTypeRequest, SearchRequest, handle_lookup_type,
    handle_resolve_type, handle_search,
};
use apidoc_query::{Documentation, Result};
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    apidoc_query::tracing::init(cli.log_format);

    let model_path = expand_tilde(&cli.model);
    let docs = Documentation::load(Path::new(&*model_path))
        .with_context(|| format!("Failed to load documentation model from {}", model_path))?;

    let response = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => return serve(docs).await,
        Commands::Search { query, format } => {
            let request = SearchRequest { query, format };
            handle_search(&docs, &request)
        }
        Commands::Resolve {
            type_expression,
            format,
        } => handle_resolve_type(&docs, &ResolveTypeRequest::new(type_expression, format)),
        Commands::Lookup { name } => handle_lookup_type(&docs, &LookupTypeRequest { name }),
    };

    match response {
        Ok(text) => {
            println!("{}", text.trim_end());
            Ok(())
        }
        Err(message) => Err(anyhow::anyhow!(message)),
    }
}

async fn serve(docs: Documentation) -> Result<()> {
    tracing::info!("Starting apidoc-query MCP server");

    // Serve over stdio; tracing writes to stderr
    let service = DocSearchServer::new(docs)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("Error serving MCP server: {:?}", e);
        })?;

    service.waiting().await?;

    Ok(())
}
