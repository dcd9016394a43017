//! MCP server exposing search, type resolution and type lookup over loaded documentation.

use crate::docs::Documentation;
use crate::schema::inline_schema_for_type;
use crate::tools::{
    LookupTypeRequest, ResolveTypeRequest, SearchRequest, handle_lookup_type,
    handle_resolve_type, handle_search,
};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use std::borrow::Cow;

/// MCP server over one documentation model
#[derive(Clone)]
pub struct DocSearchServer {
    /// Loaded registry and search index, shared with every request
    docs: Documentation,

    /// Tool router for handling MCP tool calls
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for DocSearchServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocSearchServer")
            .field("docs", &self.docs)
            .finish()
    }
}

#[tool_router]
impl DocSearchServer {
    pub fn new(docs: Documentation) -> Self {
        Self {
            docs,
            tool_router: Self::tool_router(),
        }
    }

    pub const fn docs(&self) -> &Documentation {
        &self.docs
    }

    #[tool(
        description = "Search the API documentation. Case-insensitive substring match over names, qualified names and method signatures. Results are grouped into classes, interfaces, enums, annotations, methods and fields (at most 5 per group, 30 overall). Queries shorter than 2 characters return nothing.",
        input_schema = inline_schema_for_type::<SearchRequest>()
    )]
    async fn search(
        &self,
        Parameters(request): Parameters<SearchRequest>,
    ) -> std::result::Result<String, String> {
        handle_search(&self.docs, &request)
    }

    #[tool(
        description = "Resolve a type expression such as 'Map<String, List<User>>' or 'User[]'. Each identifier is linked to a documented type (qualified name first, then simple name) or marked external. Delimiters and primitive keywords are kept as text.",
        input_schema = inline_schema_for_type::<ResolveTypeRequest>()
    )]
    async fn resolve_type(
        &self,
        Parameters(request): Parameters<ResolveTypeRequest>,
    ) -> std::result::Result<String, String> {
        handle_resolve_type(&self.docs, &request)
    }

    #[tool(
        description = "Look up a documented type by qualified or simple name. Shows its kind, package and link target, and lists its indexed methods and fields.",
        input_schema = inline_schema_for_type::<LookupTypeRequest>()
    )]
    async fn lookup_type(
        &self,
        Parameters(request): Parameters<LookupTypeRequest>,
    ) -> std::result::Result<String, String> {
        handle_lookup_type(&self.docs, &request)
    }
}

#[tool_handler]
impl ServerHandler for DocSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_protocol_version(ProtocolVersion::V_2024_11_05)
            .with_server_info(Implementation::from_build_env())
            .with_instructions(
                "apidoc-query: faceted search and type linking over generated API documentation. \
                 Use search to find types and members, resolve_type to link a type expression, \
                 and lookup_type to inspect one type."
                    .to_string(),
            )
    }
}

/// Expands tilde (`~`) in a path to the user's home directory.
///
/// - `~/foo` becomes `/home/user/foo`
/// - `~` becomes `/home/user`
/// - Other paths are returned unchanged
pub fn expand_tilde(path: &str) -> Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return Cow::Owned(home.join(stripped).display().to_string());
        }
    } else if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return Cow::Owned(home.display().to_string());
    }
    Cow::Borrowed(path)
}
