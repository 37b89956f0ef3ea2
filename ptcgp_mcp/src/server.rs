//! Core MCP server implementation for the ptcgp card database.

use std::path::PathBuf;
use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::wrapper::Parameters,
    model::*, tool, tool_handler, tool_router, transport::stdio,
};

use ptcgp_core::{CardTable, DatasetError, TokenSortScorer};

use crate::tools;
use crate::tools::{
    FilterByColorParams, GetCardParams, SearchAbilityParams, SearchPokemonParams,
};

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// Dataset loading error
    Dataset(DatasetError),
    /// MCP protocol error
    Mcp(String),
}

impl From<DatasetError> for ServerError {
    fn from(err: DatasetError) -> Self {
        ServerError::Dataset(err)
    }
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Dataset(err) => write!(f, "Dataset error: {}", err),
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for the ptcgp card database.
///
/// Exposes the four query operations as MCP tools. The card table is
/// loaded once at construction and shared immutably across calls; the
/// single-request-at-a-time host model needs no locking on top of that.
#[derive(Clone, Debug)]
pub struct PtcgpMcpServer {
    table: Arc<CardTable>,
    scorer: TokenSortScorer,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<PtcgpMcpServer>,
}

#[tool_router]
impl PtcgpMcpServer {
    /// Create a new MCP server backed by the dataset at the given path.
    ///
    /// Loads the card table once. Edits to the file on disk after this
    /// point are not picked up; restart the server to refresh.
    pub fn new(dataset_path: PathBuf) -> Result<Self, DatasetError> {
        debug!("Creating MCP server for dataset: {:?}", dataset_path);

        let table = CardTable::load(&dataset_path)?;
        debug!("Dataset loaded: {} cards", table.len());

        Ok(Self {
            table: Arc::new(table),
            scorer: TokenSortScorer,
            tool_router: Self::tool_router(),
        })
    }

    #[tool(description = "Get card data by exact card ID. \
        Returns the full card record as JSON, including its attacks and abilities. \
        Returns an error object with code 404 when no card has that ID.")]
    async fn get_card_data(
        &self,
        Parameters(params): Parameters<GetCardParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: get_card_data, card_id={}", params.card_id);
        Ok(tools::get_card::execute(&self.table, &params))
    }

    #[tool(description = "Fuzzy search Pokémon cards by name. \
        Close misspellings are accepted; the best-matching name is selected and every card \
        carrying that name is returned as a JSON array. \
        Returns an error object with code 404 when nothing resembles the query.")]
    async fn fuzzy_search_pokemon(
        &self,
        Parameters(params): Parameters<SearchPokemonParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: fuzzy_search_pokemon, name={}", params.name);
        Ok(tools::search_pokemon::execute(
            &self.table,
            &self.scorer,
            &params,
        ))
    }

    #[tool(description = "Filter cards by color, case-insensitive. \
        Returns every matching card as a JSON array, or an error object with code 404 \
        when no card has that color.")]
    async fn filter_by_color(
        &self,
        Parameters(params): Parameters<FilterByColorParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: filter_by_color, color={}", params.color);
        Ok(tools::filter_color::execute(&self.table, &params))
    }

    #[tool(description = "Fuzzy search cards by ability text. \
        Matches the query against every ability description; every card sharing the \
        best-matching wording is returned as a JSON array. \
        Returns an error object with code 404 when nothing resembles the query.")]
    async fn fuzzy_search_ability(
        &self,
        Parameters(params): Parameters<SearchAbilityParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: fuzzy_search_ability, ability_query={}",
            params.ability_query
        );
        Ok(tools::search_ability::execute(
            &self.table,
            &self.scorer,
            &params,
        ))
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for PtcgpMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "ptcgp card database server. Use get_card_data for exact ID lookups, \
                 fuzzy_search_pokemon to find cards by name, filter_by_color to list a color, \
                 and fuzzy_search_ability to find cards by ability text."
                    .into(),
            ),
        }
    }
}
