//! MCP server command implementation.

use std::path::Path;

use ptcgp_mcp::PtcgpMcpServer;

use crate::errors::CliError;
use crate::ui;

/// Start the MCP server on stdio.
pub fn serve_mcp(dataset: &Path) -> Result<(), CliError> {
    // Create a tokio runtime for the async MCP server
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        ui::error_with_details("Failed to create async runtime", &e.to_string());
        CliError::ServerError
    })?;

    rt.block_on(async {
        // Load the dataset and build the server
        let server = PtcgpMcpServer::new(dataset.to_path_buf()).map_err(|e| {
            ui::error_with_details("Failed to load card database", &e.to_string());
            CliError::DatasetError
        })?;

        // Serve over stdio (blocks until connection closes)
        server.serve_stdio().await.map_err(|e| {
            ui::error_with_details("MCP server error", &e.to_string());
            CliError::ServerError
        })
    })
}
