//! Error handling for the ptcgp CLI.

/// Errors that terminate a CLI command with a nonzero exit code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliError {
    /// The query matched nothing.
    QueryError,
    /// The dataset could not be loaded.
    DatasetError,
    /// The MCP server failed to start or crashed.
    ServerError,
}

impl CliError {
    pub fn exit_code(self) -> i32 {
        match self {
            CliError::QueryError => 1,
            CliError::DatasetError => 2,
            CliError::ServerError => 3,
        }
    }
}
