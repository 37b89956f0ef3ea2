//! MCP server for the ptcgp card database.
//!
//! This crate provides an MCP (Model Context Protocol) server that
//! exposes card lookup and fuzzy search operations to AI assistants.

pub mod tools;

mod server;

pub use server::{PtcgpMcpServer, ServerError};
