//! MCP tool inputs for semsla.
//!
//! This module contains the input types for the MCP tools that
//! expose the SLA document service operations.

mod inputs;

pub use inputs::*;
