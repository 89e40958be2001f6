//! Data models for the SLA document service API.
//!
//! This module contains the inputs and results of each service operation,
//! plus the lenient accessors used to read loosely-typed JSON responses.

mod auth;
mod common;
mod search;
mod sla;

pub use auth::*;
pub use common::*;
pub use search::*;
pub use sla::*;
