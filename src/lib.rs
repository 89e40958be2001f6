//! # semsla
//!
//! semsla is a client for the Semantic SLA document service, usable as a
//! library or as an MCP (Model Context Protocol) server.
//!
//! It authenticates a user, holds the bearer token, uploads, updates and
//! deletes documents, and submits tickets for SLA evaluation.
//!
//! ## Features
//!
//! - **Session**: login stores the bearer token; every other call attaches it per request
//! - **Documents**: multipart upload/update and delete by identifier
//! - **SLA checks**: lenient mapping of the loosely-typed SLA response
//! - **Knowledge search**: proposed solutions for free-text queries
//! - **No retries**: every operation makes exactly one attempt
//! - **Security**: tokens are never logged and are redacted from error messages
//!
//! ## Architecture
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error taxonomy: validation, transport, HTTP status
//! - [`transport`] - One-shot HTTP requests with JSON or multipart bodies
//! - [`session`] - Base URL and bearer token
//! - [`auth`], [`documents`], [`sla`], [`search`] - Service operations
//! - [`client`] - Facade binding the services to a shared session
//! - [`models`] - Request and response types
//! - [`server`] - MCP server implementation with tool routing
//! - [`tools`] - Tool input parameter structs
//!
//! ## Configuration
//!
//! - `SEMSLA_BASE_URL`: Base URL of the service (required)
//! - `SEMSLA_TIMEOUT_SECS`: Request timeout in seconds (default 1000)
//! - `SEMSLA_TOKEN`: Bearer token to start with (optional)
//! - `RUST_LOG`: Log level (e.g., `semsla=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use semsla::client::SemslaClient;
//! use semsla::config::Config;
//! use semsla::models::{Credentials, DocumentRef, SlaRequest};
//!
//! async fn example() -> Result<(), semsla::error::SemslaError> {
//!     let config = Config::new("https://sla.example.com")?;
//!     let client = SemslaClient::new(&config)?;
//!
//!     client.login(&Credentials::new("alice", "secret")).await?;
//!     client.upload(&DocumentRef::new("TC-1", "contract.pdf")).await?;
//!
//!     let result = client.check_sla(&SlaRequest::new("VPN down", "Since 9am")).await?;
//!     println!("{}", result);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod models;
pub mod search;
pub mod server;
pub mod session;
pub mod sla;
pub mod tools;
pub mod transport;
