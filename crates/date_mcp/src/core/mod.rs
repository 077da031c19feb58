//! # Date MCP Server Core
//!
//! This module provides the date and clock queries behind the MCP tools.
//!
//! ## Features
//! - Current weekday, ISO date, local time and UTC time
//! - Current time in named locations (case-insensitive lookup)
//! - Built-in location catalog extended through `DATE_MCP_LOCATIONS`
//! - Local timezone detection
//!
//! ## Modules
//! - `error`: Custom error types and error handling
//! - `models`: Location entries and tool request types
//! - `provider`: Clock-reading query operations
//! - `registry`: Location catalog construction and lookup
//! - `utils`: Format strings and helpers

pub mod error;
pub mod models;
pub mod provider;
pub mod registry;
pub mod utils;
