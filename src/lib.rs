//! Cinegraph - read-only movie graph gateway.
//!
//! Translates typed requests into parameterized Cypher queries and decodes
//! the loosely typed result rows back into movie, person and participation
//! records.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod graph;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;

// Re-export FromRef at crate root for di-macros generated code
pub use di::FromRef;
