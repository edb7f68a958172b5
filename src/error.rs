//! Application error types.

use thiserror::Error;

use crate::graph::ColumnKind;

/// Application-level errors for Cinegraph.
#[derive(Error, Debug)]
pub enum AppError {
    // Session boundary errors
    #[error("Session unavailable: {0}")]
    SessionUnavailable(String),

    #[error("Cypher execution failed: {message}")]
    ExecutionFailed { message: String, query: String },

    // Decoding errors
    #[error("Unsupported field type for column '{column}': expected {expected}, found {found}")]
    UnsupportedFieldType {
        column: String,
        expected: ColumnKind,
        found: &'static str,
    },

    // Domain errors
    #[error("Invalid role '{0}'. Valid values: DIRECTED, WROTE, ACTED_IN")]
    InvalidRole(String),

    #[error("Validation error: {0}")]
    Validation(String),

    // Driver bootstrap errors
    #[error("Neo4j driver error: {0}")]
    Driver(#[from] neo4rs::Error),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(String),
}
