//! Core traits for the session boundary.
//!
//! Backends implement two traits:
//!
//! - [`SessionSource`] - hands out one session per call
//! - [`Session`] - runs a single Cypher query and is then closed
//!
//! Both are object-safe so that [`Graph`](crate::graph::Graph) can hold any
//! backend behind an `Arc<dyn SessionSource>`.

use async_trait::async_trait;

use crate::error::AppError;
use crate::graph::row::{Params, Row};

/// Acquires query-execution sessions from a connectivity collaborator.
///
/// Implementations typically wrap a driver-managed connection pool. The pool
/// must be safe for concurrent use; this trait adds no synchronization.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Acquires a fresh session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SessionUnavailable`] when no session can be
    /// obtained. No query has been attempted in that case.
    async fn acquire(&self) -> Result<Box<dyn Session>, AppError>;
}

/// A single-use query-execution session.
///
/// A session runs at most one query via [`fetch_all`](Session::fetch_all)
/// and must then be released with [`close`](Session::close).
#[async_trait]
pub trait Session: Send {
    /// Executes a read query and consumes its result stream to completion.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExecutionFailed`] if the query is rejected or the
    /// stream fails part way through.
    async fn fetch_all(&mut self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError>;

    /// Releases the session back to its source.
    async fn close(self: Box<Self>) -> Result<(), AppError>;
}
