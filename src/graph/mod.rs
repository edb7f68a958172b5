//! Graph access layer: session boundary, query builder and record decoder.
//!
//! # Architecture
//!
//! - [`SessionSource`] / [`Session`] - backend traits; one session per query
//! - [`Graph`] - cheap-to-clone handle owning a session source
//! - [`Query`] - fluent builder that executes through [`Graph::with_session`]
//! - [`Record`] / [`decode`] - maps result columns onto entity fields
//!
//! # Usage
//!
//! ```ignore
//! use cinegraph::graph::{decode_new, Graph};
//!
//! let graph = Graph::new(client);
//!
//! let rows = graph
//!     .query("MATCH (m:Movie) WHERE m.uuid = $uuid RETURN m.uuid, m.title")
//!     .param("uuid", "abc-1")
//!     .fetch_all()
//!     .await?;
//!
//! let movie: Movie = decode_new(&rows[0], "m")?;
//! ```

mod decode;
mod macros;
mod query;
mod row;
mod traits;

pub mod backends;

#[cfg(test)]
pub(crate) mod testing;

// Re-export core types
pub use decode::{decode, decode_new, read_string, Column, ColumnKind, ColumnValue, Record, Slot};
pub use query::Query;
pub use row::{Params, Row};
pub use traits::{Session, SessionSource};

// Re-export macros (defined at crate root via #[macro_export])
#[doc(inline)]
pub use crate::cypher;
#[doc(inline)]
pub use crate::record_columns;

// --- Graph wrapper struct ---

use std::sync::Arc;

use crate::error::AppError;

/// Handle to the graph database used by repositories.
///
/// `Graph` holds no per-call state: every query acquires its own session,
/// runs once, and releases the session before returning. Clones share the
/// same underlying [`SessionSource`].
#[derive(Clone)]
pub struct Graph {
    source: Arc<dyn SessionSource>,
}

impl Graph {
    /// Creates a new graph handle around the given session source.
    pub fn new(source: impl SessionSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
        }
    }

    /// Creates a query builder for a single read query.
    pub fn query(&self, cypher: &str) -> Query<'_> {
        Query::new(self, cypher)
    }

    /// Runs one query inside a freshly acquired session.
    ///
    /// The session is closed exactly once before this returns, whether the
    /// query succeeded or not. A failure to close is logged and does not
    /// override the query outcome.
    ///
    /// # Errors
    ///
    /// - [`AppError::SessionUnavailable`] if no session could be acquired
    /// - [`AppError::ExecutionFailed`] if the query failed; rows buffered
    ///   before the failure are discarded
    pub async fn with_session(&self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
        let mut session = self.source.acquire().await.map_err(|e| {
            tracing::error!(error = %e, query = cypher, "Cannot acquire session");
            e
        })?;

        tracing::debug!(query = cypher, args = ?params, "CYPHER_QUERY");
        let result = session.fetch_all(cypher, params).await;

        if let Err(e) = session.close().await {
            tracing::warn!(error = %e, "Failed to release session");
        }

        match result {
            Ok(rows) => {
                tracing::trace!(rows = rows.len(), "Query complete");
                Ok(rows)
            }
            Err(e) => {
                tracing::error!(error = %e, query = cypher, "Query execution failed");
                Err(e)
            }
        }
    }
}
