//! Neo4j backend over the Bolt protocol.
//!
//! Sessions are read transactions on a pooled `neo4rs` connection. Closing a
//! session rolls the transaction back, which hands the connection back to the
//! driver's pool; nothing is ever committed.
//!
//! # Example
//!
//! ```ignore
//! use cinegraph::graph::backends::neo4j::Neo4jClient;
//! use cinegraph::graph::Graph;
//!
//! let client = Neo4jClient::connect("bolt://localhost:7687", "neo4j", "test").await?;
//! let graph = Graph::new(client);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use neo4rs::{query, Query as BoltQuery, Txn};
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::graph::row::{Params, Row};
use crate::graph::traits::{Session, SessionSource};

/// Neo4j graph client.
///
/// Wraps a `neo4rs::Graph`, whose internal connection pool is shared by all
/// clones of this client.
#[derive(Clone)]
pub struct Neo4jClient {
    graph: Arc<neo4rs::Graph>,
}

impl Neo4jClient {
    /// Connects to a Neo4j server.
    ///
    /// # Arguments
    ///
    /// * `uri` - Bolt URI (e.g. `bolt://localhost:7687`)
    /// * `user` - Database user
    /// * `password` - Database password
    pub async fn connect(uri: &str, user: &str, password: &str) -> Result<Self, AppError> {
        let graph = neo4rs::Graph::new(uri, user, password).await?;
        Ok(Self::from_graph(graph))
    }

    /// Wraps an already connected driver handle.
    pub fn from_graph(graph: neo4rs::Graph) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }

    /// Returns the underlying driver handle.
    pub fn driver(&self) -> &neo4rs::Graph {
        &self.graph
    }
}

#[async_trait]
impl SessionSource for Neo4jClient {
    async fn acquire(&self) -> Result<Box<dyn Session>, AppError> {
        let txn = self
            .graph
            .start_txn()
            .await
            .map_err(|e| AppError::SessionUnavailable(e.to_string()))?;

        Ok(Box::new(Neo4jSession { txn }))
    }
}

/// A single read transaction.
pub struct Neo4jSession {
    txn: Txn,
}

#[async_trait]
impl Session for Neo4jSession {
    async fn fetch_all(&mut self, cypher: &str, params: Params) -> Result<Vec<Row>, AppError> {
        let execution_failed = |message: String| AppError::ExecutionFailed {
            message,
            query: cypher.to_string(),
        };

        let bolt_query = bind_params(query(cypher), &params)?;
        let mut stream = self
            .txn
            .execute(bolt_query)
            .await
            .map_err(|e| execution_failed(e.to_string()))?;

        let mut rows = Vec::new();
        while let Some(row) = stream
            .next(self.txn.handle())
            .await
            .map_err(|e| execution_failed(e.to_string()))?
        {
            let data: HashMap<String, JsonValue> = row
                .to()
                .map_err(|e| execution_failed(format!("Failed to read row: {}", e)))?;
            rows.push(Row::new(data));
        }

        Ok(rows)
    }

    async fn close(self: Box<Self>) -> Result<(), AppError> {
        self.txn
            .rollback()
            .await
            .map_err(|e| AppError::Internal(format!("Failed to release session: {}", e)))
    }
}

/// Binds JSON parameters as Bolt values.
///
/// Only scalar parameters are supported.
fn bind_params(mut bolt_query: BoltQuery, params: &Params) -> Result<BoltQuery, AppError> {
    for (name, value) in params {
        bolt_query = match value {
            JsonValue::String(s) => bolt_query.param(name, s.as_str()),
            JsonValue::Bool(b) => bolt_query.param(name, *b),
            JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => bolt_query.param(name, i),
                (None, Some(f)) => bolt_query.param(name, f),
                (None, None) => {
                    return Err(AppError::Internal(format!(
                        "Parameter '{}' is not representable: {}",
                        name, n
                    )))
                }
            },
            other => {
                return Err(AppError::Internal(format!(
                    "Unsupported parameter '{}': {}",
                    name, other
                )))
            }
        };
    }
    Ok(bolt_query)
}
