//! Query builder for fluent Cypher query construction.

use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::graph::row::{Params, Row};
use crate::graph::Graph;

/// A builder for constructing and executing a Cypher query.
///
/// `Query` collects parameters and hands the finished statement to
/// [`Graph::with_session`], which runs it in a fresh session.
///
/// # Example
///
/// ```ignore
/// let rows = graph
///     .query("MATCH (m:Movie) WHERE m.uuid = $uuid RETURN m.uuid, m.title")
///     .param("uuid", "abc-1")
///     .fetch_all()
///     .await?;
/// ```
pub struct Query<'a> {
    graph: &'a Graph,
    cypher: String,
    params: Params,
}

impl<'a> Query<'a> {
    /// Creates a new query builder against the given graph.
    pub fn new(graph: &'a Graph, cypher: &str) -> Self {
        Self {
            graph,
            cypher: cypher.to_string(),
            params: Params::new(),
        }
    }

    /// Adds a parameter to the query.
    ///
    /// Parameters are referenced in Cypher using `$name` syntax.
    pub fn param(mut self, name: &str, value: impl Into<JsonValue>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Returns the Cypher text of this query.
    pub fn cypher(&self) -> &str {
        &self.cypher
    }

    /// Returns the parameters bound so far.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Executes the query in its own session and collects every row.
    pub async fn fetch_all(self) -> Result<Vec<Row>, AppError> {
        self.graph.with_session(&self.cypher, self.params).await
    }
}
