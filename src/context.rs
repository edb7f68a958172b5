//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::Context as ContextDerive;
use crate::error::AppError;
use crate::graph::backends::neo4j::Neo4jClient;
use crate::graph::Graph;

/// Root application context for dependency injection.
///
/// The Context holds all shared dependencies and uses `#[derive(Context)]`
/// to generate `FromRef` implementations for each field, enabling
/// compile-time dependency resolution.
#[derive(ContextDerive, Clone)]
pub struct Context {
    /// Session boundary to the graph database.
    pub graph: Graph,
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Creates a new context with the given dependencies.
    pub fn new(graph: Graph, config: Config) -> Self {
        Self {
            graph,
            config: Arc::new(config),
        }
    }

    /// Connects to Neo4j using the given configuration.
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let uri = config.neo4j.uri();
        tracing::info!(neo4j_server_uri = %uri, "Connecting to Neo4j");

        let client =
            Neo4jClient::connect(&uri, &config.neo4j.user, &config.neo4j.password)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "Cannot connect to Neo4j server");
                    e
                })?;

        tracing::info!(neo4j_server_uri = %uri, "Connected to Neo4j server");
        Ok(Self::new(Graph::new(client), config))
    }
}
