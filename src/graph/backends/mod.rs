//! Backend implementations for graph databases.
//!
//! Each backend implements the session traits from [`crate::graph`]:
//!
//! - [`SessionSource`](crate::graph::SessionSource) - session acquisition
//! - [`Session`](crate::graph::Session) - single-query execution and release
//!
//! # Available Backends
//!
//! | Backend | Module | Status |
//! |---------|--------|--------|
//! | Neo4j (Bolt) | [`neo4j`] | Available |

pub mod neo4j;
