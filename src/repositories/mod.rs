//! Data access layer for graph reads.
//!
//! Repositories build parameterized Cypher, run it through the session
//! boundary, and decode the rows, using the `FromContext` derive macro for
//! dependency injection.

mod movie;

pub use movie::MovieRepository;
