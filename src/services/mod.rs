//! Business logic services for the movie graph.
//!
//! Services validate caller input and orchestrate repositories,
//! using the `FromContext` derive macro for dependency injection.

mod movie;

pub use movie::MovieService;
