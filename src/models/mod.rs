//! Domain models for the movie graph.

mod movie;
mod participation;
mod person;
mod role;

pub use movie::Movie;
pub use participation::Participation;
pub use person::Person;
pub use role::Role;
