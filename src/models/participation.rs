//! Participation model.

use serde::{Deserialize, Serialize};

use super::Movie;

/// A movie a person is connected to, with the type of the connecting edge.
///
/// Built per query result and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participation {
    /// The connected movie.
    pub movie: Movie,
    /// Edge type label (e.g. `ACTED_IN`, `PRODUCED`). Empty if the result
    /// carried no edge type.
    pub role: String,
}
