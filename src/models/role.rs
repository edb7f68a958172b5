//! Role enum naming the person-to-movie edge types that can be looked up.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Closed set of edge types a person lookup may traverse.
///
/// Edge types cannot be bound as Cypher parameters, so every lookup by role
/// goes through this enum and a fixed query per variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Directed,
    Wrote,
    ActedIn,
}

impl Role {
    /// Returns the edge type label as stored in the graph.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Directed => "DIRECTED",
            Role::Wrote => "WROTE",
            Role::ActedIn => "ACTED_IN",
        }
    }

    /// Returns a static slice of all roles.
    pub fn all() -> &'static [Role] {
        &[Role::Directed, Role::Wrote, Role::ActedIn]
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DIRECTED" | "directed" => Ok(Role::Directed),
            "WROTE" | "wrote" => Ok(Role::Wrote),
            "ACTED_IN" | "acted_in" | "acted-in" => Ok(Role::ActedIn),
            _ => Err(AppError::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_labels_round_trip_through_from_str() {
        for role in Role::all() {
            assert_eq!(role.label().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn test_role_rejects_unknown_labels() {
        for label in ["PRODUCED", "DIRECTED]->(x) DETACH DELETE x //", "", "Directed "] {
            let err = label.parse::<Role>().unwrap_err();
            assert!(matches!(err, AppError::InvalidRole(ref l) if l == label));
        }
    }

    #[test]
    fn test_role_serializes_as_edge_label() {
        assert_eq!(
            serde_json::to_string(&Role::ActedIn).unwrap(),
            "\"ACTED_IN\""
        );
        assert_eq!(Role::Directed.to_string(), "DIRECTED");
    }
}
