//! Person model.

use serde::{Deserialize, Serialize};

use super::Role;
use crate::record_columns;

/// A person connected to movies (actor, director, writer...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier.
    pub uuid: String,
    /// Full name.
    pub name: String,
    /// Birth year.
    pub born: i64,
    /// Why this person was returned, e.g. `DIRECTED` for a director lookup.
    ///
    /// Set by the repository from the lookup it ran, never read from a column.
    pub role: Option<Role>,
}

record_columns!(Person {
    uuid: String => "uuid",
    name: String => "name",
    born: i64 => "born",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{decode_new, Record, Row};
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_person_aliases_are_unique() {
        let aliases: HashSet<_> = Person::COLUMNS.iter().map(|c| c.alias).collect();
        assert_eq!(aliases.len(), Person::COLUMNS.len());
    }

    #[test]
    fn test_role_is_not_a_column() {
        assert!(Person::COLUMNS.iter().all(|c| c.alias != "role"));
    }

    #[test]
    fn test_decode_person_ignores_role_column() {
        let row: Row = [
            ("p.uuid", json!("p1")),
            ("p.name", json!("Lana Wachowski")),
            ("p.born", json!(1965)),
            ("p.role", json!("DIRECTED")),
        ]
        .into_iter()
        .collect();

        let person: Person = decode_new(&row, "p").unwrap();
        assert_eq!(person.uuid, "p1");
        assert_eq!(person.name, "Lana Wachowski");
        assert_eq!(person.born, 1965);
        assert_eq!(person.role, None);
    }
}
