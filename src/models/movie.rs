//! Movie model.

use serde::{Deserialize, Serialize};

use crate::record_columns;

/// A movie node.
///
/// Identity is the `uuid`. A default (zero-valued) movie has an empty
/// `uuid` and is never returned by lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Unique identifier.
    pub uuid: String,
    /// Movie title.
    pub title: String,
    /// Optional tagline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Release year.
    pub released: i64,
}

record_columns!(Movie {
    uuid: String => "uuid",
    title: String => "title",
    tagline: Option<String> => "tagline",
    released: i64 => "released",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{decode_new, Record, Row};
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_movie_aliases_are_unique() {
        let aliases: HashSet<_> = Movie::COLUMNS.iter().map(|c| c.alias).collect();
        assert_eq!(aliases.len(), Movie::COLUMNS.len());
    }

    #[test]
    fn test_decode_movie_row() {
        let row: Row = [
            ("m.uuid", json!("abc-1")),
            ("m.title", json!("Matrix")),
            ("m.released", json!(1999)),
        ]
        .into_iter()
        .collect();

        let movie: Movie = decode_new(&row, "m").unwrap();
        assert_eq!(
            movie,
            Movie {
                uuid: "abc-1".to_string(),
                title: "Matrix".to_string(),
                tagline: None,
                released: 1999,
            }
        );
    }

    #[test]
    fn test_movie_serializes_with_wire_names() {
        let movie = Movie {
            uuid: "abc-1".to_string(),
            title: "Matrix".to_string(),
            tagline: Some("Welcome to the Real World".to_string()),
            released: 1999,
        };

        let value = serde_json::to_value(&movie).unwrap();
        assert_eq!(
            value,
            json!({
                "uuid": "abc-1",
                "title": "Matrix",
                "tagline": "Welcome to the Real World",
                "released": 1999
            })
        );
    }
}
