//! Row and parameter types for query results.

use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// Parameters for Cypher queries.
///
/// A map of parameter names to JSON values. Only strings and integers are
/// bound by this crate's queries.
pub type Params = HashMap<String, JsonValue>;

/// A single row from a query result.
///
/// Columns are keyed by their qualified name as it appears in the `RETURN`
/// clause (e.g. `m.title`, or `role` for an aliased expression). Values are
/// dynamically typed; a column can be absent entirely or present with a
/// `null` value, and callers that care can tell the two apart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    data: HashMap<String, JsonValue>,
}

impl Row {
    /// Creates a new row from a map of column names to values.
    pub fn new(data: HashMap<String, JsonValue>) -> Self {
        Self { data }
    }

    /// Returns the raw value for a column, or `None` if the column is absent.
    ///
    /// A present-but-null column yields `Some(&JsonValue::Null)`.
    pub fn get_raw(&self, column: &str) -> Option<&JsonValue> {
        self.data.get(column)
    }
}

impl From<HashMap<String, JsonValue>> for Row {
    fn from(data: HashMap<String, JsonValue>) -> Self {
        Self::new(data)
    }
}

impl<K: Into<String>> FromIterator<(K, JsonValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, JsonValue)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_absent_column() {
        let row = Row::default();
        assert!(row.get_raw("m.title").is_none());
    }

    #[test]
    fn test_row_null_column_is_present() {
        let row: Row = [("m.tagline", JsonValue::Null)].into_iter().collect();
        assert_eq!(row.get_raw("m.tagline"), Some(&JsonValue::Null));
        assert!(row.get_raw("m.title").is_none());
    }

    #[test]
    fn test_row_from_map() {
        let mut data = HashMap::new();
        data.insert("role".to_string(), json!("ACTED_IN"));

        let row = Row::from(data);
        assert_eq!(row.get_raw("role"), Some(&json!("ACTED_IN")));
    }
}
