//! Record decoder mapping result columns onto typed entity fields.
//!
//! Every entity that can be read from a query result implements [`Record`],
//! a static table of [`Column`] bindings. Each binding names the column alias
//! a field reads from and the semantic kind of that field. The table is
//! normally generated with [`record_columns!`](crate::record_columns), which
//! checks at compile time that the declared kind matches the field's type.
//!
//! Decoding a row walks the table in declaration order and looks up
//! `<prefix>.<alias>` for each binding:
//!
//! - absent column: the field keeps its default
//! - `null` value: same as absent
//! - value of the declared kind: copied into the field
//! - anything else: [`AppError::UnsupportedFieldType`], decoding stops
//!
//! ```ignore
//! let movie: Movie = decode_new(&row, "m")?;
//! ```

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::error::AppError;
use crate::graph::row::Row;

/// Semantic type of a decodable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    String,
    Integer,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnKind::String => write!(f, "string"),
            ColumnKind::Integer => write!(f, "integer"),
        }
    }
}

/// Mutable view of a single entity field, handed out by a [`Column`] binding.
pub enum Slot<'a> {
    String(&'a mut String),
    OptionalString(&'a mut Option<String>),
    Integer(&'a mut i64),
}

impl Slot<'_> {
    /// Returns the semantic kind this slot accepts.
    pub fn kind(&self) -> ColumnKind {
        match self {
            Slot::String(_) | Slot::OptionalString(_) => ColumnKind::String,
            Slot::Integer(_) => ColumnKind::Integer,
        }
    }
}

/// Field types that can be the target of a column binding.
pub trait ColumnValue {
    /// Semantic kind of values this field accepts.
    const KIND: ColumnKind;

    /// Borrows the field as a [`Slot`].
    fn slot(&mut self) -> Slot<'_>;
}

impl ColumnValue for String {
    const KIND: ColumnKind = ColumnKind::String;

    fn slot(&mut self) -> Slot<'_> {
        Slot::String(self)
    }
}

impl ColumnValue for Option<String> {
    const KIND: ColumnKind = ColumnKind::String;

    fn slot(&mut self) -> Slot<'_> {
        Slot::OptionalString(self)
    }
}

impl ColumnValue for i64 {
    const KIND: ColumnKind = ColumnKind::Integer;

    fn slot(&mut self) -> Slot<'_> {
        Slot::Integer(self)
    }
}

/// Binding between one entity field and its column alias.
pub struct Column<T> {
    /// Alias the field binds to, without the query prefix (e.g. `title`).
    pub alias: &'static str,
    /// Declared semantic kind of the field.
    pub kind: ColumnKind,
    /// Accessor returning the field as a [`Slot`].
    pub bind: fn(&mut T) -> Slot<'_>,
}

/// An entity that can be populated from a result row.
pub trait Record: Default + 'static {
    /// Column bindings in field declaration order. Aliases are unique.
    const COLUMNS: &'static [Column<Self>];
}

/// Decodes `row` into `target`, reading columns named `<prefix>.<alias>`.
///
/// On error the target may already hold some decoded fields and must be
/// discarded by the caller.
///
/// # Errors
///
/// Returns [`AppError::UnsupportedFieldType`] for the first present,
/// non-null column whose value does not match the field's declared kind.
pub fn decode<T: Record>(row: &Row, prefix: &str, target: &mut T) -> Result<(), AppError> {
    for column in T::COLUMNS {
        let name = format!("{}.{}", prefix, column.alias);
        let value = match row.get_raw(&name) {
            None | Some(JsonValue::Null) => continue,
            Some(value) => value,
        };

        match ((column.bind)(target), value) {
            (Slot::String(field), JsonValue::String(s)) => *field = s.clone(),
            (Slot::OptionalString(field), JsonValue::String(s)) => *field = Some(s.clone()),
            (Slot::Integer(field), JsonValue::Number(n)) if n.as_i64().is_some() => {
                *field = n.as_i64().unwrap_or_default();
            }
            (slot, other) => {
                return Err(AppError::UnsupportedFieldType {
                    column: name,
                    expected: slot.kind(),
                    found: value_type(other),
                })
            }
        }
    }
    Ok(())
}

/// Decodes a fresh `T` from `row`.
pub fn decode_new<T: Record>(row: &Row, prefix: &str) -> Result<T, AppError> {
    let mut record = T::default();
    decode(row, prefix, &mut record)?;
    Ok(record)
}

/// Reads an unprefixed string column such as an aliased `type(r) AS role`.
///
/// Absent and null columns both yield `None`.
pub fn read_string(row: &Row, column: &str) -> Result<Option<String>, AppError> {
    match row.get_raw(column) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(AppError::UnsupportedFieldType {
            column: column.to_string(),
            expected: ColumnKind::String,
            found: value_type(other),
        }),
    }
}

fn value_type(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(n) if n.as_i64().is_none() => "unsigned integer",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "list",
        JsonValue::Object(_) => "map",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record_columns;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq)]
    struct Track {
        id: String,
        label: Option<String>,
        length: i64,
    }

    record_columns!(Track {
        id: String => "id",
        label: Option<String> => "label",
        length: i64 => "length",
    });

    fn row(columns: &[(&str, JsonValue)]) -> Row {
        columns.iter().cloned().collect()
    }

    #[test]
    fn test_decode_copies_matching_columns() {
        let row = row(&[
            ("t.id", json!("t-1")),
            ("t.label", json!("Side A")),
            ("t.length", json!(241)),
        ]);

        let track: Track = decode_new(&row, "t").unwrap();
        assert_eq!(
            track,
            Track {
                id: "t-1".to_string(),
                label: Some("Side A".to_string()),
                length: 241,
            }
        );
    }

    #[test]
    fn test_decode_absent_columns_keep_defaults() {
        let row = row(&[("t.id", json!("t-1"))]);

        let track: Track = decode_new(&row, "t").unwrap();
        assert_eq!(track.id, "t-1");
        assert_eq!(track.label, None);
        assert_eq!(track.length, 0);
    }

    #[test]
    fn test_decode_null_behaves_like_absent() {
        let row = row(&[
            ("t.id", JsonValue::Null),
            ("t.label", JsonValue::Null),
            ("t.length", JsonValue::Null),
        ]);

        let track: Track = decode_new(&row, "t").unwrap();
        assert_eq!(track, Track::default());
    }

    #[test]
    fn test_decode_ignores_other_prefixes() {
        let row = row(&[("p.id", json!("p-1")), ("id", json!("bare"))]);

        let track: Track = decode_new(&row, "t").unwrap();
        assert_eq!(track, Track::default());
    }

    #[test]
    fn test_decode_string_into_integer_fails() {
        let row = row(&[("t.id", json!("t-1")), ("t.length", json!("241"))]);

        let err = decode_new::<Track>(&row, "t").unwrap_err();
        match err {
            AppError::UnsupportedFieldType {
                column,
                expected,
                found,
            } => {
                assert_eq!(column, "t.length");
                assert_eq!(expected, ColumnKind::Integer);
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_float_is_not_truncated() {
        let row = row(&[("t.length", json!(241.5))]);

        let err = decode_new::<Track>(&row, "t").unwrap_err();
        assert!(matches!(
            err,
            AppError::UnsupportedFieldType { found: "float", .. }
        ));
    }

    #[test]
    fn test_decode_integer_into_string_fails() {
        let row = row(&[("t.label", json!(7))]);

        let err = decode_new::<Track>(&row, "t").unwrap_err();
        assert!(matches!(
            err,
            AppError::UnsupportedFieldType {
                expected: ColumnKind::String,
                found: "integer",
                ..
            }
        ));
    }

    #[test]
    fn test_decode_stops_at_first_mismatch() {
        let row = row(&[
            ("t.id", json!(true)),
            ("t.label", json!("Side A")),
        ]);

        let mut track = Track::default();
        let err = decode(&row, "t", &mut track).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnsupportedFieldType { found: "boolean", .. }
        ));
        // label comes after the failing column and is never reached
        assert_eq!(track.label, None);
    }

    #[test]
    fn test_read_string() {
        let row = row(&[("role", json!("ACTED_IN")), ("count", json!(3))]);

        assert_eq!(
            read_string(&row, "role").unwrap(),
            Some("ACTED_IN".to_string())
        );
        assert_eq!(read_string(&row, "missing").unwrap(), None);
        assert!(read_string(&row, "count").is_err());
    }

    fn column_aliases<T: Record>() -> Vec<&'static str> {
        T::COLUMNS.iter().map(|c| c.alias).collect()
    }

    #[test]
    fn test_column_table_is_static() {
        let aliases: &'static [Column<Track>] = Track::COLUMNS;
        assert_eq!(aliases.len(), 3);
        assert_eq!(column_aliases::<Track>(), vec!["id", "label", "length"]);
    }

    #[test]
    fn test_column_table_order_and_kinds() {
        let columns: Vec<_> = Track::COLUMNS
            .iter()
            .map(|c| (c.alias, c.kind))
            .collect();
        assert_eq!(
            columns,
            vec![
                ("id", ColumnKind::String),
                ("label", ColumnKind::String),
                ("length", ColumnKind::Integer),
            ]
        );
    }
}
