//! Macros for query construction and record column tables.

/// Macro for inline Cypher queries with optional parameters.
///
/// # Usage
///
/// ```ignore
/// use cinegraph::cypher;
///
/// // Query without parameters
/// let query = cypher!(graph, "MATCH (m:Movie) RETURN m.uuid");
///
/// // Query with parameters
/// let query = cypher!(graph, "MATCH (m:Movie) WHERE m.uuid = $uuid RETURN m.uuid", uuid = id);
///
/// let rows = query.fetch_all().await?;
/// ```
#[macro_export]
macro_rules! cypher {
    // Query without parameters
    ($graph:expr, $query:expr) => {
        $graph.query($query)
    };
    // Query with parameters
    ($graph:expr, $query:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $graph.query($query)$(.param(stringify!($name), $value))+
    };
}

/// Implements [`Record`](crate::graph::Record) by listing each decodable
/// field with its type and column alias.
///
/// The field type is checked against the field itself, so a binding that
/// declares the wrong kind does not compile.
///
/// ```ignore
/// record_columns!(Movie {
///     uuid: String => "uuid",
///     released: i64 => "released",
/// });
/// ```
#[macro_export]
macro_rules! record_columns {
    ($record:ident { $($field:ident: $ty:ty => $alias:literal),+ $(,)? }) => {
        impl $crate::graph::Record for $record {
            const COLUMNS: &'static [$crate::graph::Column<Self>] = &[
                $($crate::graph::Column {
                    alias: $alias,
                    kind: <$ty as $crate::graph::ColumnValue>::KIND,
                    bind: {
                        fn bind(record: &mut $record) -> $crate::graph::Slot<'_> {
                            <$ty as $crate::graph::ColumnValue>::slot(&mut record.$field)
                        }
                        bind
                    },
                }),+
            ];
        }
    };
}
