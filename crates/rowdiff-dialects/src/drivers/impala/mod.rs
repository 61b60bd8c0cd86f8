//! Apache Impala backend binding.
//!
//! Key implementation choices:
//! - Hashing: `fnv_hash()` and `bitxor()`; MD5/SHA1 are often not built in.
//! - Schema reading: `information_schema.columns` (assumes a modern Impala).
//! - Connection: keyword-style parameters, default port 21050.
//! - Type names are matched case-insensitively; the catalog's reported case
//!   varies between Impala versions.
//! - Autocommit only; Impala has no multi-statement transactions.

mod connect;
mod dialect;
mod schema;

pub use connect::{ImpalaConnectionFactory, DEFAULT_PORT};
pub use dialect::ImpalaDialect;
pub use schema::ImpalaSchemaReader;

use std::sync::Arc;

use crate::config::ConnectionInfo;
use crate::core::types::{CaseMatch, ColKind, TypeMap};
use crate::drivers::{Database, DialectImpl};

/// Impala's native type names mapped to portable kinds.
static IMPALA_TYPES: &[(&str, ColKind)] = &[
    ("STRING", ColKind::String),
    ("VARCHAR", ColKind::Varchar),
    ("CHAR", ColKind::Char),
    ("BOOLEAN", ColKind::Boolean),
    ("TINYINT", ColKind::TinyInt),
    ("SMALLINT", ColKind::SmallInt),
    ("INT", ColKind::Int),
    ("BIGINT", ColKind::BigInt),
    ("FLOAT", ColKind::Float),
    ("DOUBLE", ColKind::Double),
    ("REAL", ColKind::Real),
    ("DECIMAL", ColKind::Decimal),
    ("TIMESTAMP", ColKind::Timestamp),
    ("DATE", ColKind::Date),
];

/// The Impala type map.
pub fn type_map() -> TypeMap {
    TypeMap::new("impala", CaseMatch::Insensitive, IMPALA_TYPES)
}

/// Bind all Impala strategies into a [`Database`] owning `info`.
pub fn database(info: ConnectionInfo) -> Database {
    Database::new(
        "impala",
        info,
        DialectImpl::Impala(ImpalaDialect::new()),
        type_map(),
        Arc::new(ImpalaSchemaReader),
        Arc::new(ImpalaConnectionFactory),
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::RawSchemaRow;

    #[test]
    fn test_type_map_complete() {
        let map = type_map();
        for name in map.native_names() {
            assert!(map.resolve(name).is_ok(), "unresolvable entry: {name}");
        }
    }

    #[test]
    fn test_type_map_case_insensitive() {
        let map = type_map();
        assert_eq!(map.resolve("bigint").unwrap(), ColKind::BigInt);
        assert_eq!(map.resolve("Timestamp").unwrap(), ColKind::Timestamp);
    }

    #[test]
    fn test_unknown_type_errors() {
        assert!(type_map().resolve("MAP<STRING,INT>").is_err());
    }

    #[test]
    fn test_database_is_autocommit_only() {
        let db = database(ConnectionInfo::new("h", "d"));
        assert!(!db.supports_multi_statement_transactions());
        assert_eq!(db.name(), "impala");
    }

    // Schema query for a table shaped (id INT, name VARCHAR) must map to
    // Int and Varchar descriptors in catalog column order.
    #[test]
    fn test_catalog_rows_map_in_order() {
        let db = database(ConnectionInfo::new("h", "sales"));
        let rows = [
            RawSchemaRow {
                column_name: "id".into(),
                native_type: "INT".into(),
                datetime_precision: None,
                numeric_precision: Some(10),
                numeric_scale: Some(0),
            },
            RawSchemaRow {
                column_name: "name".into(),
                native_type: "VARCHAR".into(),
                datetime_precision: None,
                numeric_precision: None,
                numeric_scale: None,
            },
        ];
        let kinds: Vec<ColKind> = rows
            .iter()
            .map(|r| db.column_type(r).unwrap().kind)
            .collect();
        assert_eq!(kinds, vec![ColKind::Int, ColKind::Varchar]);
    }
}
