//! SAP IQ backend binding.
//!
//! Key implementation choices:
//! - Hashing: `CHECKSUM()` cast to BIGINT, aggregated with `BIT_XOR`.
//! - Schema reading: SYS catalog join (SYSCOLUMNS/SYSDOMAIN/SYSTAB/SYSUSER);
//!   `information_schema` is not dependable on the Sybase family.
//! - String concat: `+` operator.
//! - Connection: DSN-style string for the SQL Anywhere client.
//! - Type names are matched case-sensitively against the lowercase domain
//!   names the SYS catalog reports.
//! - Autocommit only; multi-statement transactions are not supported by
//!   this binding.

mod connect;
mod dialect;
mod schema;

pub use connect::SapIqConnectionFactory;
pub use dialect::SapIqDialect;
pub use schema::SapIqSchemaReader;

use std::sync::Arc;

use crate::config::ConnectionInfo;
use crate::core::types::{CaseMatch, ColKind, TypeMap};
use crate::drivers::{Database, DialectImpl};

/// SAP IQ's native domain names mapped to portable kinds.
static SAPIQ_TYPES: &[(&str, ColKind)] = &[
    ("char", ColKind::Char),
    ("varchar", ColKind::Varchar),
    ("string", ColKind::String),
    ("int", ColKind::Int),
    ("integer", ColKind::Int),
    ("smallint", ColKind::SmallInt),
    ("tinyint", ColKind::TinyInt),
    ("bigint", ColKind::BigInt),
    ("decimal", ColKind::Decimal),
    ("numeric", ColKind::Decimal),
    ("float", ColKind::Float),
    ("double", ColKind::Double),
    ("date", ColKind::Date),
    ("timestamp", ColKind::Timestamp),
    ("datetime", ColKind::Timestamp),
    ("bit", ColKind::Boolean),
];

/// The SAP IQ type map.
pub fn type_map() -> TypeMap {
    TypeMap::new("sapiq", CaseMatch::Sensitive, SAPIQ_TYPES)
}

/// Bind all SAP IQ strategies into a [`Database`] owning `info`.
pub fn database(info: ConnectionInfo) -> Database {
    Database::new(
        "sapiq",
        info,
        DialectImpl::SapIq(SapIqDialect::new()),
        type_map(),
        Arc::new(SapIqSchemaReader),
        Arc::new(SapIqConnectionFactory),
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_map_complete() {
        let map = type_map();
        for name in map.native_names() {
            assert!(map.resolve(name).is_ok(), "unresolvable entry: {name}");
        }
    }

    #[test]
    fn test_type_map_case_sensitive() {
        let map = type_map();
        assert_eq!(map.resolve("varchar").unwrap(), ColKind::Varchar);
        assert!(map.resolve("VARCHAR").is_err());
    }

    #[test]
    fn test_numeric_aliases_share_kind() {
        let map = type_map();
        assert_eq!(map.resolve("decimal").unwrap(), map.resolve("numeric").unwrap());
        assert_eq!(map.resolve("int").unwrap(), map.resolve("integer").unwrap());
    }

    #[test]
    fn test_database_is_autocommit_only() {
        let db = database(ConnectionInfo::new("h", "d"));
        assert!(!db.supports_multi_statement_transactions());
        assert_eq!(db.name(), "sapiq");
    }
}
