//! Core traits of the dialect abstraction.
//!
//! This module defines the contract every backend binding must satisfy so
//! that the generic diff engine can consume hash expressions, catalog
//! metadata, and native connections interchangeably:
//!
//! - [`Dialect`]: SQL generation strategy for hashing, concatenation, and
//!   value normalization
//! - [`SchemaReader`]: table-path normalization and catalog query generation
//! - [`ConnectionFactory`]: connection-parameter translation and one-shot
//!   native connection construction
//!
//! All SQL generation here is pure text production: no I/O, no mutable
//! state, safe to call concurrently from any number of threads.

use crate::config::ConnectionInfo;
use crate::drivers::common::{ConnectionSpec, NativeConnection};
use crate::error::{DialectError, Result};

use super::types::{ColKind, ColumnType};

/// Separator inserted between concatenated column values.
///
/// Prevents boundary collisions: without it, `("ab", "c")` and `("a", "bc")`
/// would concatenate to the same string and hash identically.
pub const CONCAT_SEPARATOR: &str = "'#'";

/// SQL generation strategy for a database engine.
///
/// Implementations are stateless values constructed once per backend. The
/// trait is used with enum dispatch via
/// [`DialectImpl`](crate::drivers::DialectImpl).
pub trait Dialect: Send + Sync {
    /// Get the dialect identifier (e.g. "impala", "sapiq").
    fn name(&self) -> &'static str;

    /// The backend's string-concatenation operator (`||`, `+`, ...).
    fn concat_op(&self) -> &'static str;

    /// SQL computing a single integer fingerprint of `expr`.
    ///
    /// The hash primitive is backend-native and need not be MD5; any
    /// deterministic hash that yields an integer (or is cast to one) works.
    fn hash_expr(&self, expr: &str) -> String;

    /// Wrap `expr` in the backend's commutative bitwise-XOR aggregate.
    fn xor_agg(&self, expr: &str) -> String;

    /// Concatenate column expressions with the fixed boundary separator.
    ///
    /// A single column is passed through unchanged.
    fn concat(&self, columns: &[String]) -> String {
        if columns.len() == 1 {
            return columns[0].clone();
        }
        let sep = format!(" {op} {CONCAT_SEPARATOR} {op} ", op = self.concat_op());
        columns.join(&sep)
    }

    /// SQL reducing a group of rows to one scalar fingerprint.
    ///
    /// Concatenates the columns, hashes the result, and XOR-aggregates the
    /// per-row hashes. XOR makes the group fingerprint independent of row
    /// order. Known caveat, preserved deliberately: rows whose fingerprints
    /// collide with even multiplicity cancel out of the aggregate; that is
    /// the accepted precision tradeoff of this checksum family.
    fn aggregate_hash(&self, columns: &[String]) -> String {
        self.xor_agg(&self.hash_expr(&self.concat(columns)))
    }

    /// SQL casting/formatting `expr` into one canonical textual form for
    /// cross-backend comparison.
    ///
    /// The default covers the common kinds; backends override where their
    /// engine needs different spellings (most often timestamps).
    fn normalize_value(&self, expr: &str, ty: &ColumnType) -> String {
        match ty.kind {
            kind if kind.is_text() => expr.to_string(),
            ColKind::Boolean => format!("CAST(CAST({expr} AS INT) AS VARCHAR(1))"),
            ColKind::Timestamp | ColKind::Date => format!("CAST({expr} AS VARCHAR(32))"),
            _ => format!("CAST({expr} AS VARCHAR(64))"),
        }
    }
}

/// Catalog introspection strategy for a database engine.
///
/// Defines how a 1- or 2-part table path resolves to `(schema, table)` and
/// what query projects the backend's catalog into the fixed five-field row
/// shape (see [`RawSchemaRow`](crate::core::RawSchemaRow)).
pub trait SchemaReader: Send + Sync {
    /// Get the backend identifier.
    fn backend(&self) -> &'static str;

    /// The schema assumed when a path has a single segment.
    ///
    /// Either a fixed constant or derived from the connection (e.g. the
    /// connecting user); each binding documents which.
    fn default_schema(&self, info: &ConnectionInfo) -> String;

    /// Build the catalog query for `(schema, table)`.
    ///
    /// Must return exactly five logical fields in fixed order: column name,
    /// native type name, nullable datetime precision, nullable numeric
    /// precision, nullable numeric scale.
    fn schema_query(&self, schema: &str, table: &str) -> String;

    /// Normalize a caller-supplied table path to `(schema, table)`.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::InvalidTablePath`] for any path length
    /// outside 1..=2, carrying the offending path.
    fn normalize_table_path(
        &self,
        info: &ConnectionInfo,
        path: &[String],
    ) -> Result<(String, String)> {
        match path {
            [table] => Ok((self.default_schema(info), table.clone())),
            [schema, table] => Ok((schema.clone(), table.clone())),
            _ => Err(DialectError::InvalidTablePath {
                backend: self.backend(),
                path: path.to_vec(),
            }),
        }
    }
}

/// One-shot native connection constructor for a database engine.
///
/// Translates [`ConnectionInfo`] into the parameter shape the vendor client
/// expects and resolves the client library lazily, at connection-build time.
/// No pooling, retries, or health checks live here; those belong to the pool
/// collaborator.
pub trait ConnectionFactory: Send + Sync {
    /// Get the backend identifier.
    fn backend(&self) -> &'static str;

    /// Default port applied when [`ConnectionInfo::port`] is unset.
    fn default_port(&self) -> Option<u16>;

    /// Actionable remediation hint for a missing vendor client.
    fn driver_hint(&self) -> &'static str;

    /// Translate connection info into backend-specific parameters.
    ///
    /// Pure; performs no I/O. Keyword-style backends produce structured
    /// parameters, DSN-style backends a single delimited string.
    fn connection_spec(&self, info: &ConnectionInfo) -> ConnectionSpec;

    /// Build a native connection.
    ///
    /// # Errors
    ///
    /// - [`DialectError::MissingDriver`] when the vendor client library is
    ///   absent, with [`driver_hint`](Self::driver_hint) attached
    /// - [`DialectError::ConnectionFailure`] when the native connect call
    ///   fails
    fn connect(&self, info: &ConnectionInfo) -> Result<NativeConnection> {
        let spec = self.connection_spec(info);
        crate::drivers::common::open_native(self.backend(), self.driver_hint(), &spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeDialect;

    impl Dialect for FakeDialect {
        fn name(&self) -> &'static str {
            "fake"
        }
        fn concat_op(&self) -> &'static str {
            "||"
        }
        fn hash_expr(&self, expr: &str) -> String {
            format!("hash({expr})")
        }
        fn xor_agg(&self, expr: &str) -> String {
            format!("xor_agg({expr})")
        }
    }

    #[test]
    fn test_concat_inserts_separator() {
        let d = FakeDialect;
        let sql = d.concat(&["a".to_string(), "b".to_string()]);
        assert_eq!(sql, "a || '#' || b");
    }

    #[test]
    fn test_concat_single_column_passthrough() {
        let d = FakeDialect;
        assert_eq!(d.concat(&["only".to_string()]), "only");
    }

    #[test]
    fn test_aggregate_hash_composition() {
        let d = FakeDialect;
        let sql = d.aggregate_hash(&["a".to_string(), "b".to_string()]);
        assert_eq!(sql, "xor_agg(hash(a || '#' || b))");
    }

    #[test]
    fn test_hash_expr_deterministic() {
        let d = FakeDialect;
        assert_eq!(d.hash_expr("col"), d.hash_expr("col"));
    }
}
