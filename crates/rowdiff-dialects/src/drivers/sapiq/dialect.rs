//! SAP IQ SQL dialect.
//!
//! Sybase-family hashing: `CHECKSUM()` returns an INT, cast to BIGINT before
//! the `BIT_XOR` aggregate so group fingerprints use the full 64-bit space.
//! String concatenation uses the `+` operator.

use crate::core::traits::Dialect;
use crate::core::types::{ColKind, ColumnType};

/// SAP IQ dialect implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SapIqDialect;

impl SapIqDialect {
    /// Create a new SAP IQ dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for SapIqDialect {
    fn name(&self) -> &'static str {
        "sapiq"
    }

    fn concat_op(&self) -> &'static str {
        "+"
    }

    fn hash_expr(&self, expr: &str) -> String {
        format!("CAST(CHECKSUM({expr}) AS BIGINT)")
    }

    fn xor_agg(&self, expr: &str) -> String {
        format!("BIT_XOR({expr})")
    }

    fn normalize_value(&self, expr: &str, ty: &ColumnType) -> String {
        match ty.kind {
            // CONVERT style 121 yields ODBC canonical
            // `yyyy-mm-dd hh:nn:ss.ssssss` on the Sybase family.
            ColKind::Timestamp => format!("CONVERT(VARCHAR(30), {expr}, 121)"),
            ColKind::Date => format!("CONVERT(VARCHAR(10), {expr}, 23)"),
            kind if kind.is_text() => expr.to_string(),
            ColKind::Boolean => format!("CAST(CAST({expr} AS INT) AS VARCHAR(1))"),
            _ => format!("CAST({expr} AS VARCHAR(64))"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(kind: ColKind) -> ColumnType {
        ColumnType {
            native_name: kind.as_str().to_string(),
            kind,
            precision: None,
            scale: None,
        }
    }

    #[test]
    fn test_hash_expr_casts_to_bigint() {
        let d = SapIqDialect::new();
        assert_eq!(d.hash_expr("name"), "CAST(CHECKSUM(name) AS BIGINT)");
    }

    #[test]
    fn test_aggregate_hash_shape() {
        let d = SapIqDialect::new();
        let sql = d.aggregate_hash(&["id".to_string(), "name".to_string()]);
        assert_eq!(
            sql,
            "BIT_XOR(CAST(CHECKSUM(id + '#' + name) AS BIGINT))"
        );
    }

    #[test]
    fn test_concat_uses_plus_operator() {
        let d = SapIqDialect::new();
        let sql = d.concat(&["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(sql, "a + '#' + b + '#' + c");
    }

    #[test]
    fn test_normalize_timestamp_convert_121() {
        let d = SapIqDialect::new();
        assert_eq!(
            d.normalize_value("created_at", &column(ColKind::Timestamp)),
            "CONVERT(VARCHAR(30), created_at, 121)"
        );
    }

    #[test]
    fn test_normalize_boolean() {
        let d = SapIqDialect::new();
        assert_eq!(
            d.normalize_value("active", &column(ColKind::Boolean)),
            "CAST(CAST(active AS INT) AS VARCHAR(1))"
        );
    }
}
