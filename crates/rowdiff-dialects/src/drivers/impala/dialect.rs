//! Impala SQL dialect.
//!
//! Impala ships without MD5/SHA1 in most builds, but its built-in
//! `fnv_hash()` already returns a BIGINT, and `bitxor()` provides the
//! bitwise-XOR aggregate. That pair gives group fingerprints without any
//! hex-to-integer conversion step.

use crate::core::traits::Dialect;
use crate::core::types::{ColKind, ColumnType};

/// Impala dialect implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpalaDialect;

impl ImpalaDialect {
    /// Create a new Impala dialect instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dialect for ImpalaDialect {
    fn name(&self) -> &'static str {
        "impala"
    }

    fn concat_op(&self) -> &'static str {
        "||"
    }

    fn hash_expr(&self, expr: &str) -> String {
        format!("fnv_hash({expr})")
    }

    fn xor_agg(&self, expr: &str) -> String {
        format!("bitxor({expr})")
    }

    fn normalize_value(&self, expr: &str, ty: &ColumnType) -> String {
        match ty.kind {
            // Casting to STRING is the most reliable canonical form Impala
            // offers for temporal values; TO_CHAR-style formatting is not
            // available on older versions.
            ColKind::Timestamp | ColKind::Date => format!("CAST({expr} AS STRING)"),
            kind if kind.is_text() => expr.to_string(),
            ColKind::Boolean => format!("CAST(CAST({expr} AS INT) AS STRING)"),
            _ => format!("CAST({expr} AS STRING)"),
        }
    }
}
