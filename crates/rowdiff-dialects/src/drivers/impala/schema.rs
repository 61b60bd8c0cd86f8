//! Impala catalog introspection.

use crate::config::ConnectionInfo;
use crate::core::traits::SchemaReader;

/// Escape a SQL string literal value.
/// Doubles single quotes: `O'Brien` -> `O''Brien`
fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Schema reader backed by `information_schema.columns`.
///
/// Single-segment table paths resolve against the fixed `default` database,
/// matching Impala's own unqualified-name resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpalaSchemaReader;

impl SchemaReader for ImpalaSchemaReader {
    fn backend(&self) -> &'static str {
        "impala"
    }

    fn default_schema(&self, _info: &ConnectionInfo) -> String {
        "default".to_string()
    }

    fn schema_query(&self, schema: &str, table: &str) -> String {
        // Impala's information_schema does not expose datetime precision,
        // so that field is projected as NULL to keep the five-field shape.
        format!(
            "SELECT column_name, data_type, \
             NULL AS datetime_precision, numeric_precision, numeric_scale \
             FROM information_schema.columns \
             WHERE table_schema = '{schema}' AND table_name = '{table}' \
             ORDER BY ordinal_position",
            schema = escape_sql_string(schema),
            table = escape_sql_string(table),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialectError;

    fn info() -> ConnectionInfo {
        ConnectionInfo::new("impala.internal", "sales")
    }

    #[test]
    fn test_default_schema_is_fixed() {
        assert_eq!(ImpalaSchemaReader.default_schema(&info()), "default");
    }

    #[test]
    fn test_normalize_one_part_path() {
        let (schema, table) = ImpalaSchemaReader
            .normalize_table_path(&info(), &["events".to_string()])
            .unwrap();
        assert_eq!((schema.as_str(), table.as_str()), ("default", "events"));
    }

    #[test]
    fn test_normalize_two_part_path_verbatim() {
        let (schema, table) = ImpalaSchemaReader
            .normalize_table_path(&info(), &["sales".to_string(), "events".to_string()])
            .unwrap();
        assert_eq!((schema.as_str(), table.as_str()), ("sales", "events"));
    }

    #[test]
    fn test_normalize_three_part_path_fails() {
        let path = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let err = ImpalaSchemaReader
            .normalize_table_path(&info(), &path)
            .unwrap_err();
        match err {
            DialectError::InvalidTablePath { backend, path } => {
                assert_eq!(backend, "impala");
                assert_eq!(path.len(), 3);
            }
            other => panic!("expected InvalidTablePath, got {other}"),
        }
    }

    #[test]
    fn test_schema_query_shape() {
        let sql = ImpalaSchemaReader.schema_query("sales", "events");
        assert!(sql.contains("information_schema.columns"));
        assert!(sql.contains("column_name"));
        assert!(sql.contains("data_type"));
        assert!(sql.contains("NULL AS datetime_precision"));
        assert!(sql.contains("numeric_precision"));
        assert!(sql.contains("numeric_scale"));
        assert!(sql.contains("table_schema = 'sales'"));
        assert!(sql.contains("table_name = 'events'"));
    }

    #[test]
    fn test_schema_query_escapes_quotes() {
        let sql = ImpalaSchemaReader.schema_query("o'brien", "t");
        assert!(sql.contains("'o''brien'"));
    }
}
