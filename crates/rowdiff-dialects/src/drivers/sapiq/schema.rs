//! SAP IQ catalog introspection.
//!
//! `information_schema` is unreliable or absent on the Sybase family, so the
//! schema query joins the SYS catalog tables instead and projects them into
//! the fixed five-field row shape.

use crate::config::ConnectionInfo;
use crate::core::traits::SchemaReader;

/// Escape a SQL string literal value.
fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Schema reader over SYS.SYSCOLUMNS and friends.
///
/// Single-segment table paths resolve against the connecting user's schema,
/// falling back to the conventional `dbo` when the connection carries no
/// user.
#[derive(Debug, Clone, Copy, Default)]
pub struct SapIqSchemaReader;

impl SchemaReader for SapIqSchemaReader {
    fn backend(&self) -> &'static str {
        "sapiq"
    }

    fn default_schema(&self, info: &ConnectionInfo) -> String {
        if info.user.is_empty() {
            "dbo".to_string()
        } else {
            info.user.clone()
        }
    }

    fn schema_query(&self, schema: &str, table: &str) -> String {
        // Recovering the schema/table/column association takes a four-way
        // join; SYSCOLUMNS alone does not carry owner or table names. The
        // width column doubles as datetime and numeric precision, which is
        // how SYSCOLUMNS reports both.
        format!(
            "SELECT \
             c.column_name, \
             d.domain_name, \
             c.width AS datetime_precision, \
             c.width AS numeric_precision, \
             c.scale AS numeric_scale \
             FROM SYS.SYSCOLUMNS c \
             JOIN SYS.SYSDOMAIN d ON c.domain_id = d.domain_id \
             JOIN SYS.SYSTAB t ON c.table_id = t.table_id \
             JOIN SYS.SYSUSER u ON t.creator = u.user_id \
             WHERE u.user_name = '{schema}' AND t.table_name = '{table}' \
             ORDER BY c.column_id",
            schema = escape_sql_string(schema),
            table = escape_sql_string(table),
        )
    }
}
