//! # rowdiff-dialects
//!
//! Database dialect bindings for the rowdiff table-diffing engine.
//!
//! The diff engine compares two tables by chunking them and comparing group
//! checksums instead of transferring rows. This crate supplies everything
//! backend-specific that makes that possible:
//!
//! - **Hash strategy**: backend-native hash + bitwise-XOR aggregate
//!   expressions reducing a chunk of rows to one integer fingerprint
//! - **Type mapping**: native type names resolved to a fixed portable enum
//! - **Catalog introspection**: table-path normalization and schema queries
//!   projected into one fixed five-field row shape
//! - **Connections**: parameter translation (keyword or DSN style) and
//!   one-shot native connection construction with lazy driver resolution
//!
//! ## Example
//!
//! ```rust
//! use rowdiff_dialects::{ConnectionInfo, Dialect, DriverRegistry};
//!
//! fn main() -> rowdiff_dialects::Result<()> {
//!     let registry = DriverRegistry::with_builtins();
//!     let info = ConnectionInfo::new("impala.internal", "sales");
//!     let db = registry.build("impala", info)?;
//!
//!     let agg = db.dialect().aggregate_hash(&["id".to_string(), "name".to_string()]);
//!     assert_eq!(agg, "bitxor(fnv_hash(id || '#' || name))");
//!
//!     let sql = db.schema_query(&["events".to_string()])?;
//!     assert!(sql.contains("information_schema.columns"));
//!     Ok(())
//! }
//! ```
//!
//! All SQL generation is pure and stateless; only [`Database::connect`]
//! touches the network, and the resulting connection's threading discipline
//! belongs to the caller's pool.

pub mod config;
pub mod core;
pub mod drivers;
pub mod error;

// Re-exports for convenient access
pub use config::ConnectionInfo;
pub use self::core::fingerprint::{combine, Fingerprint};
pub use self::core::traits::{ConnectionFactory, Dialect, SchemaReader, CONCAT_SEPARATOR};
pub use self::core::types::{CaseMatch, ColKind, ColumnType, RawSchemaRow, TypeMap};
pub use drivers::{
    ConnectionSpec, Database, DialectImpl, DriverRegistry, KeywordParams, NativeConnection,
};
pub use error::{DialectError, Result};
