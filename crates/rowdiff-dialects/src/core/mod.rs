//! Backend-independent core of the dialect layer.

pub mod fingerprint;
pub mod traits;
pub mod types;

pub use fingerprint::Fingerprint;
pub use traits::{ConnectionFactory, Dialect, SchemaReader, CONCAT_SEPARATOR};
pub use types::{CaseMatch, ColKind, ColumnType, RawSchemaRow, TypeMap};
