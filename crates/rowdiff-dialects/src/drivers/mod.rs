//! Backend bindings and the driver registry.
//!
//! Each backend module implements the core strategy traits:
//!
//! - [`impala`]: Apache Impala (fnv_hash/bitxor, information_schema)
//! - [`sapiq`]: SAP IQ (CHECKSUM/BIT_XOR, SYS catalog)
//! - [`common`]: shared connection plumbing
//!
//! A [`Database`] is the composition root binding one dialect, type map,
//! schema reader, and connection factory under a backend name. The
//! [`DriverRegistry`] maps backend names (and their aliases) to database
//! constructors, replacing any implicit global driver state with explicit,
//! deterministic registration.
//!
//! # Dispatch
//!
//! Dialects use enum-based static dispatch through [`DialectImpl`]; the
//! compiler generates a match instead of a vtable. Schema readers and
//! connection factories are held as `Arc<dyn Trait>`; they are only touched
//! at metadata/connect time, so dynamic dispatch costs nothing measurable.
//!
//! # Adding new backends
//!
//! 1. Create a module under `drivers/` implementing `Dialect`,
//!    `SchemaReader`, and `ConnectionFactory`
//! 2. Add a `DialectImpl` variant
//! 3. Register a constructor (plus aliases) in
//!    [`DriverRegistry::with_builtins`]

pub mod common;
pub mod impala;
pub mod sapiq;

pub use common::{ConnectionSpec, KeywordParams, NativeConnection};
pub use impala::ImpalaDialect;
pub use sapiq::SapIqDialect;

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::ConnectionInfo;
use crate::core::traits::{ConnectionFactory, Dialect, SchemaReader};
use crate::core::types::{ColumnType, RawSchemaRow, TypeMap};
use crate::error::{DialectError, Result};

/// Enum-based static dispatch for dialects.
#[derive(Debug, Clone, Copy)]
pub enum DialectImpl {
    Impala(ImpalaDialect),
    SapIq(SapIqDialect),
}

impl Dialect for DialectImpl {
    fn name(&self) -> &'static str {
        match self {
            DialectImpl::Impala(d) => d.name(),
            DialectImpl::SapIq(d) => d.name(),
        }
    }

    fn concat_op(&self) -> &'static str {
        match self {
            DialectImpl::Impala(d) => d.concat_op(),
            DialectImpl::SapIq(d) => d.concat_op(),
        }
    }

    fn hash_expr(&self, expr: &str) -> String {
        match self {
            DialectImpl::Impala(d) => d.hash_expr(expr),
            DialectImpl::SapIq(d) => d.hash_expr(expr),
        }
    }

    fn xor_agg(&self, expr: &str) -> String {
        match self {
            DialectImpl::Impala(d) => d.xor_agg(expr),
            DialectImpl::SapIq(d) => d.xor_agg(expr),
        }
    }

    fn concat(&self, columns: &[String]) -> String {
        match self {
            DialectImpl::Impala(d) => d.concat(columns),
            DialectImpl::SapIq(d) => d.concat(columns),
        }
    }

    fn aggregate_hash(&self, columns: &[String]) -> String {
        match self {
            DialectImpl::Impala(d) => d.aggregate_hash(columns),
            DialectImpl::SapIq(d) => d.aggregate_hash(columns),
        }
    }

    fn normalize_value(&self, expr: &str, ty: &ColumnType) -> String {
        match self {
            DialectImpl::Impala(d) => d.normalize_value(expr, ty),
            DialectImpl::SapIq(d) => d.normalize_value(expr, ty),
        }
    }
}

/// One named backend: dialect + type map + schema reader + connection
/// factory, owning its [`ConnectionInfo`].
///
/// This is the object the diff engine talks to. Everything except
/// [`connect`](Self::connect) is pure SQL/text generation and safe to call
/// concurrently.
#[derive(Clone)]
pub struct Database {
    name: &'static str,
    info: ConnectionInfo,
    dialect: DialectImpl,
    types: TypeMap,
    schema: Arc<dyn SchemaReader>,
    factory: Arc<dyn ConnectionFactory>,
    supports_transactions: bool,
}

impl Database {
    /// Bind the given strategies under `name`.
    pub fn new(
        name: &'static str,
        info: ConnectionInfo,
        dialect: DialectImpl,
        types: TypeMap,
        schema: Arc<dyn SchemaReader>,
        factory: Arc<dyn ConnectionFactory>,
        supports_transactions: bool,
    ) -> Self {
        Self {
            name,
            info,
            dialect,
            types,
            schema,
            factory,
            supports_transactions,
        }
    }

    /// Backend name (e.g. "impala").
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The connection parameters this database was built with.
    pub fn connection_info(&self) -> &ConnectionInfo {
        &self.info
    }

    /// The SQL generation strategy.
    pub fn dialect(&self) -> &DialectImpl {
        &self.dialect
    }

    /// The native-type table.
    pub fn type_map(&self) -> &TypeMap {
        &self.types
    }

    /// Whether the backend supports multi-statement transactions.
    ///
    /// The diff engine must consult this before attempting transactional
    /// batching and fall back to autocommit-safe execution when false.
    pub fn supports_multi_statement_transactions(&self) -> bool {
        self.supports_transactions
    }

    /// Normalize a 1- or 2-part table path to `(schema, table)`.
    pub fn normalize_table_path(&self, path: &[String]) -> Result<(String, String)> {
        self.schema.normalize_table_path(&self.info, path)
    }

    /// Build the catalog query for a table path.
    pub fn schema_query(&self, path: &[String]) -> Result<String> {
        let (schema, table) = self.normalize_table_path(path)?;
        Ok(self.schema.schema_query(&schema, &table))
    }

    /// Resolve one catalog row into a portable column descriptor.
    pub fn column_type(&self, row: &RawSchemaRow) -> Result<ColumnType> {
        self.types.column_type(row)
    }

    /// Backend-specific connection parameters, without connecting.
    pub fn connection_spec(&self) -> ConnectionSpec {
        self.factory.connection_spec(&self.info)
    }

    /// Open a fresh native connection.
    ///
    /// One-shot: the caller (connection pool) owns the result and its
    /// single-threaded usage discipline.
    pub fn connect(&self) -> Result<NativeConnection> {
        debug!(backend = self.name, host = %self.info.host, "creating native connection");
        self.factory.connect(&self.info)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("name", &self.name)
            .field("host", &self.info.host)
            .field("database", &self.info.database)
            .finish_non_exhaustive()
    }
}

/// Constructor signature registered per backend.
pub type BuildFn = fn(ConnectionInfo) -> Database;

/// Registry of backend constructors.
///
/// Explicitly constructed and injected rather than global: deterministic
/// initialization, easy to extend in tests, no registration macros.
#[derive(Default)]
pub struct DriverRegistry {
    builders: HashMap<String, BuildFn>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in backends registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("impala", impala::database);
        registry.register("sapiq", sapiq::database);
        registry.register("sap_iq", sapiq::database);
        registry.register("iq", sapiq::database);
        registry
    }

    /// Register a backend constructor under `name` (lowercased).
    pub fn register(&mut self, name: &str, build: BuildFn) {
        self.builders.insert(name.to_lowercase(), build);
    }

    /// Names currently registered, sorted.
    pub fn backends(&self) -> Vec<String> {
        let mut names: Vec<String> = self.builders.keys().cloned().collect();
        names.sort();
        names
    }

    /// Build a [`Database`] for `name`, matched case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnknownBackend`] listing the registered
    /// names when `name` is not found.
    pub fn build(&self, name: &str, info: ConnectionInfo) -> Result<Database> {
        match self.builders.get(&name.to_lowercase()) {
            Some(build) => {
                debug!(backend = name, "resolved backend constructor");
                Ok(build(info))
            }
            None => Err(DialectError::UnknownBackend {
                name: name.to_string(),
                known: self.backends(),
            }),
        }
    }
}
