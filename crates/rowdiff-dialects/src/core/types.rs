//! Portable column types and schema rows.
//!
//! These types provide the backend-independent representation of column
//! metadata that the diff engine consumes. Every backend projects its native
//! catalog into [`RawSchemaRow`] values, which a [`TypeMap`] then resolves
//! into [`ColumnType`] descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

/// The fixed, backend-independent enumeration of column kinds.
///
/// The diff engine chooses its comparison strategy per column from this tag
/// (e.g. numeric tolerance for `Decimal`, canonical text for `Timestamp`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColKind {
    String,
    Varchar,
    Char,
    Boolean,
    TinyInt,
    SmallInt,
    Int,
    BigInt,
    Float,
    Double,
    Real,
    Decimal,
    Timestamp,
    Date,
}

impl ColKind {
    /// Whether this kind carries numeric precision/scale.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            ColKind::TinyInt
                | ColKind::SmallInt
                | ColKind::Int
                | ColKind::BigInt
                | ColKind::Float
                | ColKind::Double
                | ColKind::Real
                | ColKind::Decimal
        )
    }

    /// Whether this kind carries a datetime precision.
    pub fn is_temporal(self) -> bool {
        matches!(self, ColKind::Timestamp | ColKind::Date)
    }

    /// Whether values of this kind are already textual.
    pub fn is_text(self) -> bool {
        matches!(self, ColKind::String | ColKind::Varchar | ColKind::Char)
    }

    /// Stable lowercase name, used in logs and serialized descriptors.
    pub fn as_str(self) -> &'static str {
        match self {
            ColKind::String => "string",
            ColKind::Varchar => "varchar",
            ColKind::Char => "char",
            ColKind::Boolean => "boolean",
            ColKind::TinyInt => "tinyint",
            ColKind::SmallInt => "smallint",
            ColKind::Int => "int",
            ColKind::BigInt => "bigint",
            ColKind::Float => "float",
            ColKind::Double => "double",
            ColKind::Real => "real",
            ColKind::Decimal => "decimal",
            ColKind::Timestamp => "timestamp",
            ColKind::Date => "date",
        }
    }
}

impl fmt::Display for ColKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Portable descriptor for one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    /// The type name as reported by the backend catalog.
    pub native_name: String,
    /// Portable kind resolved from the backend's type table.
    pub kind: ColKind,
    /// Datetime precision for temporal kinds, numeric precision otherwise.
    pub precision: Option<u32>,
    /// Numeric scale, where the catalog reports one.
    pub scale: Option<u32>,
}

/// One row of the fixed five-field catalog projection.
///
/// Every backend's schema query returns rows in exactly this shape, whatever
/// the physical layout of its catalog:
/// `(column_name, native_type_name, datetime_precision?, numeric_precision?,
/// numeric_scale?)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSchemaRow {
    pub column_name: String,
    pub native_type: String,
    pub datetime_precision: Option<u32>,
    pub numeric_precision: Option<u32>,
    pub numeric_scale: Option<u32>,
}

/// How a backend matches native type names against its type table.
///
/// The convention varies by backend and is declared explicitly per binding
/// rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMatch {
    /// Names must match the table entries byte for byte.
    Sensitive,
    /// Names are compared ASCII case-insensitively.
    Insensitive,
}

/// Fixed mapping from native type-name strings to portable kinds.
///
/// Constructed once per backend from a static table. Lookup failure is an
/// [`DialectError::UnsupportedType`] error, never a silent default.
#[derive(Debug, Clone)]
pub struct TypeMap {
    backend: &'static str,
    case: CaseMatch,
    entries: &'static [(&'static str, ColKind)],
}

impl TypeMap {
    /// Create a type map over a static entry table.
    pub const fn new(
        backend: &'static str,
        case: CaseMatch,
        entries: &'static [(&'static str, ColKind)],
    ) -> Self {
        Self {
            backend,
            case,
            entries,
        }
    }

    /// Backend this map belongs to.
    pub fn backend(&self) -> &'static str {
        self.backend
    }

    /// The declared name-matching convention.
    pub fn case_match(&self) -> CaseMatch {
        self.case
    }

    /// All native names in the fixed table.
    pub fn native_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Resolve a native type name to its portable kind.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedType`] when the name is not in the
    /// table.
    pub fn resolve(&self, native: &str) -> Result<ColKind> {
        let hit = self.entries.iter().find(|(name, _)| match self.case {
            CaseMatch::Sensitive => *name == native,
            CaseMatch::Insensitive => name.eq_ignore_ascii_case(native),
        });

        match hit {
            Some((_, kind)) => Ok(*kind),
            None => Err(DialectError::UnsupportedType {
                backend: self.backend,
                native_type: native.to_string(),
            }),
        }
    }

    /// Resolve a raw catalog row into a portable column descriptor.
    ///
    /// Temporal kinds take their precision from `datetime_precision`, numeric
    /// kinds from `numeric_precision`; other kinds carry none.
    pub fn column_type(&self, row: &RawSchemaRow) -> Result<ColumnType> {
        let kind = self.resolve(&row.native_type)?;
        let precision = if kind.is_temporal() {
            row.datetime_precision
        } else if kind.is_numeric() {
            row.numeric_precision
        } else {
            None
        };
        let scale = if kind.is_numeric() {
            row.numeric_scale
        } else {
            None
        };
        Ok(ColumnType {
            native_name: row.native_type.clone(),
            kind,
            precision,
            scale,
        })
    }
}
