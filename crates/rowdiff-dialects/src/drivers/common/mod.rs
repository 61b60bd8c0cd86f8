//! Shared connection plumbing for backend bindings.
//!
//! Vendor clients fall into two camps: keyword-style libraries that take
//! discrete host/port/database parameters, and DSN-style libraries that take
//! one `KEY=value;KEY=value` string. [`ConnectionSpec`] captures either shape
//! as pure data, so parameter translation stays testable without any driver
//! installed.
//!
//! Actual connectivity goes through the vendor's ODBC driver and is gated
//! behind the `odbc` cargo feature. With the feature disabled,
//! [`open_native`] reports a typed `MissingDriver` error carrying the
//! backend's install hint.

use std::collections::BTreeMap;

use crate::error::{DialectError, Result};

/// Discrete connection parameters for keyword-style clients.
///
/// `port` has the backend default already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordParams {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Free-form options forwarded to the driver verbatim.
    pub extras: BTreeMap<String, String>,
}

/// Backend-specific connection parameters, ready for the vendor client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionSpec {
    /// Discrete keyword parameters.
    Keyword(KeywordParams),
    /// A single `KEY=value;KEY=value` string, extras already appended.
    Dsn(String),
}

impl ConnectionSpec {
    /// Render this spec as an ODBC connection string.
    ///
    /// Keyword specs are spelled out as standard ODBC attributes; a `DRIVER`
    /// extra (if present) is kept in front so it wins driver selection. DSN
    /// specs pass through unchanged.
    pub fn to_odbc_string(&self) -> String {
        match self {
            ConnectionSpec::Dsn(s) => s.clone(),
            ConnectionSpec::Keyword(p) => {
                let mut parts = Vec::with_capacity(6 + p.extras.len());
                if let Some(driver) = p.extras.get("DRIVER") {
                    parts.push(format!("DRIVER={driver}"));
                }
                parts.push(format!("HOST={}", p.host));
                parts.push(format!("PORT={}", p.port));
                parts.push(format!("DATABASE={}", p.database));
                if !p.user.is_empty() {
                    parts.push(format!("UID={}", p.user));
                }
                if !p.password.is_empty() {
                    parts.push(format!("PWD={}", p.password));
                }
                for (k, v) in &p.extras {
                    if k != "DRIVER" {
                        parts.push(format!("{k}={v}"));
                    }
                }
                parts.join(";")
            }
        }
    }
}

/// Assemble a DSN string from `KEY=value` pairs.
pub fn dsn_string<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    pairs
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join(";")
}

/// A native database connection handed to the pool collaborator.
///
/// Not safe for concurrent use by multiple threads; the pool must guarantee
/// at most one in-flight operation per connection.
pub struct NativeConnection {
    backend: &'static str,
    #[cfg(feature = "odbc")]
    inner: odbc_api::Connection<'static>,
}

impl NativeConnection {
    /// Backend that produced this connection.
    pub fn backend(&self) -> &'static str {
        self.backend
    }

    /// Borrow the underlying ODBC connection.
    #[cfg(feature = "odbc")]
    pub fn odbc(&self) -> &odbc_api::Connection<'static> {
        &self.inner
    }

    /// Take ownership of the underlying ODBC connection.
    #[cfg(feature = "odbc")]
    pub fn into_odbc(self) -> odbc_api::Connection<'static> {
        self.inner
    }
}

impl std::fmt::Debug for NativeConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeConnection")
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

/// Open a native connection for `backend` from a built spec.
///
/// Resolves the ODBC runtime lazily; nothing is loaded until a connection is
/// actually requested.
#[cfg(feature = "odbc")]
pub fn open_native(
    backend: &'static str,
    hint: &'static str,
    spec: &ConnectionSpec,
) -> Result<NativeConnection> {
    use odbc_api::ConnectionOptions;

    let env = odbc_api::environment().map_err(|e| {
        tracing::debug!(backend, error = %e, "ODBC environment unavailable");
        DialectError::MissingDriver {
            backend,
            library: "odbc",
            hint,
        }
    })?;

    let conn_str = spec.to_odbc_string();
    tracing::debug!(backend, "opening native connection");
    let inner = env
        .connect_with_connection_string(&conn_str, ConnectionOptions::default())
        .map_err(|e| DialectError::ConnectionFailure {
            backend,
            message: e.to_string(),
        })?;

    Ok(NativeConnection { backend, inner })
}

#[cfg(not(feature = "odbc"))]
pub fn open_native(
    backend: &'static str,
    hint: &'static str,
    _spec: &ConnectionSpec,
) -> Result<NativeConnection> {
    Err(DialectError::MissingDriver {
        backend,
        library: "odbc",
        hint,
    })
}
