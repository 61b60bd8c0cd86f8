//! Connection parameter types.
//!
//! A [`ConnectionInfo`] is the decomposed form of a connection URI:
//!
//! ```text
//! <engine>://[user[:password]]@host[:port]/database[?key=value&...]
//! ```
//!
//! URI parsing itself happens upstream (CLI/config loading); this layer only
//! consumes the parsed parameters. The struct is immutable once constructed
//! and is owned by the [`Database`](crate::drivers::Database) for its
//! lifetime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Parsed connection parameters for one logical database.
///
/// `port` is optional; each backend supplies its own default when unset.
/// `extras` holds free-form `?key=value` options from the URI and is passed
/// through to the native driver verbatim (this is also how driver-level
/// settings such as query timeouts reach the vendor client).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionInfo {
    /// Database host.
    pub host: String,

    /// Database port. Backend default applies when `None`.
    #[serde(default)]
    pub port: Option<u16>,

    /// Database (or default schema) name.
    pub database: String,

    /// Username.
    #[serde(default)]
    pub user: String,

    /// Password.
    #[serde(default)]
    pub password: String,

    /// Free-form driver options, preserved in sorted order.
    #[serde(default)]
    pub extras: BTreeMap<String, String>,
}

impl ConnectionInfo {
    /// Create connection info for `host`/`database` with everything else
    /// unset.
    pub fn new(host: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
            database: database.into(),
            user: String::new(),
            password: String::new(),
            extras: BTreeMap::new(),
        }
    }

    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the credentials.
    pub fn with_credentials(
        mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.user = user.into();
        self.password = password.into();
        self
    }

    /// Add a free-form driver option.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}
