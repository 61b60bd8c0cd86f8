//! SAP IQ connection factory.

use crate::config::ConnectionInfo;
use crate::core::traits::ConnectionFactory;
use crate::drivers::common::{dsn_string, ConnectionSpec};

/// DSN-style connection factory for SAP IQ.
///
/// SQL Anywhere-family clients take one delimited string:
/// `UID=…;PWD=…;DBN=…;ENG=…[;PORT=…]`, with any extras appended verbatim.
/// There is no default port; when unset, the engine-name lookup handles
/// addressing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SapIqConnectionFactory;

impl ConnectionFactory for SapIqConnectionFactory {
    fn backend(&self) -> &'static str {
        "sapiq"
    }

    fn default_port(&self) -> Option<u16> {
        None
    }

    fn driver_hint(&self) -> &'static str {
        "Install the SAP IQ / SQL Anywhere client (libdbodbc) and rebuild \
         with `--features odbc` (requires unixODBC on Linux/macOS)."
    }

    fn connection_spec(&self, info: &ConnectionInfo) -> ConnectionSpec {
        let port = info.port.map(|p| p.to_string()).unwrap_or_default();
        let mut dsn = dsn_string([
            ("UID", info.user.as_str()),
            ("PWD", info.password.as_str()),
            ("DBN", info.database.as_str()),
            ("ENG", info.host.as_str()),
            ("PORT", port.as_str()),
        ]);
        for (k, v) in &info.extras {
            dsn.push(';');
            dsn.push_str(k);
            dsn.push('=');
            dsn.push_str(v);
        }
        ConnectionSpec::Dsn(dsn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dsn_field_order() {
        let info = ConnectionInfo::new("iqhost", "warehouse")
            .with_credentials("etl", "secret")
            .with_port(2638);
        match SapIqConnectionFactory.connection_spec(&info) {
            ConnectionSpec::Dsn(dsn) => {
                assert_eq!(dsn, "UID=etl;PWD=secret;DBN=warehouse;ENG=iqhost;PORT=2638");
            }
            ConnectionSpec::Keyword(_) => panic!("sapiq is DSN-style"),
        }
    }

    #[test]
    fn test_dsn_omits_unset_port() {
        let info = ConnectionInfo::new("iqhost", "warehouse").with_credentials("etl", "pw");
        match SapIqConnectionFactory.connection_spec(&info) {
            ConnectionSpec::Dsn(dsn) => assert!(!dsn.contains("PORT=")),
            ConnectionSpec::Keyword(_) => panic!("sapiq is DSN-style"),
        }
    }

    #[test]
    fn test_dsn_appends_extras_verbatim() {
        let info = ConnectionInfo::new("iqhost", "warehouse")
            .with_credentials("etl", "pw")
            .with_extra("CommLinks", "tcpip(host=iqhost)")
            .with_extra("Integrated", "NO");
        match SapIqConnectionFactory.connection_spec(&info) {
            ConnectionSpec::Dsn(dsn) => {
                assert!(dsn.ends_with("CommLinks=tcpip(host=iqhost);Integrated=NO"));
            }
            ConnectionSpec::Keyword(_) => panic!("sapiq is DSN-style"),
        }
    }
}
