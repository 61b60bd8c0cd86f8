//! Impala connection factory.

use crate::config::ConnectionInfo;
use crate::core::traits::ConnectionFactory;
use crate::drivers::common::{ConnectionSpec, KeywordParams};

/// Default Impala daemon port (HiveServer2 protocol).
pub const DEFAULT_PORT: u16 = 21050;

/// Keyword-style connection factory for Impala.
///
/// Passes host/port/database/user/password and all extras as discrete
/// parameters. Advanced authentication (e.g. Kerberos) is configured through
/// extras such as `AuthMech` or `KrbServiceName` rather than dedicated
/// fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImpalaConnectionFactory;

impl ConnectionFactory for ImpalaConnectionFactory {
    fn backend(&self) -> &'static str {
        "impala"
    }

    fn default_port(&self) -> Option<u16> {
        Some(DEFAULT_PORT)
    }

    fn driver_hint(&self) -> &'static str {
        "Install the Cloudera ODBC Driver for Impala and rebuild with \
         `--features odbc` (requires unixODBC on Linux/macOS)."
    }

    fn connection_spec(&self, info: &ConnectionInfo) -> ConnectionSpec {
        ConnectionSpec::Keyword(KeywordParams {
            host: info.host.clone(),
            port: info.port.unwrap_or(DEFAULT_PORT),
            database: info.database.clone(),
            user: info.user.clone(),
            password: info.password.clone(),
            extras: info.extras.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_port_applied() {
        let info = ConnectionInfo::new("impala.internal", "sales");
        let spec = ImpalaConnectionFactory.connection_spec(&info);
        match spec {
            ConnectionSpec::Keyword(p) => {
                assert_eq!(p.port, 21050);
                assert_eq!(p.host, "impala.internal");
                assert_eq!(p.database, "sales");
            }
            ConnectionSpec::Dsn(_) => panic!("impala is keyword-style"),
        }
    }

    #[test]
    fn test_explicit_port_wins() {
        let info = ConnectionInfo::new("impala.internal", "sales").with_port(21051);
        match ImpalaConnectionFactory.connection_spec(&info) {
            ConnectionSpec::Keyword(p) => assert_eq!(p.port, 21051),
            ConnectionSpec::Dsn(_) => panic!("impala is keyword-style"),
        }
    }

    #[test]
    fn test_extras_forwarded() {
        let info = ConnectionInfo::new("impala.internal", "sales")
            .with_extra("AuthMech", "1")
            .with_extra("KrbServiceName", "impala");
        match ImpalaConnectionFactory.connection_spec(&info) {
            ConnectionSpec::Keyword(p) => {
                assert_eq!(p.extras.get("AuthMech").map(String::as_str), Some("1"));
                assert_eq!(
                    p.extras.get("KrbServiceName").map(String::as_str),
                    Some("impala")
                );
            }
            ConnectionSpec::Dsn(_) => panic!("impala is keyword-style"),
        }
    }
}
