use std::net::{Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset or unparseable.
pub const DEFAULT_PORT: u16 = 5001;

/// Explicit server configuration, resolved once at startup and passed to the
/// router/listener instead of living in process globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl ServerConfig {
    /// Reads `PORT` from the environment. Bad values fall back to
    /// [`DEFAULT_PORT`] with a warning rather than aborting startup.
    #[must_use]
    pub fn from_env() -> Self {
        let raw = std::env::var("PORT").ok();
        Self::from_port_var(raw.as_deref())
    }

    fn from_port_var(value: Option<&str>) -> Self {
        let port = match value {
            None => DEFAULT_PORT,
            Some(raw) => match raw.trim().parse() {
                Ok(port) => port,
                Err(err) => {
                    tracing::warn!("Failed to parse PORT={raw:?}: {err}; using {DEFAULT_PORT}");
                    DEFAULT_PORT
                }
            },
        };
        Self { port }
    }

    /// Listens on all interfaces.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
