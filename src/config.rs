pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the reverse proxy forwards to; sites point their
/// `backend_internal_port` here.
pub const DEFAULT_PORT: u16 = 3001;

/// # Server Configuration
///
/// Bind address of the HTTP listener.
///
/// The address is fixed: the process is launched as a child of the proxy and
/// inherits its environment, so variables such as `PORT` are never consulted.
/// Only `RUST_LOG` (optionally from a `.env` file) affects the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
