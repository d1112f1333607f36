use serde::Deserialize;
use shelfd_core::error::{Result, ShelfError};

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        self.server.validate()
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ShelfError::Validation("server.port must be non-zero".into()));
        }
        if self.host.is_empty() {
            return Err(ShelfError::Validation("server.host must not be empty".into()));
        }
        Ok(())
    }

    /// Bind address string, e.g. `0.0.0.0:3000`.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    3000
}
