//! Server config loader (strict parsing).
//!
//! Config is optional: a missing `shelfd.yaml` falls back to defaults, but a
//! present file must parse strictly. The `PORT` environment variable wins
//! over whatever the file says.

pub mod schema;

use std::fs;

use shelfd_core::error::{Result, ShelfError};

pub use schema::{ServerConfig, ServerSection};

pub fn load_from_file(path: &str) -> Result<ServerConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ShelfError::Internal(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ServerConfig> {
    let cfg: ServerConfig = serde_yaml::from_str(s)
        .map_err(|e| ShelfError::Validation(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Resolve the effective config: file if present, defaults otherwise,
/// then the `PORT` env override on top.
pub fn load(path: &str) -> Result<ServerConfig> {
    let mut cfg = if fs::metadata(path).is_ok() {
        load_from_file(path)?
    } else {
        ServerConfig::default()
    };

    if let Ok(port) = std::env::var("PORT") {
        let port: u16 = port
            .parse()
            .map_err(|e| ShelfError::Validation(format!("PORT must be a valid port: {e}")))?;
        cfg.server.port = port;
        cfg.validate()?;
    }

    Ok(cfg)
}
