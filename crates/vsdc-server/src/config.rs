use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};
use vsdc_ledger::{DEFAULT_MIN_TIN_LENGTH, DEFAULT_VERIFICATION_BASE};

use crate::error::{ServerError, ServerResult};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// Prefix of every `qr_code` URL; the certificate id is appended.
    pub verification_base_url: String,
    pub min_tin_length: usize,
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8081)),
            verification_base_url: DEFAULT_VERIFICATION_BASE.into(),
            min_tin_length: DEFAULT_MIN_TIN_LENGTH,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> ServerResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "loaded server configuration");
        Ok(config)
    }
}
