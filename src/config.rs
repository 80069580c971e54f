//! Server configuration from environment variables

use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Directory served for everything outside /api
    pub static_dir: PathBuf,
    /// Fixed seed for the party registry RNG (None = OS entropy)
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            rng_seed: None,
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

/// Read a trimmed, non-empty env var
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl ServerConfig {
    /// Load config from environment variables:
    /// STARPARTY_BIND, STARPARTY_STATIC_DIR, STARPARTY_SEED
    pub fn from_env() -> Self {
        let bind_addr = match env_var("STARPARTY_BIND") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid STARPARTY_BIND '{}': {}. Falling back to {}",
                    raw,
                    e,
                    DEFAULT_BIND_ADDR
                );
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        let static_dir = env_var("STARPARTY_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let rng_seed = env_var("STARPARTY_SEED").and_then(|raw| match raw.parse() {
            Ok(seed) => Some(seed),
            Err(e) => {
                tracing::warn!("Invalid STARPARTY_SEED '{}': {}. Ignoring", raw, e);
                None
            }
        });

        Self {
            bind_addr,
            static_dir,
            rng_seed,
        }
    }
}
