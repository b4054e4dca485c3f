//! Server configuration file.
//!
//! A small TOML file, resolved from a context name or a direct path:
//!
//! ```toml
//! listen = "0.0.0.0:8080"
//!
//! [storage]
//! data_dir = "/var/lib/shopkeep"
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen address. CLI `--listen` overrides.
    #[serde(default)]
    pub listen: Option<String>,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory that storage files live under.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl ServerConfig {
    /// Resolve a context name or path.
    ///
    /// A bare name maps to `/etc/shopkeep/<name>.toml`; anything
    /// containing `/` or `.` is used as a path directly.
    pub fn resolve_path(name_or_path: &str) -> PathBuf {
        if name_or_path.contains('/') || name_or_path.contains('.') {
            PathBuf::from(name_or_path)
        } else {
            PathBuf::from(format!("/etc/shopkeep/{name_or_path}.toml"))
        }
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
    }
}
