use std::path::PathBuf;

/// Resolved service configuration shared by the server binary.
///
/// The binary fills this from CLI flags and the optional config file,
/// then uses it to locate storage before any module is constructed.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Directory that storage files live under.
    pub data_dir: Option<PathBuf>,

    /// Path to the SQLite database file.
    /// Defaults to `{data_dir}/data.sqlite` if not specified.
    pub sqlite_path: Option<PathBuf>,

    /// Listen address for the HTTP server.
    pub listen: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            sqlite_path: None,
            listen: "0.0.0.0:8080".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Resolve the SQLite database path, falling back to `{data_dir}/data.sqlite`.
    pub fn resolve_sqlite_path(&self) -> PathBuf {
        self.sqlite_path
            .clone()
            .unwrap_or_else(|| self.resolve_data_subpath("data.sqlite"))
    }

    fn resolve_data_subpath(&self, name: &str) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_sqlite_path_wins() {
        let config = ServiceConfig {
            data_dir: Some(PathBuf::from("/var/lib/shopkeep")),
            sqlite_path: Some(PathBuf::from("/tmp/other.sqlite")),
            ..Default::default()
        };
        assert_eq!(config.resolve_sqlite_path(), PathBuf::from("/tmp/other.sqlite"));
    }

    #[test]
    fn sqlite_path_defaults_under_data_dir() {
        let config = ServiceConfig {
            data_dir: Some(PathBuf::from("/var/lib/shopkeep")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_sqlite_path(),
            PathBuf::from("/var/lib/shopkeep/data.sqlite")
        );
    }

    #[test]
    fn sqlite_path_falls_back_to_cwd() {
        let config = ServiceConfig::default();
        assert_eq!(config.resolve_sqlite_path(), PathBuf::from("data.sqlite"));
    }
}
