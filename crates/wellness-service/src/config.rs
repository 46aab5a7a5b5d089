//! Service configuration from environment variables.

use std::path::PathBuf;

/// Default gRPC port.
pub const DEFAULT_PORT: u16 = 50061;
/// Default bind host.
pub const DEFAULT_HOST: &str = "[::1]";

/// Environment variable for the bind port.
pub const PORT_VAR: &str = "WELLNESS_PORT";
/// Environment variable for the bind host.
pub const HOST_VAR: &str = "WELLNESS_HOST";
/// Environment variable for a catalog directory.
pub const CATALOG_PATH_VAR: &str = "WELLNESS_CATALOG_PATH";

/// Runtime settings for the server binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Host or IP literal to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding `conditions.tsv` and `symptoms.tsv`; builtin
    /// catalogs are used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_path: None,
        }
    }
}

impl ServiceConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through an arbitrary variable lookup.
    ///
    /// Unparseable or blank values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            host: non_blank(HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: non_blank(PORT_VAR)
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(DEFAULT_PORT),
            catalog_path: non_blank(CATALOG_PATH_VAR).map(PathBuf::from),
        }
    }

    /// Returns the `host:port` bind string.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
