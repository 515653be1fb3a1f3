//! Configuration loading
//!
//! Resolution follows the same priority order for every setting:
//! 1. Command-line argument (applied by each binary)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! A missing TOML file is never fatal; a malformed one is.

use crate::corpus::CORPUS_FILE_NAME;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable naming an explicit config file
pub const ENV_CONFIG: &str = "MOJI_CONFIG";
pub const ENV_DATA_DIR: &str = "MOJI_DATA_DIR";
pub const ENV_SAMPLES: &str = "MOJI_SAMPLES";
pub const ENV_SOURCES: &str = "MOJI_SOURCES";
pub const ENV_STATIC_DIR: &str = "MOJI_STATIC_DIR";
pub const ENV_HOST: &str = "MOJI_HOST";
pub const ENV_PORT: &str = "MOJI_PORT";
pub const ENV_CORS: &str = "CORS_ALLOW_ORIGINS";

/// File name of the URL list inside the data directory
pub const SOURCES_FILE_NAME: &str = "sources.txt";

/// Top-level configuration shared by all moji binaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MojiConfig {
    /// Directory holding the corpus and source list
    pub data_dir: PathBuf,
    /// Explicit corpus path (defaults to `<data_dir>/kaomoji.json`)
    #[serde(rename = "samples_path", alias = "samples")]
    pub samples: Option<PathBuf>,
    /// Explicit source list path (defaults to `<data_dir>/sources.txt`)
    #[serde(rename = "sources_path", alias = "sources")]
    pub sources: Option<PathBuf>,
    /// Static site directory served by moji-web
    pub static_dir: PathBuf,
    pub server: ServerConfig,
    pub import: ImportConfig,
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins; `["*"]` allows any origin
    pub cors_allow_origins: Vec<String>,
}

/// Sample import settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Per-category cap applied after every import
    pub max_per_category: usize,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when RUST_LOG is not set
    pub level: String,
}

impl Default for MojiConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            samples: None,
            sources: None,
            static_dir: PathBuf::from("web").join("static"),
            server: ServerConfig::default(),
            import: ImportConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            cors_allow_origins: vec!["*".to_string()],
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_per_category: 5000,
            fetch_timeout_secs: 20,
            user_agent: "moji-import/0.1".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl MojiConfig {
    /// Resolved corpus path
    pub fn samples_path(&self) -> PathBuf {
        self.samples
            .clone()
            .unwrap_or_else(|| self.data_dir.join(CORPUS_FILE_NAME))
    }

    /// Resolved source list path
    pub fn sources_path(&self) -> PathBuf {
        self.sources
            .clone()
            .unwrap_or_else(|| self.data_dir.join(SOURCES_FILE_NAME))
    }

    /// Whether CORS should allow any origin
    pub fn cors_allows_any(&self) -> bool {
        self.server.cors_allow_origins.is_empty()
            || self.server.cors_allow_origins.iter().any(|o| o == "*")
    }

    /// `host:port` bind address
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Parse TOML failed: {}", e)))
    }

    /// Load configuration: TOML file (if any) then environment overrides
    ///
    /// `explicit` takes precedence over `MOJI_CONFIG` and the platform default.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match config_file_path(explicit) {
            Some(path) if path.is_file() => {
                let content = std::fs::read_to_string(&path)
                    .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
                let config = Self::from_toml_str(&content)?;
                info!("Loaded config from {}", path.display());
                config
            }
            Some(path) => {
                if explicit.is_some() || std::env::var_os(ENV_CONFIG).is_some() {
                    warn!("Config file {} not found, using defaults", path.display());
                } else {
                    info!("No config file at {}, using defaults", path.display());
                }
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply environment variable overrides in place
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(v) = env_non_empty(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty(ENV_SAMPLES) {
            self.samples = Some(PathBuf::from(v));
        }
        if let Some(v) = env_non_empty(ENV_SOURCES) {
            self.sources = Some(PathBuf::from(v));
        }
        if let Some(v) = env_non_empty(ENV_STATIC_DIR) {
            self.static_dir = PathBuf::from(v);
        }
        if let Some(v) = env_non_empty(ENV_HOST) {
            self.server.host = v;
        }
        if let Some(v) = env_non_empty(ENV_PORT) {
            self.server.port = v
                .parse()
                .map_err(|_| Error::Config(format!("{} is not a valid port: {}", ENV_PORT, v)))?;
        }
        if let Some(v) = env_non_empty(ENV_CORS) {
            self.server.cors_allow_origins = parse_origins(&v);
        }
        Ok(())
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Config file location: explicit > MOJI_CONFIG > `<config_dir>/moji/config.toml`
fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env_non_empty(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join("moji").join("config.toml"))
}
