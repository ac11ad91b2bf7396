use crate::error::{BookshelfError, Result};
use crate::store::{Library, Seed};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "bookshelf.yml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Serve the GraphiQL explorer on `GET /graphql`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_graphiql() -> bool {
    true
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            graphiql: default_graphiql(),
        }
    }
}

impl ServerSettings {
    /// Listen address in `host:port` form; the host may be a name.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoreSettings {
    /// Start with the sample catalogue. Ignored when `seed_file` is set.
    #[serde(default = "default_seed")]
    pub seed: bool,

    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_seed() -> bool {
    true
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            seed_file: None,
        }
    }
}

impl StoreSettings {
    /// Builds the initial store: the seed file if one is set, otherwise the
    /// sample catalogue or an empty library.
    pub fn open_library(&self) -> Result<Library> {
        match &self.seed_file {
            Some(path) => Library::from_seed(Seed::load(path)?),
            None if self.seed => Ok(Library::seeded()),
            None => Ok(Library::new()),
        }
    }
}

impl BookshelfConfig {
    /// Loads `path` when given, otherwise `bookshelf.yml` in `dir` if it exists.
    /// A missing default file yields the default configuration.
    pub fn load(path: Option<&Path>, dir: &Path) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                if !p.exists() {
                    return Err(BookshelfError::Config(format!(
                        "Config file not found: {}",
                        p.display()
                    )));
                }
                p.to_path_buf()
            }
            None => {
                let candidate = dir.join(CONFIG_FILE_NAME);
                if !candidate.exists() {
                    tracing::debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                candidate
            }
        };

        let content = std::fs::read_to_string(&config_path)?;
        let mut config: BookshelfConfig = serde_yaml::from_str(&content)?;

        // Seed paths are relative to the config file
        if let Some(seed_file) = config.store.seed_file.take() {
            let base = config_path.parent().unwrap_or_else(|| Path::new("."));
            config.store.seed_file = Some(base.join(seed_file));
        }

        tracing::debug!(path = %config_path.display(), "Loaded config");
        Ok(config)
    }
}
