use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown output format '{0}' (expected 'html' or 'outline')")]
    UnknownFormat(String),
}

/// How the `render` command prints a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Outline,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "html" => Ok(OutputFormat::Html),
            "outline" => Ok(OutputFormat::Outline),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Outline => write!(f, "outline"),
        }
    }
}

// Kept equal to `forum_markup_engine::editing::DEFAULT_LINK_PLACEHOLDER`; the
// CLI tests check that they agree.
fn default_link_placeholder() -> String {
    "url".to_string()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Folder holding draft posts; the composer opens `draft.md` in it.
    pub drafts_path: PathBuf,
    /// Target written by the link toolbar action, e.g. `[text](url)`.
    #[serde(default = "default_link_placeholder")]
    pub link_placeholder: String,
    #[serde(default)]
    pub default_format: OutputFormat,
}

impl Config {
    pub const DRAFT_FILE_NAME: &'static str = "draft.md";

    pub fn new(drafts_path: PathBuf) -> Self {
        Self {
            drafts_path,
            link_placeholder: default_link_placeholder(),
            default_format: OutputFormat::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded drafts path
        config.drafts_path = Self::expand_path(&config.drafts_path).unwrap_or(config.drafts_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/forum-markup");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The draft file the composer opens when no path is given.
    pub fn draft_file(&self) -> PathBuf {
        self.drafts_path.join(Self::DRAFT_FILE_NAME)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
