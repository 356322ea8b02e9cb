use markymark_engine::{
    Flavor, HtmlOptions,
    flavor::{self, FLAVOR_NAMES},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
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

    #[error("Unknown flavor '{flavor}', expected one of: {}", FLAVOR_NAMES.join(", "))]
    UnknownFlavor { flavor: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name of a bundled flavor, see [`FLAVOR_NAMES`].
    pub flavor: String,
    pub html: HtmlConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlConfig {
    pub escape_text: bool,
    pub code_class_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flavor: flavor::ContentfulFlavor::NAME.to_string(),
            html: HtmlConfig::default(),
        }
    }
}

impl Default for HtmlConfig {
    fn default() -> Self {
        let options = HtmlOptions::default();
        Self {
            escape_text: options.escape_text,
            code_class_prefix: options.code_class_prefix,
        }
    }
}

impl Config {
    /// Loads the config at `config_path`, expanding `~` and environment
    /// variables in the path first. A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let config_path = Self::expand_path(config_path).unwrap_or_else(|| config_path.into());
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        // Reject unknown flavors at load time rather than on first use
        config.flavor()?;

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

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markymark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Resolves the configured flavor name.
    pub fn flavor(&self) -> Result<Box<dyn Flavor>, ConfigError> {
        flavor::by_name(&self.flavor).ok_or_else(|| ConfigError::UnknownFlavor {
            flavor: self.flavor.clone(),
        })
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            escape_text: self.html.escape_text,
            code_class_prefix: self.html.code_class_prefix.clone(),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
