//! Site configuration deserialization.

use crate::config::ConfigError;
use crate::llm::LlmConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Largest page size accepted by the repository listing endpoint.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Parsed contents of the site configuration file (`portfolio.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// GitHub account whose repositories are turned into project cards.
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Directory that receives the generated `<repository>.md` files.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Value written to the `layout` front-matter key.
    #[serde(default = "default_layout")]
    pub layout: String,

    /// Number of repositories requested in full-sync mode.
    #[serde(default = "default_page_size")]
    pub page_size: u8,

    /// Pause between processed repositories, in milliseconds.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Optional text generation provider.
    #[serde(default)]
    pub llm: Option<LlmConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            output_dir: default_output_dir(),
            layout: default_layout(),
            page_size: default_page_size(),
            delay_ms: default_delay_ms(),
            llm: None,
        }
    }
}

impl SiteConfig {
    /// Loads the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file can't be read, is not valid TOML,
    /// or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No site configuration found, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::IoError {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        config.validate(path)?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] on the first invalid field.
    pub fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |message: &str| ConfigError::ValidationError {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.owner.trim().is_empty() {
            return Err(invalid("owner is empty"));
        }
        if self.layout.trim().is_empty() {
            return Err(invalid("layout is empty"));
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            return Err(invalid("page-size must be between 1 and 100"));
        }

        Ok(())
    }

    /// Returns the inter-repository delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

pub(crate) fn default_owner() -> String {
    "pappater".to_string()
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("_projects")
}

pub(crate) fn default_layout() -> String {
    "project".to_string()
}

pub(crate) fn default_page_size() -> u8 {
    MAX_PAGE_SIZE
}

pub(crate) fn default_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::Provider;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_full_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(
            &path,
            r#"
owner = "octo"
output-dir = "content/projects"
layout = "card"
page-size = 30
delay-ms = 250

[llm]
provider = "openai"
model = "gpt-4o-mini"
"#,
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.owner, "octo");
        assert_eq!(config.output_dir, PathBuf::from("content/projects"));
        assert_eq!(config.layout, "card");
        assert_eq!(config.page_size, 30);
        assert_eq!(config.delay(), Duration::from_millis(250));
        assert_eq!(config.llm.map(|llm| llm.provider), Some(Provider::OpenAi));
    }

    #[test]
    fn load_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(&path, "owner = \"octo\"\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.owner, "octo");
        assert_eq!(config.output_dir, PathBuf::from("_projects"));
        assert_eq!(config.layout, "project");
        assert_eq!(config.page_size, 100);
        assert_eq!(config.delay_ms, 1000);
        assert!(config.llm.is_none());
    }

    #[test]
    fn page_size_out_of_range_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(&path, "page-size = 0\n").unwrap();

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));

        fs::write(&path, "page-size = 101\n").unwrap();
        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }

    #[test]
    fn empty_owner_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(&path, "owner = \"  \"\n").unwrap();

        let result = SiteConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
