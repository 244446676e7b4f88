//! Site configuration loading.
//!
//! Settings come from an optional `portfolio.toml`; every key has a default
//! so a missing file is not an error.

mod error;
mod site;

pub use error::ConfigError;
pub use site::{SiteConfig, MAX_PAGE_SIZE};

use std::path::Path;
use tracing::info;

/// Loads the site configuration from `path`.
///
/// # Errors
///
/// Returns [`ConfigError`] if an existing file can't be read, parsed or validated.
pub fn load_site_config(path: &Path) -> Result<SiteConfig, ConfigError> {
    let config = SiteConfig::load(path)?;
    info!(path = %path.display(), owner = %config.owner, "Using site configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_site_config(&temp.path().join("missing.toml")).unwrap();

        assert_eq!(config.owner, "pappater");
        assert_eq!(config.layout, "project");
    }

    #[test]
    fn invalid_toml_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("portfolio.toml");
        fs::write(&path, "owner = [broken").unwrap();

        let result = load_site_config(&path);
        assert!(matches!(result, Err(ConfigError::TomlError { .. })));
    }

    #[test]
    fn unreadable_path_is_reported() {
        let temp = TempDir::new().unwrap();

        let result = load_site_config(temp.path());
        assert!(matches!(result, Err(ConfigError::IoError { .. })));
    }
}
