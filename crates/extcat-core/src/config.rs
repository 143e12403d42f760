//! Where the active platform catalog lives.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Environment variable naming the catalog document.
pub const CATALOG_ENV: &str = "EXTCAT_CATALOG";

/// Catalog file looked up under the user config directory.
pub const DEFAULT_CATALOG_FILE: &str = "catalog.yaml";

/// Resolves the catalog document location.
///
/// Sources, first match wins:
/// 1. an explicit path (the `--catalog` flag)
/// 2. the `EXTCAT_CATALOG` environment variable
/// 3. `<config_dir>/extcat/catalog.yaml`
///
/// `<config_dir>` is the platform config directory from `dirs::config_dir()`:
/// - Linux: `~/.config/`
/// - macOS: `~/Library/Application Support/`
/// - Windows: `%APPDATA%\`
#[derive(Debug, Clone, Default)]
pub struct CatalogLocation {
    explicit: Option<PathBuf>,
    /// Replaces the platform config directory (used for testing).
    config_dir_override: Option<PathBuf>,
}

impl CatalogLocation {
    pub fn new(explicit: Option<PathBuf>) -> Self {
        Self {
            explicit,
            config_dir_override: None,
        }
    }

    pub fn with_config_dir(explicit: Option<PathBuf>, config_dir: impl AsRef<Path>) -> Self {
        Self {
            explicit,
            config_dir_override: Some(config_dir.as_ref().to_path_buf()),
        }
    }

    fn config_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.config_dir_override {
            return Some(dir.clone());
        }
        dirs::config_dir().map(|d| d.join("extcat"))
    }

    pub fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.explicit {
            tracing::debug!(path = %path.display(), "catalog location from argument");
            return Ok(path.clone());
        }
        if let Some(value) = std::env::var_os(CATALOG_ENV).filter(|v| !v.is_empty()) {
            tracing::debug!(env = CATALOG_ENV, "catalog location from environment");
            return Ok(PathBuf::from(value));
        }
        self.config_dir()
            .map(|dir| dir.join(DEFAULT_CATALOG_FILE))
            .ok_or(Error::CatalogLocationUnknown { env: CATALOG_ENV })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let location = CatalogLocation::with_config_dir(Some("/tmp/c.json".into()), "/cfg");
        assert_eq!(location.resolve().unwrap(), PathBuf::from("/tmp/c.json"));
    }

    #[test]
    fn test_falls_back_to_config_dir() {
        if std::env::var_os(CATALOG_ENV).is_some() {
            return;
        }
        let location = CatalogLocation::with_config_dir(None, "/cfg/extcat");
        assert_eq!(
            location.resolve().unwrap(),
            PathBuf::from("/cfg/extcat").join(DEFAULT_CATALOG_FILE)
        );
    }
}
