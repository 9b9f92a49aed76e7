//! Site configuration management for `pressroom.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `[base]`    | Site metadata (title, author, url)           |
//! | `[build]`   | Build paths, deployment mode, feed           |
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "My Blog"
//! url = "https://example.com"
//!
//! [build]
//! content = "content"
//! output = "public"
//! mode = "production"
//!
//! [build.feed]
//! enable = true
//! ```

mod base;
mod build;
pub mod defaults;
mod error;

// Re-export public types used by other modules
pub use build::Mode;

// Internal imports used in this module
use base::BaseConfig;
use build::BuildConfig;
use error::ConfigError;

use crate::cli::{Cli, Commands};
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing pressroom.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute path to the config file (set after loading)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Basic site information
    #[serde(default)]
    pub base: BaseConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        self.build.root.as_deref().unwrap_or(Path::new("./"))
    }

    /// Set the root directory path
    pub fn set_root(&mut self, path: &Path) {
        self.build.root = Some(path.to_path_buf())
    }

    /// Base site URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.base.url.as_deref().unwrap_or_default().trim_end_matches('/')
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = cli
            .root
            .clone()
            .unwrap_or_else(|| self.get_root().to_owned());
        let root = Self::normalize_path(&root);

        self.config_path = Self::normalize_path(&root.join(&cli.config));

        // Apply CLI overrides before normalizing paths
        let Commands::Build { mode, output, feed } = &cli.command;
        if let Some(mode) = mode {
            self.build.mode = *mode;
        }
        if let Some(output) = output {
            self.build.output = output.clone();
        }
        if let Some(feed) = feed {
            self.build.feed.enable = *feed;
        }

        // Normalize all directory paths relative to root
        self.build.content = Self::normalize_path(&root.join(&self.build.content));
        self.build.output = Self::normalize_path(&root.join(&self.build.output));
        self.set_root(&root);
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            // For non-existent paths, manually make them absolute
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Validate configuration before building
    pub fn validate(&self) -> Result<()> {
        if !self.config_path.exists() {
            bail!("Config file not found");
        }

        if !self.build.content.is_dir() {
            bail!(ConfigError::Validation(format!(
                "[build.content] directory not found: {}",
                self.build.content.display()
            )));
        }

        if self.build.feed.enable && self.base.url.is_none() {
            bail!("[base.url] is required for feed generation");
        }

        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let config_str = r#"
            [base]
            title = "My Blog"
            author = "Test Author"
        "#;
        let result = SiteConfig::from_str(config_str);

        assert!(result.is_ok());
        let config = result.unwrap();
        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.author, "Test Author");
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let invalid_config = r#"
            [base
            title = "My Blog"
        "#;
        let result = SiteConfig::from_str(invalid_config);

        assert!(result.is_err());
    }

    #[test]
    fn test_get_root_default() {
        let config = SiteConfig::default();
        assert_eq!(config.get_root(), Path::new("./"));
    }

    #[test]
    fn test_set_root() {
        let mut config = SiteConfig::default();
        config.set_root(Path::new("/custom/path"));
        assert_eq!(config.get_root(), Path::new("/custom/path"));
    }

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let mut config = SiteConfig::default();
        config.base.url = Some("https://example.com/".to_string());
        assert_eq!(config.base_url(), "https://example.com");

        config.base.url = Some("https://example.com".to_string());
        assert_eq!(config.base_url(), "https://example.com");

        config.base.url = None;
        assert_eq!(config.base_url(), "");
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.base.title, "");
        assert_eq!(config.build.mode, Mode::Development);
        assert!(config.build.feed.enable);
    }

    #[test]
    fn test_full_config_all_sections() {
        let config = r#"
            [base]
            title = "My Blog"
            description = "A personal blog"
            author = "Alice"
            url = "https://myblog.com"
            language = "en-US"

            [build]
            content = "posts"
            output = "dist"
            mode = "production"

            [build.feed]
            enable = true
            path = "feed.json"
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(config.base.title, "My Blog");
        assert_eq!(config.base.author, "Alice");
        assert_eq!(config.build.content, PathBuf::from("posts"));
        assert_eq!(config.build.mode, Mode::Production);
        assert!(config.build.feed.enable);
    }

    #[test]
    fn test_unknown_top_level_field_rejection() {
        let config = r#"
            [base]
            title = "Test"

            [unknown_section]
            field = "value"
        "#;
        let result: Result<SiteConfig, _> = toml::from_str(config);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_url_for_feed() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("pressroom.toml");
        let content_dir = dir.path().join("content");
        fs::write(&config_path, "").unwrap();
        fs::create_dir_all(&content_dir).unwrap();

        let mut config = SiteConfig::default();
        config.config_path = config_path;
        config.build.content = content_dir;
        config.build.feed.enable = true;
        config.base.url = None;

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[base.url]"));

        config.base.url = Some("https://example.com".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("pressroom.toml");
        let content_dir = dir.path().join("content");
        fs::write(&config_path, "").unwrap();
        fs::create_dir_all(&content_dir).unwrap();

        let mut config = SiteConfig::default();
        config.config_path = config_path;
        config.build.content = content_dir;
        config.base.url = Some("ftp://example.com".to_string());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("http"));
    }

    #[test]
    fn test_validate_missing_content_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config_path = dir.path().join("pressroom.toml");
        fs::write(&config_path, "").unwrap();

        let mut config = SiteConfig::default();
        config.config_path = config_path;
        config.build.content = dir.path().join("no-such-dir");
        config.base.url = Some("https://example.com".to_string());

        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[build.content]"));
    }
}
