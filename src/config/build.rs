//! `[build]` section configuration.
//!
//! Contains build settings: paths, deployment mode, and feed generation.

use super::defaults;
use clap::ValueEnum;
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{fmt, path::PathBuf};

// ============================================================================
// Enums
// ============================================================================

/// Deployment mode for a build.
///
/// An exhaustive, parse-validated value: an unrecognized mode string fails
/// config or CLI parsing instead of falling through to unfiltered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Published posts only.
    Production,
    /// Published posts only, on a staging deployment.
    Staging,
    /// Everything, drafts included (default).
    #[default]
    Development,
}

impl Mode {
    /// Whether this mode restricts output to published posts.
    pub const fn is_restricted(self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Status filter value handed to list-page templates for their own
    /// per-page post query: the status to exclude downstream.
    pub const fn list_status_filter(self) -> &'static str {
        match self {
            Self::Production | Self::Staging => "draft",
            Self::Development => "",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Production => "production",
            Self::Staging => "staging",
            Self::Development => "development",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Main BuildConfig
// ============================================================================

/// `[build]` section in pressroom.toml - build pipeline configuration.
///
/// # Example
/// ```toml
/// [build]
/// content = "content"      # Source directory
/// output = "public"        # Output directory
/// mode = "production"
///
/// [build.feed]
/// enable = true
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Project root directory (usually set via CLI `--root`).
    #[serde(default = "defaults::build::root")]
    #[educe(Default = defaults::build::root())]
    pub root: Option<PathBuf>,

    /// Content source directory (markdown files + categories.json).
    #[serde(default = "defaults::build::content")]
    #[educe(Default = defaults::build::content())]
    pub content: PathBuf,

    /// Build output directory.
    #[serde(default = "defaults::build::output")]
    #[educe(Default = defaults::build::output())]
    pub output: PathBuf,

    /// Manifest directory inside the output directory.
    #[serde(default = "defaults::build::data")]
    #[educe(Default = defaults::build::data())]
    pub data: PathBuf,

    /// Deployment mode.
    #[serde(default)]
    pub mode: Mode,

    /// JSON feed generation settings.
    #[serde(default)]
    pub feed: FeedConfig,
}

// ============================================================================
// Sub-configurations
// ============================================================================

/// `[build.feed]` section - json feed generation configuration.
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct FeedConfig {
    /// Enable feed generation.
    #[serde(default = "defaults::r#true")]
    #[educe(Default = defaults::r#true())]
    pub enable: bool,

    /// Feed file path, relative to the output directory.
    #[serde(default = "defaults::build::feed::path")]
    #[educe(Default = defaults::build::feed::path())]
    pub path: PathBuf,
}
