//! JSON feed generation.
//!
//! Collects the most recent posts into a small JSON summary for external
//! consumption, written to `<output>/feed.json` on every build.

use crate::{graph::types::Post, log};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Maximum number of feed entries.
pub const FEED_LIMIT: usize = 5;

/// Errors from feed emission. Pages registered before the feed write are
/// not rolled back when this surfaces.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to serialize feed")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write feed to `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One feed entry: post title, subtitle, and absolute link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub desc: String,
    pub slug: String,
}

/// The ordered feed, capped at [`FEED_LIMIT`] entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    entries: Vec<FeedEntry>,
}

impl Feed {
    /// Collect the first [`FEED_LIMIT`] posts of the (already sorted)
    /// sequence. Slugs become absolute by prefixing the site URL.
    pub fn collect(posts: &[Post], site_url: &str) -> Self {
        let site_url = site_url.trim_end_matches('/');
        let entries = posts
            .iter()
            .take(FEED_LIMIT)
            .map(|post| FeedEntry {
                name: post.title.clone(),
                desc: post.subtitle.clone(),
                slug: format!("{site_url}{}", post.slug),
            })
            .collect();

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize to the feed document: a plain JSON array.
    pub fn to_json(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string(&self.entries)?)
    }

    /// Write the feed document, overwriting any previous build's file.
    pub fn write(&self, path: &Path) -> Result<(), FeedError> {
        let json = self.to_json()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| FeedError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| FeedError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        log!("feed"; "{} entries -> {}", self.entries.len(), path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}
