//! Content-graph record types.
//!
//! Everything here is read-only to the pipeline: records are created by
//! content ingestion, delivered by the query stage, and never mutated
//! downstream. Post order (descending date) is fixed by the query and is
//! not re-sorted.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ============================================================================
// Records
// ============================================================================

/// Site-wide metadata, read once per build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Base URL used for absolute feed links.
    pub site_url: String,
}

/// Publication status of a post.
///
/// `draft` and `published` are the recognized values; anything else decodes
/// to `Other` and is treated like a draft by the environment filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Other,
}

impl PostStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PostStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PostStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "draft" => Self::Draft,
            "published" => Self::Published,
            _ => Self::Other,
        })
    }
}

/// A blog post record as delivered by the content graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// URL path of the post page (derived at ingestion, see `graph::node`).
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub status: PostStatus,
    pub author: String,
    /// Used only for ordering; the query sorts by it, nothing else reads it.
    pub date: DateTimeUtc,
}

/// A category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier, used in the category page path.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Display description.
    pub description: String,
}

// ============================================================================
// Query payloads
// ============================================================================

/// The data a successful content-graph query delivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryData {
    pub site: SiteMetadata,
    /// Sorted descending by date.
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
}

/// Raw executor response: data plus any top-level errors it reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResponse {
    pub data: Option<QueryData>,
    #[serde(default)]
    pub errors: Vec<String>,
}
