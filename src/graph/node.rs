//! Content nodes and the slug derivation stage.
//!
//! [`on_create_node`] is the pipeline's second entry point: it runs once per
//! node as content is ingested, independent of page generation. Markdown
//! nodes get a `slug` field derived from their source file path; every other
//! node kind passes through untouched. The attached field is what the query
//! stage later reads as [`Post::slug`](super::types::Post).
//!
//! Both capabilities involved are injected: a [`SlugResolver`] turns a file
//! path into a slug, and a [`NodeFieldRegistrar`] attaches the result as a
//! queryable field.

use super::types::{Category, PostStatus};
use crate::utils::{date::DateTimeUtc, slug::file_path_slug};
use anyhow::Result;
use serde::Deserialize;
use std::{collections::BTreeMap, path::PathBuf};

/// Name of the node field that carries the derived slug.
pub const SLUG_FIELD: &str = "slug";

// ============================================================================
// Nodes
// ============================================================================

/// Front matter of a markdown content file.
///
/// `title` and `date` are required; a record without them is malformed and
/// rejected at parse time. A missing `status` means draft, so an unstatused
/// post can never leak into a restricted deployment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrontMatter {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub status: PostStatus,
    /// Falls back to the site author when absent.
    #[serde(default)]
    pub author: Option<String>,
    pub date: DateTimeUtc,
}

/// Typed payload of a node, by content kind.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeContent {
    /// A markdown content file (front matter only; the body is the
    /// renderer's concern).
    Markdown(FrontMatter),
    /// One record of the category data file.
    CategoryData(Category),
}

/// A unit of ingested content in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// File the node was created from.
    pub source_path: PathBuf,
    pub content: NodeContent,
    /// Fields attached after creation, queryable by later stages.
    pub fields: BTreeMap<String, String>,
}

impl Node {
    pub fn markdown(source_path: PathBuf, front_matter: FrontMatter) -> Self {
        Self {
            source_path,
            content: NodeContent::Markdown(front_matter),
            fields: BTreeMap::new(),
        }
    }

    pub fn category_data(source_path: PathBuf, category: Category) -> Self {
        Self {
            source_path,
            content: NodeContent::CategoryData(category),
            fields: BTreeMap::new(),
        }
    }

    /// Look up an attached field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

// ============================================================================
// Collaborator interfaces
// ============================================================================

/// Path-to-slug capability.
pub trait SlugResolver {
    /// Derive a slug from the node's source file path.
    fn file_path_slug(&self, node: &Node) -> Result<String>;
}

/// Attaches named fields to nodes, making them queryable.
pub trait NodeFieldRegistrar {
    fn create_node_field(&self, node: &mut Node, name: &str, value: String);
}

/// Default resolver: slug from the path relative to the content directory.
pub struct FilePathResolver {
    content_dir: PathBuf,
}

impl FilePathResolver {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
        }
    }
}

impl SlugResolver for FilePathResolver {
    fn file_path_slug(&self, node: &Node) -> Result<String> {
        file_path_slug(&self.content_dir, &node.source_path)
    }
}

/// Default registrar: writes straight into the node's field map.
pub struct GraphFieldRegistrar;

impl NodeFieldRegistrar for GraphFieldRegistrar {
    fn create_node_field(&self, node: &mut Node, name: &str, value: String) {
        node.fields.insert(name.to_owned(), value);
    }
}

// ============================================================================
// Slug Derivation Stage
// ============================================================================

/// Run the slug stage for one freshly created node.
///
/// Markdown nodes get a [`SLUG_FIELD`] attached; all other kinds are a
/// no-op. Resolver failures (a path outside the content root) propagate.
pub fn on_create_node(
    node: &mut Node,
    resolver: &impl SlugResolver,
    registrar: &impl NodeFieldRegistrar,
) -> Result<()> {
    if let NodeContent::Markdown(_) = node.content {
        let slug = resolver.file_path_slug(node)?;
        registrar.create_node_field(node, SLUG_FIELD, slug);
    }
    Ok(())
}
