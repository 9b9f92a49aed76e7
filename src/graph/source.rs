//! Filesystem content source and snapshot query executor.
//!
//! Stand-in for the external content system: a one-shot scan of the content
//! directory builds the graph the pipeline queries. Markdown files (with
//! TOML front matter between `+++` fences) become post nodes, each running
//! through the slug derivation stage as it is created, and
//! `categories.json` becomes category records.
//!
//! The loaded [`ContentGraph`] answers the pipeline's query through
//! [`QueryExecutor`], delivering posts sorted descending by date. Nodes
//! that failed to receive a slug are reported as top-level query errors,
//! which the query stage treats as fatal.

use super::{
    node::{
        FilePathResolver, FrontMatter, GraphFieldRegistrar, Node, NodeContent, SLUG_FIELD,
        on_create_node,
    },
    query::QueryExecutor,
    types::{Category, Post, QueryData, QueryResponse, SiteMetadata},
};
use crate::{config::SiteConfig, log};
use anyhow::{Context, Result, anyhow};
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Front matter delimiter line.
const FENCE: &str = "+++";

/// Category data file, looked up in the content directory.
const CATEGORIES_FILE: &str = "categories.json";

// ============================================================================
// Content graph
// ============================================================================

/// An in-memory content graph loaded from the content directory.
#[derive(Debug)]
pub struct ContentGraph {
    site: SiteMetadata,
    nodes: Vec<Node>,
    /// Site author, used for posts whose front matter names none.
    default_author: String,
}

/// Load the content graph: scan markdown files, run the slug stage per
/// node, and pick up category records.
pub fn load_graph(config: &SiteConfig) -> Result<ContentGraph> {
    let content_dir = &config.build.content;
    let resolver = FilePathResolver::new(content_dir);
    let registrar = GraphFieldRegistrar;

    let mut nodes = Vec::new();

    for entry in WalkDir::new(content_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "md") {
            continue;
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let front_matter = parse_front_matter(&raw)
            .with_context(|| format!("invalid front matter in {}", path.display()))?;

        let mut node = Node::markdown(path.to_path_buf(), front_matter);
        on_create_node(&mut node, &resolver, &registrar)?;
        nodes.push(node);
    }

    let post_count = nodes.len();
    let categories = load_categories(content_dir)?;
    let category_count = categories.len();

    for category in categories {
        let mut node = Node::category_data(content_dir.join(CATEGORIES_FILE), category);
        on_create_node(&mut node, &resolver, &registrar)?;
        nodes.push(node);
    }

    log!("source"; "{post_count} posts, {category_count} categories");

    Ok(ContentGraph {
        site: SiteMetadata {
            site_url: config.base_url().to_owned(),
        },
        nodes,
        default_author: config.base.author.clone(),
    })
}

/// Parse TOML front matter between `+++` fences at the top of a file.
///
/// The body below the closing fence belongs to the renderer and is ignored.
fn parse_front_matter(raw: &str) -> Result<FrontMatter> {
    let rest = raw
        .strip_prefix(FENCE)
        .ok_or_else(|| anyhow!("missing opening `{FENCE}` fence"))?;

    let end = rest
        .find(&format!("\n{FENCE}"))
        .ok_or_else(|| anyhow!("missing closing `{FENCE}` fence"))?;

    let front_matter: FrontMatter = toml::from_str(&rest[..end])?;
    Ok(front_matter)
}

/// Load `categories.json` from the content directory.
///
/// A missing file means the site has no categories; a malformed one is a
/// fatal ingestion error.
fn load_categories(content_dir: &Path) -> Result<Vec<Category>> {
    let path = content_dir.join(CATEGORIES_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let categories: Vec<Category> = serde_json::from_str(&raw)
        .with_context(|| format!("invalid category data in {}", path.display()))?;
    Ok(categories)
}

// ============================================================================
// Snapshot executor
// ============================================================================

impl QueryExecutor for ContentGraph {
    /// Answer the pipeline's fixed query from the loaded snapshot.
    ///
    /// Posts come back sorted descending by date (ties keep scan order).
    /// A markdown node without a slug field is reported as a top-level
    /// error rather than silently dropped.
    fn execute(&self, _query: &str) -> Result<QueryResponse> {
        let mut posts = Vec::new();
        let mut categories = Vec::new();
        let mut errors = Vec::new();

        for node in &self.nodes {
            match &node.content {
                NodeContent::Markdown(front_matter) => match node.field(SLUG_FIELD) {
                    Some(slug) => posts.push(self.post_from(front_matter, slug)),
                    None => errors.push(format!(
                        "{}: node has no `{SLUG_FIELD}` field",
                        node.source_path.display()
                    )),
                },
                NodeContent::CategoryData(category) => categories.push(category.clone()),
            }
        }

        posts.sort_by(|a, b| b.date.cmp(&a.date));

        Ok(QueryResponse {
            data: Some(QueryData {
                site: self.site.clone(),
                posts,
                categories,
            }),
            errors,
        })
    }
}

impl ContentGraph {
    fn post_from(&self, front_matter: &FrontMatter, slug: &str) -> Post {
        Post {
            slug: slug.to_owned(),
            title: front_matter.title.clone(),
            subtitle: front_matter.subtitle.clone(),
            status: front_matter.status,
            author: front_matter
                .author
                .clone()
                .unwrap_or_else(|| self.default_author.clone()),
            date: front_matter.date,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
