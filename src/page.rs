//! Page descriptors and their registration interface.
//!
//! A [`PageDescriptor`] is what the pipeline hands to the orchestrator for
//! each page it wants rendered: a URL path, a template reference, and the
//! named parameters that template receives. The pipeline never renders or
//! persists pages itself: descriptors go out through a [`PageRegistrar`]
//! and ownership ends there.

use crate::{config::SiteConfig, graph::types::Post};
use anyhow::{Context, Result};
use serde::{Serialize, Serializer};
use std::{fs, path::PathBuf};

/// File name of the descriptor manifest written for the renderer.
const MANIFEST_FILE: &str = "pages.json";

// ============================================================================
// Descriptors
// ============================================================================

/// Reference to one of the renderer's page templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    BlogList,
    BlogPost,
    Category,
}

impl Template {
    /// Template source path, resolved by the renderer.
    pub const fn source(self) -> &'static str {
        match self {
            Self::BlogList => "templates/blog-list.html",
            Self::BlogPost => "templates/blog-post.html",
            Self::Category => "templates/category.html",
        }
    }
}

impl Serialize for Template {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

/// Minimal post reference carried in a post page's context, enough for the
/// template to link to a neighboring post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostRef {
    pub title: String,
    pub subtitle: String,
    pub slug: String,
}

impl From<&Post> for PostRef {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            subtitle: post.subtitle.clone(),
            slug: post.slug.clone(),
        }
    }
}

/// Named parameters a page's template receives, one variant per template.
///
/// Serializes untagged, i.e. as the plain parameter mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PageContext {
    /// Paginated list page.
    List {
        limit: usize,
        skip: usize,
        /// Status value the template's own post query filters on
        /// downstream; not re-filtering here.
        status: String,
        num_pages: usize,
        /// 1-based.
        current_page: usize,
    },
    /// Individual post page.
    ///
    /// Naming is date-semantic, not array-semantic: `previous` is the
    /// chronologically older post (the *following* element of the
    /// descending-date sequence), `next` the newer one. Templates rely on
    /// exactly this meaning.
    Post {
        author: String,
        slug: String,
        previous: Option<PostRef>,
        next: Option<PostRef>,
    },
    /// Category page.
    Category { category: String },
}

/// A page the orchestrator should render: path, template, parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageDescriptor {
    pub path: String,
    pub component: Template,
    pub context: PageContext,
}

// ============================================================================
// Registration
// ============================================================================

/// Page-registration capability provided by the orchestrator.
///
/// Registration is synchronous and fire-and-forget; the pipeline does not
/// retain references to what it registered.
pub trait PageRegistrar {
    fn register(&mut self, page: PageDescriptor);
}

/// Collecting registrar: keeps every descriptor for the orchestrator to
/// persist or render after the build.
#[derive(Debug, Default)]
pub struct RegisteredPages {
    pages: Vec<PageDescriptor>,
}

impl RegisteredPages {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &PageDescriptor> {
        self.pages.iter()
    }

    /// Write the descriptor manifest to `<output>/<data>/pages.json` for
    /// the downstream renderer.
    pub fn write_manifest(&self, config: &SiteConfig) -> Result<PathBuf> {
        let manifest = Manifest {
            site: ManifestSite {
                title: &config.base.title,
                description: &config.base.description,
                url: config.base_url(),
                language: &config.base.language,
            },
            pages: &self.pages,
        };

        let data_dir = config.build.output.join(&config.build.data);
        fs::create_dir_all(&data_dir)
            .with_context(|| format!("failed to create {}", data_dir.display()))?;

        let path = data_dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;

        Ok(path)
    }
}

impl PageRegistrar for RegisteredPages {
    fn register(&mut self, page: PageDescriptor) {
        self.pages.push(page);
    }
}

/// Manifest document shape.
#[derive(Serialize)]
struct Manifest<'a> {
    site: ManifestSite<'a>,
    pages: &'a [PageDescriptor],
}

#[derive(Serialize)]
struct ManifestSite<'a> {
    title: &'a str,
    description: &'a str,
    url: &'a str,
    language: &'a str,
}

// ============================================================================
// Tests
// ============================================================================
