//! URL slug derivation from content file paths.
//!
//! Converts a content file location into the URL path the generated post
//! page lives at, e.g. `content/posts/Hello World.md` → `/posts/hello-world/`.

use anyhow::{Result, anyhow};
use deunicode::deunicode;
use std::path::{Component, Path};

/// Convert one path segment to URL-safe form.
///
/// Transliterates to ASCII, lowercases, and collapses every run of
/// non-alphanumeric characters into a single dash.
pub fn slugify_segment(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Derive a page slug from a content file path.
///
/// The path is taken relative to `content_dir`, the extension is dropped,
/// and each remaining segment is slugified. A file named `index` collapses
/// into its directory, so `content/index.md` maps to `/`.
///
/// # Path Mapping Examples
///
/// | Source | Slug |
/// |--------|------|
/// | `content/hello-world.md` | `/hello-world/` |
/// | `content/posts/My Post.md` | `/posts/my-post/` |
/// | `content/posts/index.md` | `/posts/` |
pub fn file_path_slug(content_dir: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(content_dir).map_err(|_| {
        anyhow!(
            "file is not in content directory: {}",
            path.display()
        )
    })?;

    let stem = relative
        .file_stem()
        .ok_or_else(|| anyhow!("path has no file name: {}", path.display()))?
        .to_string_lossy();

    let mut segments: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(seg) => Some(slugify_segment(&seg.to_string_lossy())),
            _ => None,
        })
        .collect();

    if stem != "index" {
        segments.push(slugify_segment(&stem));
    }

    segments.retain(|s| !s.is_empty());

    if segments.is_empty() {
        return Ok("/".to_owned());
    }
    Ok(format!("/{}/", segments.join("/")))
}
