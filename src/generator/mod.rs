//! Page Generation Stage.
//!
//! Turns the filtered query result into registered page descriptors
//! (paginated list pages, post pages with neighbor refs, category pages)
//! and drives feed emission from the same post sequence.
//!
//! Pages are registered before the feed is written: a feed failure is a
//! build error, but never unregisters pages.

pub mod category;
pub mod feed;
pub mod list;
pub mod post;

use crate::{config::SiteConfig, graph::types::QueryData, log, page::PageRegistrar};
use anyhow::Result;
use feed::Feed;

/// Counts of what one build emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub list_pages: usize,
    pub post_pages: usize,
    pub category_pages: usize,
    pub feed_entries: usize,
}

impl BuildSummary {
    pub const fn total_pages(&self) -> usize {
        self.list_pages + self.post_pages + self.category_pages
    }
}

/// Emit all page descriptors for `data` and write the feed.
///
/// `data.posts` must already be sorted descending by date; this stage never
/// re-sorts.
pub fn generate_site(
    data: &QueryData,
    config: &SiteConfig,
    registrar: &mut impl PageRegistrar,
) -> Result<BuildSummary> {
    let mode = config.build.mode;

    let list_pages = list::create_list_pages(&data.posts, mode, registrar);
    let post_pages = post::create_post_pages(&data.posts, registrar);
    let category_pages = category::create_category_pages(&data.categories, registrar);
    log!("pages"; "{list_pages} list, {post_pages} post, {category_pages} category");

    let feed = Feed::collect(&data.posts, &data.site.site_url);
    let feed_entries = feed.len();

    if config.build.feed.enable {
        let feed_path = config.build.output.join(&config.build.feed.path);
        if let Err(err) = feed.write(&feed_path) {
            // Registered pages stay registered; the build still fails.
            log!("error"; "{err:#}");
            return Err(err.into());
        }
    }

    Ok(BuildSummary {
        list_pages,
        post_pages,
        category_pages,
        feed_entries,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Category, Post, PostStatus, SiteMetadata};
    use crate::page::RegisteredPages;
    use crate::utils::date::DateTimeUtc;
    use std::fs;
    use tempfile::TempDir;

    fn data(posts: usize, categories: usize) -> QueryData {
        QueryData {
            site: SiteMetadata {
                site_url: "https://example.com".to_string(),
            },
            posts: (0..posts)
                .map(|i| Post {
                    slug: format!("/post-{i}/"),
                    title: format!("Post {i}"),
                    subtitle: String::new(),
                    status: PostStatus::Published,
                    author: "Alice".to_string(),
                    date: DateTimeUtc::from_ymd(2024, 6, (posts - i) as u8),
                })
                .collect(),
            categories: (0..categories)
                .map(|i| Category {
                    key: format!("cat-{i}"),
                    name: format!("Category {i}"),
                    description: String::new(),
                })
                .collect(),
        }
    }

    fn make_config(output: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.output = output.to_path_buf();
        config
    }

    #[test]
    fn test_generate_site_counts() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let mut registered = RegisteredPages::new();

        let summary = generate_site(&data(12, 2), &config, &mut registered).unwrap();

        assert_eq!(summary.list_pages, 3);
        assert_eq!(summary.post_pages, 12);
        assert_eq!(summary.category_pages, 2);
        assert_eq!(summary.feed_entries, 5);
        assert_eq!(registered.len(), summary.total_pages());
    }

    #[test]
    fn test_generate_site_empty_graph() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let mut registered = RegisteredPages::new();

        let summary = generate_site(&data(0, 0), &config, &mut registered).unwrap();

        assert_eq!(summary, BuildSummary::default());
        assert!(registered.is_empty());

        // The (empty) feed document is still written
        let feed = fs::read_to_string(dir.path().join("feed.json")).unwrap();
        assert_eq!(feed, "[]");
    }

    #[test]
    fn test_feed_file_written_to_output() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let mut registered = RegisteredPages::new();

        generate_site(&data(7, 0), &config, &mut registered).unwrap();

        let raw = fs::read_to_string(dir.path().join("feed.json")).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0]["slug"], "https://example.com/post-0/");
    }

    #[test]
    fn test_feed_disabled_skips_write() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config(dir.path());
        config.build.feed.enable = false;
        let mut registered = RegisteredPages::new();

        let summary = generate_site(&data(3, 0), &config, &mut registered).unwrap();

        // Entries are still counted, only the write is skipped
        assert_eq!(summary.feed_entries, 3);
        assert!(!dir.path().join("feed.json").exists());
    }

    #[test]
    fn test_feed_failure_keeps_pages_registered() {
        let dir = TempDir::new().unwrap();
        let mut config = make_config(dir.path());
        // A directory at the feed path makes the write fail
        fs::create_dir(dir.path().join("feed.json")).unwrap();
        config.build.feed.path = "feed.json".into();

        let mut registered = RegisteredPages::new();
        let result = generate_site(&data(6, 1), &config, &mut registered);

        assert!(result.is_err());
        // 2 list + 6 post + 1 category pages all registered before the write
        assert_eq!(registered.len(), 9);
    }

    #[test]
    fn test_registration_order_lists_posts_categories() {
        let dir = TempDir::new().unwrap();
        let config = make_config(dir.path());
        let mut registered = RegisteredPages::new();

        generate_site(&data(6, 1), &config, &mut registered).unwrap();

        let paths: Vec<_> = registered.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/pages/2",
                "/post-0/",
                "/post-1/",
                "/post-2/",
                "/post-3/",
                "/post-4/",
                "/post-5/",
                "category/cat-0",
            ]
        );
    }
}
