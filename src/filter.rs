//! Environment Filter Stage.
//!
//! A pure view over the raw query result: restricted deployments
//! (production, staging) see published posts only, development sees the
//! graph as-is. Categories always pass through. The input is never mutated.

use crate::{
    config::Mode,
    graph::types::{PostStatus, QueryData},
};

/// Produce the filtered view of `data` for the given deployment mode.
pub fn filter_for_mode(data: &QueryData, mode: Mode) -> QueryData {
    if !mode.is_restricted() {
        return data.clone();
    }

    QueryData {
        site: data.site.clone(),
        posts: data
            .posts
            .iter()
            .filter(|post| post.status == PostStatus::Published)
            .cloned()
            .collect(),
        categories: data.categories.clone(),
    }
}
