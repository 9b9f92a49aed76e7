//! Build orchestration.
//!
//! Sequential composition of the pipeline stages:
//!
//! ```text
//! build_site()
//!     │
//!     ├── run_query()        ──► raw QueryData (or fatal QueryError)
//!     │
//!     ├── filter_for_mode()  ──► published-only view in production/staging
//!     │
//!     └── generate_site()    ──► list/post/category pages via registrar,
//!                                feed written last
//! ```
//!
//! Each stage returns an explicit `Result`; a query failure aborts before
//! any page is registered, a feed failure aborts after all of them are.

use crate::{
    config::SiteConfig,
    filter::filter_for_mode,
    generator::{self, BuildSummary},
    graph::query::{QueryExecutor, run_query},
    log,
    page::PageRegistrar,
};
use anyhow::{Context, Result};

/// Run the full page-generation pass against a content graph.
pub fn build_site(
    config: &SiteConfig,
    executor: &impl QueryExecutor,
    registrar: &mut impl PageRegistrar,
) -> Result<BuildSummary> {
    let mode = config.build.mode;

    let raw = run_query(executor).context("content graph query failed")?;
    log!("query"; "{} posts, {} categories", raw.posts.len(), raw.categories.len());

    let data = filter_for_mode(&raw, mode);
    if mode.is_restricted() {
        log!("filter"; "{mode}: {} of {} posts published", data.posts.len(), raw.posts.len());
    }

    generator::generate_site(&data, config, registrar)
}
