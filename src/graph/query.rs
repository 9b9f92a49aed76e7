//! Content Query Stage.
//!
//! Issues exactly one structured query against the content graph and hands
//! the result to the rest of the pipeline. The query engine itself is an
//! external collaborator behind [`QueryExecutor`]; this stage only knows the
//! request shape and the failure contract: executor-reported errors abort
//! the build before any page is emitted.

use super::types::{QueryData, QueryResponse};
use thiserror::Error;

/// The one request this pipeline makes: site metadata, all posts sorted
/// descending by date (with the fields page generation reads), and all
/// category records.
pub const PAGES_QUERY: &str = "\
{
  site { siteMetadata { siteUrl } }
  allMarkdownPosts(sort: {date: DESC}) {
    slug title subtitle status author date
  }
  allCategories { key name description }
}";

/// Query-execution capability provided by the orchestrator.
pub trait QueryExecutor {
    /// Run a query described by `query` and return the raw response.
    fn execute(&self, query: &str) -> anyhow::Result<QueryResponse>;
}

/// Errors from the query stage. All of them are fatal to the build.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("query execution failed")]
    Executor(#[source] anyhow::Error),

    #[error("content graph reported {} error(s): {}", .errors.len(), .errors.join("; "))]
    Reported { errors: Vec<String> },

    #[error("query returned no data")]
    MissingData,
}

/// Issue the pipeline's single content-graph query.
///
/// A response carrying top-level errors rejects even if it also carries
/// data; no pages are generated from a partially failed query.
pub fn run_query(executor: &impl QueryExecutor) -> Result<QueryData, QueryError> {
    let response = executor.execute(PAGES_QUERY).map_err(QueryError::Executor)?;

    if !response.errors.is_empty() {
        return Err(QueryError::Reported {
            errors: response.errors,
        });
    }

    response.data.ok_or(QueryError::MissingData)
}
