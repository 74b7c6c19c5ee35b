//! Book Search Module
//!
//! Paginated search against the library backend: data model, HTTP transport,
//! the fetch-loop orchestrator, and the derived project grouping.

pub mod error;
pub mod grouping;
pub mod models;
pub mod orchestrator;
pub mod transport;

pub use error::{Result, SearchError};
pub use grouping::group_by_project;
pub use models::{
    AggregatedSearchResult, BookHit, BookSummary, FacetDistribution, ProjectGroup, SearchQuery,
    SearchResultPage,
};
pub use orchestrator::{
    is_searchable_query, SearchController, SearchRunState, HITS_LIMIT_CEILING, HITS_PER_PAGE,
    MIN_QUERY_CHARS,
};
pub use transport::{BookSearchTransport, HttpBookSearchTransport};
