//! Search Data Model
//!
//! Wire types exchanged with the `/books_search` backend plus the derived
//! grouping types. All wire fields are camelCase to match the backend API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Request
// ============================================================================

/// One page request sent to the search backend
#[derive(Debug, Clone, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Query text
    pub q: String,
    /// Page size requested from the backend
    pub hits_per_page: u32,
    /// 1-based page number, monotonically increasing within one run
    pub page: u32,
    /// Optional Meilisearch-style filter expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Optional sort expressions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<String>>,
    /// Restrict which attributes the backend returns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes_to_retrieve: Option<Vec<String>>,
}

impl SearchQuery {
    /// Build the request for one page of a search run
    pub fn for_page(text: &str, hits_per_page: u32, page: u32) -> Self {
        Self {
            q: text.to_string(),
            hits_per_page,
            page,
            ..Default::default()
        }
    }
}

// ============================================================================
// Hits
// ============================================================================

/// One matching book as returned by the search backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookHit {
    /// Unique book ID
    pub book_id: String,
    /// Parent project this book belongs to (grouping key)
    pub project: String,
    /// Content language code
    pub language: String,
    /// Content selection variant
    pub selection: String,
    /// Flavor variant if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    /// Content category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Download URL
    pub url: String,
    /// Archive size in bytes
    pub size: u64,
    /// Number of media entries
    pub media_count: u64,
    /// Number of articles
    pub article_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

// ============================================================================
// Facets
// ============================================================================

/// Per-facet value counts returned alongside the hits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct FacetDistribution {
    pub project: HashMap<String, u64>,
    pub language: HashMap<String, u64>,
    pub selection: HashMap<String, u64>,
    pub flavour: HashMap<String, u64>,
    pub category: HashMap<String, u64>,
    pub creator: HashMap<String, u64>,
    pub publisher: HashMap<String, u64>,
    pub tags: HashMap<String, u64>,
}

// ============================================================================
// Result Pages
// ============================================================================

/// One page of results from the search backend
///
/// Every pagination field may be absent; an absent `page` or `total_pages`
/// means pagination is unknown and the fetch loop stops after this page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultPage {
    pub hits: Vec<BookHit>,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub estimated_total_hits: Option<u64>,
    pub total_hits: Option<u64>,
    pub total_pages: Option<u32>,
    pub hits_per_page: Option<u32>,
    pub page: Option<u32>,
    pub facet_distribution: Option<FacetDistribution>,
}

impl SearchResultPage {
    /// Accumulator "append" case: concatenate a later page's hits onto this
    /// cumulative result. Pagination metadata stays as captured from page 1;
    /// later pages' descriptors are intentionally not merged.
    pub fn append_page(&mut self, page: SearchResultPage) {
        self.hits.extend(page.hits);
    }
}

/// Cumulative result across all fetched pages of the current run.
///
/// Same shape as a single page; `hits` holds every merged page in page order
/// then intra-page order, all other fields describe page 1.
pub type AggregatedSearchResult = SearchResultPage;

// ============================================================================
// Derived Grouping
// ============================================================================

/// A book stripped of its grouping key, for display under a project group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    /// Book identifier (the hit's `book_id`)
    pub id: String,
    pub language: String,
    pub selection: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub url: String,
    pub size: u64,
    pub media_count: u64,
    pub article_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl From<BookHit> for BookSummary {
    fn from(hit: BookHit) -> Self {
        Self {
            id: hit.book_id,
            language: hit.language,
            selection: hit.selection,
            flavor: hit.flavor,
            category: hit.category,
            url: hit.url,
            size: hit.size,
            media_count: hit.media_count,
            article_count: hit.article_count,
            title: hit.title,
            description: hit.description,
            creator: hit.creator,
            publisher: hit.publisher,
            tags: hit.tags,
            favicon: hit.favicon,
        }
    }
}

/// One project with its matching books, in hit order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroup {
    pub project: String,
    pub books: Vec<BookSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(book_id: &str, project: &str) -> BookHit {
        BookHit {
            book_id: book_id.to_string(),
            project: project.to_string(),
            language: "eng".to_string(),
            selection: "all".to_string(),
            url: format!("https://download.example.org/{book_id}.zim"),
            size: 1024,
            media_count: 10,
            article_count: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_query_serializes_camel_case_without_empty_options() {
        let query = SearchQuery::for_page("wikipedia", 100, 2);
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json["q"], "wikipedia");
        assert_eq!(json["hitsPerPage"], 100);
        assert_eq!(json["page"], 2);
        assert!(json.get("filter").is_none());
        assert!(json.get("sort").is_none());
    }

    #[test]
    fn test_page_parses_with_missing_pagination_fields() {
        let page: SearchResultPage = serde_json::from_str(
            r#"{"hits":[{"bookId":"b1","project":"wikipedia","language":"eng",
                "selection":"all","url":"https://x/b1.zim","size":1,
                "mediaCount":2,"articleCount":3}]}"#,
        )
        .unwrap();
        assert_eq!(page.hits.len(), 1);
        assert_eq!(page.hits[0].book_id, "b1");
        assert!(page.page.is_none());
        assert!(page.total_pages.is_none());
        assert!(page.total_hits.is_none());
        assert!(page.facet_distribution.is_none());
    }

    #[test]
    fn test_page_parses_camel_case_metadata() {
        let page: SearchResultPage = serde_json::from_str(
            r#"{"hits":[],"totalHits":1000,"totalPages":10,"page":1,
                "hitsPerPage":100,"estimatedTotalHits":1000}"#,
        )
        .unwrap();
        assert_eq!(page.total_hits, Some(1000));
        assert_eq!(page.total_pages, Some(10));
        assert_eq!(page.page, Some(1));
    }

    #[test]
    fn test_append_page_keeps_first_page_metadata() {
        let mut cumulative: AggregatedSearchResult = SearchResultPage {
            hits: vec![hit("b1", "wikipedia")],
            total_hits: Some(2),
            total_pages: Some(2),
            page: Some(1),
            ..Default::default()
        };
        cumulative.append_page(SearchResultPage {
            hits: vec![hit("b2", "wiktionary")],
            total_hits: Some(2),
            total_pages: Some(2),
            page: Some(2),
            ..Default::default()
        });
        assert_eq!(cumulative.hits.len(), 2);
        assert_eq!(cumulative.hits[1].book_id, "b2");
        // page-1 descriptors stay untouched
        assert_eq!(cumulative.page, Some(1));
    }

    #[test]
    fn test_book_summary_drops_project_and_renames_id() {
        let summary = BookSummary::from(hit("b7", "wikivoyage"));
        assert_eq!(summary.id, "b7");
        assert_eq!(summary.language, "eng");
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("project").is_none());
        assert!(json.get("bookId").is_none());
        assert_eq!(json["id"], "b7");
    }
}
