//! Project Grouping
//!
//! Derived, read-only view of the cumulative search result: the flat hit list
//! reshaped into one group per project. Recomputed on every read, never cached.

use super::models::{AggregatedSearchResult, BookSummary, ProjectGroup};

/// Group the cumulative hits by project, first-occurrence ordered.
///
/// Returns `None` when no result is present (distinct from an empty grouping
/// of an empty hit list). Hit order is preserved inside each group, and every
/// hit lands in exactly one group.
pub fn group_by_project(result: Option<&AggregatedSearchResult>) -> Option<Vec<ProjectGroup>> {
    let result = result?;
    let mut groups: Vec<ProjectGroup> = Vec::new();
    for hit in &result.hits {
        // Linear scan keeps first-occurrence order stable; the backend caps
        // results at 1000 hits so the quadratic worst case stays small.
        match groups.iter_mut().find(|g| g.project == hit.project) {
            Some(group) => group.books.push(BookSummary::from(hit.clone())),
            None => groups.push(ProjectGroup {
                project: hit.project.clone(),
                books: vec![BookSummary::from(hit.clone())],
            }),
        }
    }
    Some(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::search::models::{BookHit, SearchResultPage};

    fn hit(book_id: &str, project: &str) -> BookHit {
        BookHit {
            book_id: book_id.to_string(),
            project: project.to_string(),
            language: "eng".to_string(),
            selection: "all".to_string(),
            url: format!("https://download.example.org/{book_id}.zim"),
            size: 1,
            media_count: 1,
            article_count: 1,
            ..Default::default()
        }
    }

    fn result_with(hits: Vec<BookHit>) -> AggregatedSearchResult {
        SearchResultPage {
            hits,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_result_yields_none() {
        assert!(group_by_project(None).is_none());
    }

    #[test]
    fn test_empty_result_yields_empty_grouping() {
        let result = result_with(vec![]);
        let groups = group_by_project(Some(&result)).unwrap();
        assert!(groups.is_empty());
    }

    #[test]
    fn test_groups_in_first_occurrence_order() {
        let result = result_with(vec![
            hit("b1", "wiktionary"),
            hit("b2", "wikipedia"),
            hit("b3", "wiktionary"),
            hit("b4", "wikivoyage"),
        ]);
        let groups = group_by_project(Some(&result)).unwrap();
        let order: Vec<&str> = groups.iter().map(|g| g.project.as_str()).collect();
        assert_eq!(order, vec!["wiktionary", "wikipedia", "wikivoyage"]);
        assert_eq!(groups[0].books.len(), 2);
        assert_eq!(groups[0].books[0].id, "b1");
        assert_eq!(groups[0].books[1].id, "b3");
    }

    #[test]
    fn test_groups_partition_hits_exactly() {
        let result = result_with(vec![
            hit("b1", "wikipedia"),
            hit("b2", "wikipedia"),
            hit("b3", "wiktionary"),
        ]);
        let groups = group_by_project(Some(&result)).unwrap();
        let total: usize = groups.iter().map(|g| g.books.len()).sum();
        assert_eq!(total, result.hits.len());
    }

    #[test]
    fn test_grouping_is_idempotent() {
        let result = result_with(vec![
            hit("b1", "wikipedia"),
            hit("b2", "wiktionary"),
            hit("b3", "wikipedia"),
        ]);
        let first = group_by_project(Some(&result)).unwrap();
        let second = group_by_project(Some(&result)).unwrap();
        assert_eq!(first, second);
    }
}
