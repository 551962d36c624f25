// src/domain/listing/query.rs
//! Filter, sort and page the catalog. Everything here is synchronous and
//! side-effect free; each call recomputes from the full catalog.

use std::cmp::Reverse;
use std::num::NonZeroUsize;

use crate::domain::article::Article;
use crate::domain::article::specifications::{
    ArticleSpecification, MatchesCategorySpec, MatchesSearchTermSpec,
};
use crate::domain::listing::state::{CategoryFilter, QueryState, SearchTerm, SortOrder};

/// Result of one listing query over a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage<'a> {
    pub visible: Vec<&'a Article>,
    pub has_more: bool,
    pub total_matched: usize,
    pub catalog_size: usize,
    pub page_count: NonZeroUsize,
    pub page_size: NonZeroUsize,
}

impl ListingPage<'_> {
    /// Matched articles not yet revealed.
    pub fn remaining(&self) -> usize {
        self.total_matched - self.visible.len()
    }
}

/// Keeps catalog order; an article appears at most once.
pub fn filter<'a>(
    catalog: &'a [Article],
    search_term: &SearchTerm,
    category: &CategoryFilter,
) -> Vec<&'a Article> {
    let by_category = MatchesCategorySpec::new(category);
    let by_term = MatchesSearchTermSpec::new(search_term);
    catalog
        .iter()
        .filter(|article| by_category.is_satisfied_by(article) && by_term.is_satisfied_by(article))
        .collect()
}

/// Stable reordering into a new vector; equal keys keep input order.
pub fn sort<'a>(filtered: &[&'a Article], sort_order: SortOrder) -> Vec<&'a Article> {
    let mut sorted = filtered.to_vec();
    match sort_order {
        SortOrder::Newest => sorted.sort_by_key(|article| Reverse(article.published_on)),
        SortOrder::Oldest => sorted.sort_by_key(|article| article.published_on),
        SortOrder::MostViewed => sorted.sort_by_key(|article| Reverse(article.view_count)),
    }
    sorted
}

/// Prefix of `sorted` covering `page_count` pages, clamped to its length,
/// and whether anything lies beyond it.
pub fn page<T>(sorted: &[T], page_count: NonZeroUsize, page_size: NonZeroUsize) -> (&[T], bool) {
    let window = page_count.get().saturating_mul(page_size.get());
    let end = window.min(sorted.len());
    (&sorted[..end], window < sorted.len())
}

pub fn run_query<'a>(catalog: &'a [Article], state: &QueryState) -> ListingPage<'a> {
    let filtered = filter(catalog, &state.search_term, &state.category);
    let sorted = sort(&filtered, state.sort_order);
    let (visible, has_more) = page(&sorted, state.page_count, state.page_size);

    ListingPage {
        visible: visible.to_vec(),
        has_more,
        total_matched: sorted.len(),
        catalog_size: catalog.len(),
        page_count: state.page_count,
        page_size: state.page_size,
    }
}
