// src/domain/listing/state.rs
use crate::domain::article::Category;
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, num::NonZeroUsize, str::FromStr};

/// Free-text filter, case-folded once at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(value.as_ref().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(CategoryFilter::All),
            other => Ok(CategoryFilter::Only(other.parse()?)),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => f.write_str(category.slug()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
    MostViewed,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Newest => "newest",
            SortOrder::Oldest => "oldest",
            SortOrder::MostViewed => "most-viewed",
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            "most-viewed" | "mostViewed" | "popular" => Ok(SortOrder::MostViewed),
            other => Err(DomainError::Validation(format!(
                "unknown sort order '{other}'"
            ))),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-owned listing state.
///
/// Changing the term, category or sort order does not touch `page_count`;
/// whoever owns the state resets it with [`QueryState::reset_pages`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search_term: SearchTerm,
    pub category: CategoryFilter,
    pub sort_order: SortOrder,
    pub page_size: NonZeroUsize,
    pub page_count: NonZeroUsize,
}

impl QueryState {
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            search_term: SearchTerm::default(),
            category: CategoryFilter::All,
            sort_order: SortOrder::Newest,
            page_size,
            page_count: NonZeroUsize::MIN,
        }
    }

    pub fn with_search_term(mut self, term: impl AsRef<str>) -> Self {
        self.search_term = SearchTerm::new(term);
        self
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_sort_order(mut self, sort_order: SortOrder) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn with_page_count(mut self, page_count: NonZeroUsize) -> Self {
        self.page_count = page_count;
        self
    }

    pub fn reset_pages(&mut self) {
        self.page_count = NonZeroUsize::MIN;
    }

    pub fn advance_page(&mut self) {
        self.page_count = self.page_count.saturating_add(1);
    }
}

pub fn non_zero(value: usize, what: &str) -> DomainResult<NonZeroUsize> {
    NonZeroUsize::new(value)
        .ok_or_else(|| DomainError::Validation(format!("{what} must be positive")))
}
