use crate::domain::article::entity::Article;
use crate::domain::listing::{CategoryFilter, SearchTerm};

pub trait ArticleSpecification {
    fn is_satisfied_by(&self, article: &Article) -> bool;
}

/// Strict equality on the category slug, or everything for `All`.
pub struct MatchesCategorySpec<'a> {
    filter: &'a CategoryFilter,
}

impl<'a> MatchesCategorySpec<'a> {
    pub fn new(filter: &'a CategoryFilter) -> Self {
        Self { filter }
    }
}

impl ArticleSpecification for MatchesCategorySpec<'_> {
    fn is_satisfied_by(&self, article: &Article) -> bool {
        match self.filter {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => article.category == *category,
        }
    }
}

/// Case-insensitive substring match on title or excerpt. An empty term
/// matches every article.
pub struct MatchesSearchTermSpec<'a> {
    term: &'a SearchTerm,
}

impl<'a> MatchesSearchTermSpec<'a> {
    pub fn new(term: &'a SearchTerm) -> Self {
        Self { term }
    }
}

impl ArticleSpecification for MatchesSearchTermSpec<'_> {
    fn is_satisfied_by(&self, article: &Article) -> bool {
        if self.term.is_empty() {
            return true;
        }
        let needle = self.term.as_str();
        article.title.as_str().to_lowercase().contains(needle)
            || article.excerpt.as_str().to_lowercase().contains(needle)
    }
}
