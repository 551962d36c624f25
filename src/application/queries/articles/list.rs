use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, ListingPageDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::listing::{CategoryFilter, QueryState, SortOrder, run_query, state::non_zero},
};

/// Raw listing parameters as the page's controls produce them.
#[derive(Debug, Clone)]
pub struct ListArticlesQuery {
    pub search: String,
    pub category: String,
    pub sort: String,
    pub page_size: usize,
    pub page_count: usize,
}

impl Default for ListArticlesQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: "all".into(),
            sort: "newest".into(),
            page_size: 4,
            page_count: 1,
        }
    }
}

impl ListArticlesQuery {
    pub fn to_state(&self) -> ApplicationResult<QueryState> {
        let page_size =
            non_zero(self.page_size, "page size").map_err(ApplicationError::from_domain)?;
        let page_count =
            non_zero(self.page_count, "page count").map_err(ApplicationError::from_domain)?;
        let category = self
            .category
            .parse::<CategoryFilter>()
            .map_err(ApplicationError::from_domain)?;
        let sort_order = self
            .sort
            .parse::<SortOrder>()
            .map_err(ApplicationError::from_domain)?;

        Ok(QueryState::new(page_size)
            .with_search_term(&self.search)
            .with_category(category)
            .with_sort_order(sort_order)
            .with_page_count(page_count))
    }
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        let state = query.to_state()?;
        self.run_listing(&state).await
    }

    /// Run the listing over a fresh snapshot of the catalog.
    pub async fn run_listing(
        &self,
        state: &QueryState,
    ) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        let catalog = self
            .read_repo
            .list_all()
            .await
            .map_err(ApplicationError::from_domain)?;
        let page = run_query(&catalog, state);

        tracing::debug!(
            search = state.search_term.as_str(),
            category = %state.category,
            sort = %state.sort_order,
            page_count = state.page_count.get(),
            page_size = state.page_size.get(),
            matched = page.total_matched,
            has_more = page.has_more,
            "listing query"
        );

        let slugger = self.slugger.as_ref();
        Ok(ListingPageDto::from_page(&page, |article| {
            ArticleDto::from_article(article, slugger)
        }))
    }
}
