// src/presentation/news/controller.rs
use std::{num::NonZeroUsize, sync::Arc, time::Duration};

use crate::application::{
    ApplicationResult,
    commands::articles::{ArticleCommandService, RecordViewCommand},
    dto::{ArticleDto, ListingPageDto},
    queries::articles::ArticleQueryService,
    services::ApplicationServices,
};
use crate::domain::listing::{CategoryFilter, QueryState, SortOrder};

/// Owns the listing state of one news page and drives the query service in
/// response to the page's controls.
///
/// Every filter change resets the page counter before re-running. Methods
/// take `&mut self`, so load-more steps cannot interleave.
pub struct NewsPageController {
    queries: Arc<ArticleQueryService>,
    commands: Arc<ArticleCommandService>,
    state: QueryState,
    load_delay: Duration,
    current: Option<ListingPageDto<ArticleDto>>,
}

impl NewsPageController {
    pub fn new(services: &ApplicationServices, page_size: NonZeroUsize, load_delay: Duration) -> Self {
        Self {
            queries: Arc::clone(&services.article_queries),
            commands: Arc::clone(&services.article_commands),
            state: QueryState::new(page_size),
            load_delay,
            current: None,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn current(&self) -> Option<&ListingPageDto<ArticleDto>> {
        self.current.as_ref()
    }

    /// Re-run the query for the current state.
    pub async fn refresh(&mut self) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        let page = self.queries.run_listing(&self.state).await?;
        self.current = Some(page.clone());
        Ok(page)
    }

    pub async fn set_search_term(
        &mut self,
        term: &str,
    ) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        self.state = self.state.clone().with_search_term(term);
        self.state.reset_pages();
        self.refresh().await
    }

    pub async fn set_category(
        &mut self,
        category: CategoryFilter,
    ) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        self.state.category = category;
        self.state.reset_pages();
        self.refresh().await
    }

    pub async fn set_sort_order(
        &mut self,
        sort_order: SortOrder,
    ) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        self.state.sort_order = sort_order;
        self.state.reset_pages();
        self.refresh().await
    }

    /// Reveal one more page after the load delay. Before anything has been
    /// shown this draws the first page; once everything is shown it returns
    /// the current page without waiting or advancing.
    pub async fn load_more(&mut self) -> ApplicationResult<ListingPageDto<ArticleDto>> {
        if self.current.is_none() {
            return self.refresh().await;
        }
        if let Some(current) = self.current.as_ref().filter(|page| !page.has_more) {
            tracing::warn!(page_count = self.state.page_count.get(), "nothing more to load");
            return Ok(current.clone());
        }

        if !self.load_delay.is_zero() {
            tokio::time::sleep(self.load_delay).await;
        }
        self.state.advance_page();
        self.refresh().await
    }

    /// Open an article from the listing, counting the view.
    pub async fn open_article(&self, id: i64) -> ApplicationResult<ArticleDto> {
        self.commands.record_view(RecordViewCommand { id }).await
    }
}
