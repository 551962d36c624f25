// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService, ports::util::SlugGenerator,
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleViewRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_view_repo: Arc<dyn ArticleViewRepository>,
        slugger: Arc<dyn SlugGenerator>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_view_repo),
            Arc::clone(&slugger),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&slugger),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
