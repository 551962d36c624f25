// tests/support/helpers.rs
use std::sync::Arc;

use newsroom_core::application::{
    dto::ArticleDto, ports::util::SlugGenerator, services::ApplicationServices,
};
use newsroom_core::domain::article::{Article, ArticleReadRepository, ArticleViewRepository};
use newsroom_core::infrastructure::{
    catalog::sample_catalog, repositories::InMemoryArticleRepository, util::TitleSlugGenerator,
};
use once_cell::sync::Lazy;

pub static SAMPLE: Lazy<Vec<Article>> =
    Lazy::new(|| sample_catalog().expect("sample catalog is valid"));

pub fn services_over(articles: Vec<Article>) -> ApplicationServices {
    let repo = Arc::new(InMemoryArticleRepository::new(articles));
    let read_repo: Arc<dyn ArticleReadRepository> = repo.clone();
    let view_repo: Arc<dyn ArticleViewRepository> = repo;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(TitleSlugGenerator);
    ApplicationServices::new(read_repo, view_repo, slugger)
}

pub fn sample_services() -> ApplicationServices {
    services_over(SAMPLE.clone())
}

pub fn dto_ids(items: &[ArticleDto]) -> Vec<i64> {
    items.iter().map(|item| item.id).collect()
}
