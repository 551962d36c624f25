use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Supplies the catalog. The returned order is the catalog order that
/// listing ties fall back to.
#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}

#[async_trait]
pub trait ArticleViewRepository: Send + Sync {
    async fn record_view(&self, id: ArticleId) -> DomainResult<Article>;
}
