// src/infrastructure/repositories/in_memory_article.rs
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::article::{Article, ArticleId, ArticleReadRepository, ArticleViewRepository};
use crate::domain::errors::{DomainError, DomainResult};

/// Catalog held in process memory for the lifetime of the session. View
/// counts change only here and are lost when the process exits.
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
}

impl InMemoryArticleRepository {
    pub fn new(articles: Vec<Article>) -> Self {
        Self {
            articles: RwLock::new(articles),
        }
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|article| article.id == id).cloned())
    }
}

#[async_trait]
impl ArticleViewRepository for InMemoryArticleRepository {
    async fn record_view(&self, id: ArticleId) -> DomainResult<Article> {
        let mut articles = self.articles.write().await;
        let article = articles
            .iter_mut()
            .find(|article| article.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("article {id} not found")))?;
        article.record_view();
        Ok(article.clone())
    }
}
