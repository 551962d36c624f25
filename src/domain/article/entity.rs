// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleExcerpt, ArticleId, ArticleTitle, Category};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub excerpt: ArticleExcerpt,
    pub category: Category,
    pub published_on: NaiveDate,
    pub view_count: u64,
    pub featured: bool,
    pub image: Option<String>,
    pub content: Option<String>,
}

impl Article {
    pub fn record_view(&mut self) {
        self.view_count = self.view_count.saturating_add(1);
    }
}
