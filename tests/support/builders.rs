// tests/support/builders.rs
use chrono::NaiveDate;

use newsroom_core::domain::article::*;

pub struct ArticleBuilder {
    id: i64,
    title: String,
    excerpt: String,
    category: Category,
    published_on: NaiveDate,
    view_count: u64,
    featured: bool,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Test Article {id}"),
            excerpt: "Test excerpt".into(),
            category: Category::Events,
            published_on: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            view_count: 0,
            featured: false,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn published_on(mut self, year: i32, month: u32, day: u32) -> Self {
        self.published_on = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        self
    }

    pub fn views(mut self, view_count: u64) -> Self {
        self.view_count = view_count;
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            excerpt: ArticleExcerpt::new(self.excerpt).unwrap(),
            category: self.category,
            published_on: self.published_on,
            view_count: self.view_count,
            featured: self.featured,
            image: None,
            content: None,
        }
    }
}
