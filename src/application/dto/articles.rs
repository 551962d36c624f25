use crate::application::ports::util::SlugGenerator;
use crate::domain::article::Article;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: String,
    pub category_label: String,
    pub published_on: NaiveDate,
    pub view_count: u64,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ArticleDto {
    pub fn from_article(article: &Article, slugger: &dyn SlugGenerator) -> Self {
        let id = i64::from(article.id);
        let slug = match slugger.slugify(article.title.as_str()) {
            slug if slug.is_empty() => format!("article-{id}"),
            slug => slug,
        };
        Self {
            id,
            title: article.title.to_string(),
            slug,
            excerpt: article.excerpt.to_string(),
            category: article.category.slug().to_string(),
            category_label: article.category.label().to_string(),
            published_on: article.published_on,
            view_count: article.view_count,
            featured: article.featured,
            image: article.image.clone(),
        }
    }
}
