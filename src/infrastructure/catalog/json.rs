// src/infrastructure/catalog/json.rs
use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::article::{Article, ArticleExcerpt, ArticleId, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// One entry of a JSON seed file. Field names follow the news page's data
/// (`date`, `views`, `popular`), with the domain names accepted as aliases.
#[derive(Debug, Deserialize)]
struct ArticleRecord {
    id: i64,
    title: String,
    excerpt: String,
    category: String,
    #[serde(alias = "published_on")]
    date: NaiveDate,
    #[serde(default, alias = "view_count")]
    views: u64,
    #[serde(default, alias = "featured")]
    popular: bool,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    content: Option<String>,
}

impl TryFrom<ArticleRecord> for Article {
    type Error = DomainError;

    fn try_from(record: ArticleRecord) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(record.id)?,
            title: ArticleTitle::new(record.title)?,
            excerpt: ArticleExcerpt::new(record.excerpt)?,
            category: record.category.parse()?,
            published_on: record.date,
            view_count: record.views,
            featured: record.popular,
            image: record.image,
            content: record.content,
        })
    }
}

/// Parse a JSON array of articles, keeping file order.
pub fn parse_catalog(json: &str) -> DomainResult<Vec<Article>> {
    let records: Vec<ArticleRecord> = serde_json::from_str(json)
        .map_err(|err| DomainError::Persistence(format!("invalid catalog json: {err}")))?;

    let mut seen = HashSet::new();
    let mut articles = Vec::with_capacity(records.len());
    for record in records {
        let article = Article::try_from(record)?;
        if !seen.insert(article.id) {
            return Err(DomainError::Validation(format!(
                "duplicate article id {}",
                article.id
            )));
        }
        articles.push(article);
    }
    Ok(articles)
}

pub async fn load_catalog_file(path: impl AsRef<Path>) -> DomainResult<Vec<Article>> {
    let path = path.as_ref();
    let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
        DomainError::Persistence(format!("failed to read {}: {err}", path.display()))
    })?;
    let articles = parse_catalog(&raw)?;
    tracing::info!(path = %path.display(), count = articles.len(), "catalog loaded");
    Ok(articles)
}
