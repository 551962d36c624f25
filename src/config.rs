// src/config.rs
use std::{env, num::NonZeroUsize, path::PathBuf, time::Duration};
use thiserror::Error;

use crate::domain::listing::{CategoryFilter, SortOrder};

#[derive(Clone, Debug)]
pub struct AppConfig {
    page_size: NonZeroUsize,
    load_delay: Duration,
    catalog_path: Option<PathBuf>,
    search: String,
    category: CategoryFilter,
    sort_order: SortOrder,
    max_pages: NonZeroUsize,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(4).unwrap();
const DEFAULT_LOAD_DELAY_MS: u64 = 800;

impl AppConfig {
    /// Build configuration from environment variables. Unset values fall
    /// back to the news page defaults; malformed values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] over an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let page_size = match lookup("NEWS_PAGE_SIZE") {
            Some(raw) => parse_positive("NEWS_PAGE_SIZE", &raw)?,
            None => DEFAULT_PAGE_SIZE,
        };

        let load_delay_ms = match lookup("NEWS_LOAD_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid(format!("NEWS_LOAD_DELAY_MS must be a number, got '{raw}'"))
            })?,
            None => DEFAULT_LOAD_DELAY_MS,
        };

        let catalog_path = lookup("NEWS_CATALOG_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let search = lookup("NEWS_SEARCH").unwrap_or_default();

        let category = match lookup("NEWS_CATEGORY") {
            Some(raw) => raw
                .parse::<CategoryFilter>()
                .map_err(|err| ConfigError::Invalid(format!("NEWS_CATEGORY: {err}")))?,
            None => CategoryFilter::All,
        };

        let sort_order = match lookup("NEWS_SORT") {
            Some(raw) => raw
                .parse::<SortOrder>()
                .map_err(|err| ConfigError::Invalid(format!("NEWS_SORT: {err}")))?,
            None => SortOrder::Newest,
        };

        let max_pages = match lookup("NEWS_MAX_PAGES") {
            Some(raw) => parse_positive("NEWS_MAX_PAGES", &raw)?,
            None => NonZeroUsize::MIN,
        };

        Ok(Self {
            page_size,
            load_delay: Duration::from_millis(load_delay_ms),
            catalog_path,
            search,
            category,
            sort_order,
            max_pages,
        })
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    pub fn load_delay(&self) -> Duration {
        self.load_delay
    }

    /// JSON seed file; `None` means the built-in sample catalog.
    pub fn catalog_path(&self) -> Option<&PathBuf> {
        self.catalog_path.as_ref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn max_pages(&self) -> NonZeroUsize {
        self.max_pages
    }
}

fn parse_positive(key: &str, raw: &str) -> Result<NonZeroUsize, ConfigError> {
    raw.trim()
        .parse::<NonZeroUsize>()
        .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer, got '{raw}'")))
}
