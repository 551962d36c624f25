use crate::domain::errors::{DomainError, DomainResult};
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleExcerpt(String);

impl ArticleExcerpt {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("excerpt cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArticleExcerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Editorial category of an article, identified by its slug.
///
/// Slugs outside the known set are kept verbatim in [`Category::Other`] so a
/// selector naming one still filters by strict equality (and usually matches
/// nothing). Equality and hashing go through [`Category::slug`], so
/// `Other("events")` and `Events` are the same category.
#[derive(Debug, Clone)]
pub enum Category {
    Events,
    SuccessStories,
    Volunteer,
    Announcements,
    Other(String),
}

impl Category {
    pub const KNOWN: [Category; 4] = [
        Category::Events,
        Category::SuccessStories,
        Category::Volunteer,
        Category::Announcements,
    ];

    pub fn slug(&self) -> &str {
        match self {
            Category::Events => "events",
            Category::SuccessStories => "success-stories",
            Category::Volunteer => "volunteer",
            Category::Announcements => "announcements",
            Category::Other(slug) => slug,
        }
    }

    /// Singular display label; unknown slugs are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            Category::Events => "Event",
            Category::SuccessStories => "Success Story",
            Category::Volunteer => "Volunteer",
            Category::Announcements => "Announcement",
            Category::Other(slug) => slug,
        }
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::Validation("category cannot be empty".into()));
        }
        Ok(match value {
            "events" => Category::Events,
            "success-stories" => Category::SuccessStories,
            "volunteer" => Category::Volunteer,
            "announcements" => Category::Announcements,
            other => Category::Other(other.to_string()),
        })
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.slug() == other.slug()
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slug().hash(state);
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
