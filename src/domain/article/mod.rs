pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::Article;
pub use repository::{ArticleReadRepository, ArticleViewRepository};
pub use value_objects::{ArticleExcerpt, ArticleId, ArticleTitle, Category};
