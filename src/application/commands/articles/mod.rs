// src/application/commands/articles/mod.rs
mod record_view;
mod service;

pub use record_view::RecordViewCommand;
pub use service::ArticleCommandService;
