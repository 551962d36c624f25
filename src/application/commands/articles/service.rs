// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{application::ports::util::SlugGenerator, domain::article::ArticleViewRepository};

pub struct ArticleCommandService {
    pub(super) view_repo: Arc<dyn ArticleViewRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl ArticleCommandService {
    pub fn new(view_repo: Arc<dyn ArticleViewRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { view_repo, slugger }
    }
}
