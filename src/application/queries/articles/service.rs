use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, slugger: Arc<dyn SlugGenerator>) -> Self {
        Self { read_repo, slugger }
    }
}
