// src/application/commands/articles/record_view.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct RecordViewCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Count one view of an article. The count lives only as long as the
    /// backing repository.
    pub async fn record_view(&self, command: RecordViewCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id).map_err(ApplicationError::from_domain)?;
        let article = self.view_repo.record_view(id).await
            .map_err(ApplicationError::from_domain)?;

        tracing::info!(article_id = %article.id, views = article.view_count, "article viewed");
        Ok(ArticleDto::from_article(&article, self.slugger.as_ref()))
    }
}
