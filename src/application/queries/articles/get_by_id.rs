use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(query.id).map_err(ApplicationError::from_domain)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await
            .map_err(ApplicationError::from_domain)?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(ArticleDto::from_article(&article, self.slugger.as_ref()))
    }
}
