use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

#[derive(Debug, Clone)]
pub struct GetArticleByIdQuery {
    id: ArticleId,
}

impl GetArticleByIdQuery {
    /// Any non-empty string is accepted; unknown ids surface later as not found.
    pub fn new(id: impl Into<String>) -> ApplicationResult<Self> {
        let id = ArticleId::new(id)?;
        Ok(Self { id })
    }
}

impl ArticleQueryService {
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> ApplicationResult<ArticleDto> {
        let article = self
            .read_repo
            .find_by_id(&query.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        tracing::debug!(article_id = %article.id, "fetched article");
        Ok(article.into())
    }
}
