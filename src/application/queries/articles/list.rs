use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

/// Fetch every stored article. Carries no parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.read_repo.list().await?;
        tracing::debug!(count = records.len(), "listed articles");
        Ok(records.into_iter().map(Into::into).collect())
    }
}
