use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist a fully identified article. The write is atomic: either the
    /// whole record becomes visible to readers or nothing does. Inserting an
    /// id that already exists fails with `DomainError::Persistence`.
    async fn insert(&self, article: Article) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>>;
    /// All stored articles in insertion order.
    async fn list(&self) -> DomainResult<Vec<Article>>;
}
