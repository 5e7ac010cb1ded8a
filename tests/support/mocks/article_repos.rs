// tests/support/mocks/article_repos.rs
use async_trait::async_trait;
use std::sync::Mutex;

use blog_core::domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository};
use blog_core::domain::errors::{DomainError, DomainResult};

/* -------------------------------- ArticleWriteRepository -------------------------------- */

/// Write repository whose store is always unavailable.
pub struct FailingArticleWrite;

#[async_trait]
impl ArticleWriteRepository for FailingArticleWrite {
    async fn insert(&self, _article: Article) -> DomainResult<Article> {
        Err(DomainError::Persistence("store unavailable".into()))
    }
}

/// Write repository that remembers every article it was asked to insert.
#[derive(Default)]
pub struct RecordingArticleWrite {
    inserted: Mutex<Vec<Article>>,
}

impl RecordingArticleWrite {
    pub fn inserted(&self) -> Vec<Article> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ArticleWriteRepository for RecordingArticleWrite {
    async fn insert(&self, article: Article) -> DomainResult<Article> {
        self.inserted.lock().unwrap().push(article.clone());
        Ok(article)
    }
}

/* -------------------------------- ArticleReadRepository -------------------------------- */

/// Read repository with nothing in it.
pub struct EmptyArticleRead;

#[async_trait]
impl ArticleReadRepository for EmptyArticleRead {
    async fn find_by_id(&self, _id: &ArticleId) -> DomainResult<Option<Article>> {
        Ok(None)
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(vec![])
    }
}
