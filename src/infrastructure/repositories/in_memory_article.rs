use crate::domain::article::{Article, ArticleId, ArticleReadRepository, ArticleWriteRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    articles: Vec<Article>,
    index: HashMap<ArticleId, usize>,
}

/// Process-local store. Records are kept in insertion order with an id index
/// beside them; both are updated under one write lock.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    store: RwLock<Store>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: Article) -> DomainResult<Article> {
        let mut store = self.store.write().await;
        if store.index.contains_key(&article.id) {
            return Err(DomainError::Persistence("duplicate article id".into()));
        }

        let position = store.articles.len();
        store.index.insert(article.id.clone(), position);
        store.articles.push(article.clone());
        Ok(article)
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let store = self.store.read().await;
        Ok(store
            .index
            .get(id)
            .and_then(|&position| store.articles.get(position))
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.store.read().await.articles.clone())
    }
}
