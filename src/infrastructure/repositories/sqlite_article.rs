use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleContent, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteArticleRepository {
    pool: SqlitePool,
}

impl SqliteArticleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: String,
    author: String,
    title: String,
    content: String,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    /// A stored row that fails validation is a storage fault, not bad input.
    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let corrupt = |err: DomainError| DomainError::Persistence(format!("corrupt article row: {err}"));
        Ok(Article {
            id: ArticleId::new(row.id).map_err(corrupt)?,
            author: ArticleAuthor::new(row.author).map_err(corrupt)?,
            title: ArticleTitle::new(row.title).map_err(corrupt)?,
            content: ArticleContent::new(row.content).map_err(corrupt)?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleRepository {
    async fn insert(&self, article: Article) -> DomainResult<Article> {
        let Article {
            id,
            author,
            title,
            content,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, author, title, content) VALUES (?, ?, ?, ?) RETURNING id, author, title, content",
        )
        .bind(id.as_str())
        .bind(author.as_str())
        .bind(title.as_str())
        .bind(content.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleRepository {
    async fn find_by_id(&self, id: &ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author, title, content FROM articles WHERE id = ?",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author, title, content FROM articles ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
