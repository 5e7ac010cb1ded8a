// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleAuthor, ArticleContent, ArticleId, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};

/// A persisted article. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub author: ArticleAuthor,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

/// A validated article that has not been assigned an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: ArticleAuthor,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl NewArticle {
    /// Validate raw input. `None` stands for a field that was missing or null.
    /// Fields are checked in the order author, title, content and the first
    /// failure is reported.
    pub fn validate(
        author: Option<String>,
        title: Option<String>,
        content: Option<String>,
    ) -> DomainResult<Self> {
        let author = ArticleAuthor::new(required(author, "author")?)?;
        let title = ArticleTitle::new(required(title, "title")?)?;
        let content = ArticleContent::new(required(content, "content")?)?;

        Ok(Self {
            author,
            title,
            content,
        })
    }

    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            author: self.author,
            title: self.title,
            content: self.content,
        }
    }
}

fn required(value: Option<String>, field: &str) -> DomainResult<String> {
    value.ok_or_else(|| DomainError::Validation(format!("{field} is required")))
}
