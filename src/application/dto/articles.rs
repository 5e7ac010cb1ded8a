use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into_inner(),
            author: article.author.into_inner(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
        }
    }
}
