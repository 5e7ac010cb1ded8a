// tests/support/builders.rs
use blog_core::domain::article::*;

pub struct ArticleBuilder {
    id: String,
    author: String,
    title: String,
    content: String,
}

impl ArticleBuilder {
    pub fn new() -> Self {
        Self {
            id: "article-1".into(),
            author: "jane@doe.com".into(),
            title: "New Article".into(),
            content: "Super extra awesome article".into(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn build(self) -> Article {
        Article {
            id: ArticleId::new(self.id).unwrap(),
            author: ArticleAuthor::new(self.author).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            content: ArticleContent::new(self.content).unwrap(),
        }
    }
}

impl Default for ArticleBuilder {
    fn default() -> Self {
        Self::new()
    }
}
