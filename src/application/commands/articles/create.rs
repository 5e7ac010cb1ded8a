// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::NewArticle,
};

/// Raw creation input. `None` means the field was missing or null in the
/// request; validation happens in [`ArticleCommandService::create_article`].
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    author: Option<String>,
    title: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            author: self.author,
            title: self.title,
            content: self.content,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let CreateArticleCommand {
            author,
            title,
            content,
        } = command;

        let new_article = NewArticle::validate(author, title, content)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected article creation"))?;

        let id = self.id_generator.next_id();
        let created = self.write_repo.insert(new_article.into_article(id)).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
