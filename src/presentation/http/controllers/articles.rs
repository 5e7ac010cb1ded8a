// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Every field is optional at the wire level so that missing and null values
/// reach domain validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<CreateArticleRequest> for CreateArticleCommand {
    fn from(request: CreateArticleRequest) -> Self {
        Self {
            author: request.author,
            title: request.title,
            content: request.content,
        }
    }
}

#[utoipa::path(
    post,
    path = "/create-article/",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = crate::application::dto::ArticleDto),
        (status = 400, description = "Missing or empty field, or malformed body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) = payload?;

    state
        .services
        .article_commands
        .create_article(payload.into())
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/article/{id}/",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = crate::application::dto::ArticleDto),
        (status = 404, description = "No article with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let query = GetArticleByIdQuery::new(id).into_http()?;

    state
        .services
        .article_queries
        .get_article_by_id(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/article-list/",
    responses(
        (status = 200, description = "All articles in creation order.", body = [crate::application::dto::ArticleDto])
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(Json)
}
