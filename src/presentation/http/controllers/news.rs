// src/presentation/http/controllers/news.rs
use crate::application::{
    dto::NewsFeedDto,
    queries::news::{SearchNewsQuery, SingleSourceQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Ctx;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// `page` stays a string here so that a non-numeric value is reported with
/// the gateway's own validation message.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct NewsParams {
    /// Free-text title filter forwarded upstream.
    #[serde(default)]
    pub search: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page: Option<String>,
}

#[utoipa::path(
    get,
    path = "/news",
    params(NewsParams),
    responses(
        (status = 200, description = "Merged page from every news source.", body = NewsFeedDto),
        (status = 400, description = "Invalid page number.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "A news source failed.", body = crate::presentation::http::error::ErrorResponse),
        (status = 504, description = "The news sources did not answer in time.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn list_news(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    Query(params): Query<NewsParams>,
) -> HttpResult<Json<NewsFeedDto>> {
    state
        .services
        .news_queries
        .search_news(
            &ctx,
            SearchNewsQuery {
                search: params.search,
                page: params.page,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/details",
    params(NewsParams),
    responses(
        (status = 200, description = "Page from the details source.", body = NewsFeedDto),
        (status = 400, description = "Invalid page number.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "The details source failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn news_details(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    Query(params): Query<NewsParams>,
) -> HttpResult<Json<NewsFeedDto>> {
    state
        .services
        .news_queries
        .news_details(&ctx, params.into())
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/news/filter",
    params(NewsParams),
    responses(
        (status = 200, description = "Page from the filter source.", body = NewsFeedDto),
        (status = 400, description = "Invalid page number.", body = crate::presentation::http::error::ErrorResponse),
        (status = 502, description = "The filter source failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "News"
)]
pub async fn filter_news(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    Query(params): Query<NewsParams>,
) -> HttpResult<Json<NewsFeedDto>> {
    state
        .services
        .news_queries
        .filtered_news(&ctx, params.into())
        .await
        .into_http()
        .map(Json)
}

impl From<NewsParams> for SingleSourceQuery {
    fn from(params: NewsParams) -> Self {
        Self {
            search: params.search,
            page: params.page,
        }
    }
}
