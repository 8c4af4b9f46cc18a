// src/presentation/http/controllers/comments.rs
use crate::application::{
    commands::comments::SubmitCommentCommand, dto::CommentDto,
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Ctx;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Query, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddCommentRequest {
    pub author: String,
    pub text: String,
    pub news_id: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    #[serde(default)]
    pub news_id: Option<String>,
}

#[utoipa::path(
    post,
    path = "/comments/add",
    request_body = AddCommentRequest,
    responses(
        (status = 201, description = "Comment accepted and stored.", body = CommentDto),
        (status = 400, description = "Malformed or invalid comment.", body = crate::presentation::http::error::ErrorResponse),
        (status = 403, description = "Comment rejected by moderation.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Moderation or storage unavailable.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn add_comment(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    payload: Result<Json<AddCommentRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<CommentDto>)> {
    let Json(payload) = payload.map_err(|rejection| HttpError::from_json_rejection(&rejection))?;

    let command = SubmitCommentCommand {
        author: payload.author,
        text: payload.text,
        news_id: payload.news_id,
        parent_id: payload.parent_id,
    };

    let comment = state
        .services
        .comment_commands
        .submit_comment(&ctx, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(comment)))
}

#[utoipa::path(
    get,
    path = "/comments/get",
    params(CommentListParams),
    responses(
        (status = 200, description = "Comments of one news item.", body = [CommentDto]),
        (status = 400, description = "Missing or invalid news id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    Ctx(ctx): Ctx,
    Query(params): Query<CommentListParams>,
) -> HttpResult<Json<Vec<CommentDto>>> {
    state
        .services
        .comment_queries
        .list_by_news(
            &ctx,
            ListCommentsQuery {
                news_id: params.news_id,
            },
        )
        .await
        .into_http()
        .map(Json)
}
