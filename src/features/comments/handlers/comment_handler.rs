use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, ClientIp};
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::comments::services::CommentService;
use crate::shared::types::ApiResponse;

/// List approved comments, newest first
#[utoipa::path(
    get,
    path = "/api/comments",
    responses(
        (status = 200, description = "Approved comments", body = ApiResponse<Vec<CommentResponseDto>>),
        (status = 500, description = "Failed to fetch comments")
    ),
    tag = "comments"
)]
pub async fn list_comments(
    State(service): State<Arc<CommentService>>,
) -> Result<Json<ApiResponse<Vec<CommentResponseDto>>>> {
    let comments = service.list().await?;
    Ok(Json(ApiResponse::list(comments)))
}

/// Post a comment
///
/// Public endpoint. The comment is visible immediately.
#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment posted", body = ApiResponse<CommentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Failed to create comment")
    ),
    tag = "comments"
)]
pub async fn create_comment(
    State(service): State<Arc<CommentService>>,
    client_ip: ClientIp,
    AppJson(dto): AppJson<CreateCommentDto>,
) -> Result<(StatusCode, Json<ApiResponse<CommentResponseDto>>)> {
    let comment = service.create(dto, client_ip).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(comment).with_message("Comment posted successfully")),
    ))
}
