use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ClientIp;
use crate::features::comments::dtos::{CommentResponseDto, CreateCommentDto};
use crate::features::comments::repositories::{CommentRepository, PgCommentRepository};
use crate::shared::constants::UNKNOWN_CLIENT_IP;

/// Service for the public comment wall
pub struct CommentService {
    repository: Arc<dyn CommentRepository>,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgCommentRepository::new(pool)))
    }

    pub fn with_repository(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    /// Validate, trim and store a comment. Nothing reaches the store when
    /// validation fails.
    pub async fn create(
        &self,
        dto: CreateCommentDto,
        client_ip: ClientIp,
    ) -> Result<CommentResponseDto> {
        let new_comment = dto.into_new_comment(client_ip)?;

        let comment = self
            .repository
            .insert(new_comment)
            .await
            .map_err(|e| AppError::persistence("Failed to create comment", e))?;

        tracing::info!(
            "Comment created: id={}, author={}, ip={}",
            comment.id,
            comment.author,
            comment.ip_address.as_deref().unwrap_or(UNKNOWN_CLIENT_IP)
        );

        Ok(comment.into())
    }

    /// Approved comments, newest first
    pub async fn list(&self) -> Result<Vec<CommentResponseDto>> {
        let comments = self
            .repository
            .list_approved()
            .await
            .map_err(|e| AppError::persistence("Failed to fetch comments", e))?;

        Ok(comments.into_iter().map(Into::into).collect())
    }
}
