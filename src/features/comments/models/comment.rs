use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::comments::dtos::CommentResponseDto;
use crate::shared::format::display_timestamp;

/// Database model for comment
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub is_approved: bool,
}

/// Validated, trimmed comment ready for insert.
///
/// Always stored approved; there is no moderation queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub content: String,
    pub ip_address: String,
}

impl From<Comment> for CommentResponseDto {
    fn from(c: Comment) -> Self {
        Self {
            timestamp: display_timestamp(&c.created_at),
            id: c.id,
            author: c.author,
            content: c.content,
            created_at: c.created_at,
        }
    }
}
