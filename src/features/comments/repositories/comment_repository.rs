use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::comments::models::{Comment, NewComment};

const INSERT_COMMENT: &str = r#"
    INSERT INTO comments (author, content, ip_address, is_approved)
    VALUES ($1, $2, $3, true)
    RETURNING id, author, content, created_at, ip_address, is_approved
"#;

const LIST_APPROVED_COMMENTS: &str = r#"
    SELECT id, author, content, created_at, ip_address, is_approved
    FROM comments
    WHERE is_approved = true
    ORDER BY created_at DESC, id DESC
"#;

/// Storage seam for comments
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert an approved comment and return the stored row
    async fn insert(&self, comment: NewComment) -> Result<Comment, sqlx::Error>;

    /// All approved comments, newest first
    async fn list_approved(&self) -> Result<Vec<Comment>, sqlx::Error>;
}

pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn insert(&self, comment: NewComment) -> Result<Comment, sqlx::Error> {
        sqlx::query_as::<_, Comment>(INSERT_COMMENT)
            .bind(comment.author)
            .bind(comment.content)
            .bind(comment.ip_address)
            .fetch_one(&self.pool)
            .await
    }

    async fn list_approved(&self) -> Result<Vec<Comment>, sqlx::Error> {
        sqlx::query_as::<_, Comment>(LIST_APPROVED_COMMENTS)
            .fetch_all(&self.pool)
            .await
    }
}
