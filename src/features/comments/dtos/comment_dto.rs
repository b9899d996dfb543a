use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ClientIp;
use crate::features::comments::models::NewComment;
use crate::shared::constants::{COMMENT_AUTHOR_MAX_CHARS, COMMENT_CONTENT_MAX_CHARS};
use crate::shared::validation::{present, within_max_chars};

/// Request DTO for posting a comment
///
/// Fields are optional at the JSON level so a missing field is reported
/// with the same message as an empty one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentDto {
    /// Display name, at most 100 characters
    pub author: Option<String>,

    /// Comment body, at most 1000 characters
    pub content: Option<String>,
}

impl CreateCommentDto {
    /// Check the submitted values, then trim them into an insertable comment.
    pub fn into_new_comment(self, client_ip: ClientIp) -> Result<NewComment> {
        let (Some(author), Some(content)) = (present(self.author), present(self.content)) else {
            return Err(AppError::Validation(
                "Author and content are required".to_string(),
            ));
        };

        if !within_max_chars(&author, COMMENT_AUTHOR_MAX_CHARS) {
            return Err(AppError::Validation(
                "Author name too long (max 100 characters)".to_string(),
            ));
        }

        if !within_max_chars(&content, COMMENT_CONTENT_MAX_CHARS) {
            return Err(AppError::Validation(
                "Content too long (max 1000 characters)".to_string(),
            ));
        }

        Ok(NewComment {
            author: author.trim().to_string(),
            content: content.trim().to_string(),
            ip_address: client_ip.0,
        })
    }
}

/// Response DTO for comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponseDto {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Display form of `created_at`, e.g. "5 Mar 2025, 09:07"
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(author: &str, content: &str) -> CreateCommentDto {
        CreateCommentDto {
            author: Some(author.to_string()),
            content: Some(content.to_string()),
        }
    }

    fn ip() -> ClientIp {
        ClientIp("203.0.113.7".to_string())
    }

    fn validation_message(result: Result<NewComment>) -> String {
        match result {
            Err(AppError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_trims_and_stamps_origin() {
        let comment = dto("  Ana ", "\nHi there  ").into_new_comment(ip()).unwrap();
        assert_eq!(
            comment,
            NewComment {
                author: "Ana".to_string(),
                content: "Hi there".to_string(),
                ip_address: "203.0.113.7".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_fields() {
        let missing = CreateCommentDto {
            author: Some("Ana".to_string()),
            content: None,
        };
        assert_eq!(
            validation_message(missing.into_new_comment(ip())),
            "Author and content are required"
        );
        assert_eq!(
            validation_message(dto("", "Hi").into_new_comment(ip())),
            "Author and content are required"
        );
        assert_eq!(
            validation_message(CreateCommentDto::default().into_new_comment(ip())),
            "Author and content are required"
        );
    }

    #[test]
    fn test_author_bound() {
        assert!(dto(&"a".repeat(100), "Hi").into_new_comment(ip()).is_ok());
        assert_eq!(
            validation_message(dto(&"a".repeat(101), "Hi").into_new_comment(ip())),
            "Author name too long (max 100 characters)"
        );
    }

    #[test]
    fn test_content_bound() {
        assert!(dto("Ana", &"c".repeat(1000)).into_new_comment(ip()).is_ok());
        assert_eq!(
            validation_message(dto("Ana", &"c".repeat(1001)).into_new_comment(ip())),
            "Content too long (max 1000 characters)"
        );
    }

    #[test]
    fn test_author_checked_before_content() {
        assert_eq!(
            validation_message(dto(&"a".repeat(101), &"c".repeat(1001)).into_new_comment(ip())),
            "Author name too long (max 100 characters)"
        );
    }
}
