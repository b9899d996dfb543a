use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::contacts::dtos::ContactResponseDto;

/// Database model for contact
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub ip_address: Option<String>,
    pub is_read: bool,
}

/// Validated, sanitized contact submission; stored unread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub ip_address: String,
}

impl From<Contact> for ContactResponseDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            subject: c.subject,
            message: c.message,
            created_at: c.created_at,
            is_read: c.is_read,
        }
    }
}
