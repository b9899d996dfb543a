use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ClientIp;
use crate::features::contacts::models::NewContact;
use crate::shared::constants::{
    CONTACT_EMAIL_MAX_CHARS, CONTACT_MESSAGE_MAX_CHARS, CONTACT_NAME_MAX_CHARS,
    CONTACT_SUBJECT_MAX_CHARS,
};
use crate::shared::validation::{present, within_max_chars, EMAIL_REGEX};

/// Acknowledgment returned after a successful submission
pub const CONTACT_ACK_MESSAGE: &str = "Thank you for your message! I will get back to you soon.";

/// Request DTO for the contact form
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateContactDto {
    /// Full name, at most 100 characters
    pub name: Option<String>,
    /// Reply address, at most 255 characters
    pub email: Option<String>,
    /// At most 200 characters
    pub subject: Option<String>,
    /// At most 2000 characters
    pub message: Option<String>,
}

impl CreateContactDto {
    /// Apply the form rules in order (first failure wins), then sanitize.
    pub fn into_new_contact(self, client_ip: ClientIp) -> Result<NewContact> {
        let (Some(name), Some(email), Some(subject), Some(message)) = (
            present(self.name),
            present(self.email),
            present(self.subject),
            present(self.message),
        ) else {
            return Err(AppError::Validation("All fields are required".to_string()));
        };

        let bounds = [
            (&name, CONTACT_NAME_MAX_CHARS, "Name too long (max 100 characters)"),
            (&email, CONTACT_EMAIL_MAX_CHARS, "Email too long (max 255 characters)"),
            (&subject, CONTACT_SUBJECT_MAX_CHARS, "Subject too long (max 200 characters)"),
            (&message, CONTACT_MESSAGE_MAX_CHARS, "Message too long (max 2000 characters)"),
        ];
        if let Some((_, _, reason)) = bounds
            .iter()
            .find(|(value, max, _)| !within_max_chars(value, *max))
        {
            return Err(AppError::Validation(reason.to_string()));
        }

        if !EMAIL_REGEX.is_match(&email) {
            return Err(AppError::Validation("Invalid email format".to_string()));
        }

        Ok(NewContact {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
            ip_address: client_ip.0,
        })
    }
}

/// Response DTO after a submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmittedDto {
    pub id: i64,
    pub message: String,
}

/// Response DTO for the admin listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactResponseDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub is_read: bool,
}
