use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::core::extractor::ClientIp;
use crate::features::contacts::dtos::{
    ContactResponseDto, ContactSubmittedDto, CreateContactDto, CONTACT_ACK_MESSAGE,
};
use crate::features::contacts::repositories::{ContactRepository, PgContactRepository};
use crate::shared::constants::UNKNOWN_CLIENT_IP;

/// Service for contact form submissions
pub struct ContactService {
    repository: Arc<dyn ContactRepository>,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgContactRepository::new(pool)))
    }

    pub fn with_repository(repository: Arc<dyn ContactRepository>) -> Self {
        Self { repository }
    }

    /// Validate, sanitize and store a submission
    pub async fn submit(
        &self,
        dto: CreateContactDto,
        client_ip: ClientIp,
    ) -> Result<ContactSubmittedDto> {
        let new_contact = dto.into_new_contact(client_ip)?;

        let contact = self.repository.insert(new_contact).await.map_err(|e| {
            AppError::persistence("Failed to submit contact form. Please try again.", e)
        })?;

        tracing::info!(
            "Contact submission created: id={}, email={}, subject={}, ip={}",
            contact.id,
            contact.email,
            contact.subject,
            contact.ip_address.as_deref().unwrap_or(UNKNOWN_CLIENT_IP)
        );

        Ok(ContactSubmittedDto {
            id: contact.id,
            message: CONTACT_ACK_MESSAGE.to_string(),
        })
    }

    /// Every submission, newest first
    pub async fn list(&self) -> Result<Vec<ContactResponseDto>> {
        let contacts = self
            .repository
            .list_all()
            .await
            .map_err(|e| AppError::persistence("Failed to fetch contacts", e))?;

        Ok(contacts.into_iter().map(Into::into).collect())
    }
}
