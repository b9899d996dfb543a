use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, ClientIp};
use crate::features::contacts::dtos::{
    ContactResponseDto, ContactSubmittedDto, CreateContactDto,
};
use crate::features::contacts::services::ContactService;
use crate::shared::types::ApiResponse;

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contacts",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Submission stored", body = ApiResponse<ContactSubmittedDto>),
        (status = 400, description = "Validation error"),
        (status = 500, description = "Failed to submit contact form")
    ),
    tag = "contacts"
)]
pub async fn submit_contact(
    State(service): State<Arc<ContactService>>,
    client_ip: ClientIp,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactSubmittedDto>>)> {
    let submitted = service.submit(dto, client_ip).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(submitted))))
}

/// List every contact submission (admin)
///
/// Requires the operator's Basic credentials.
#[utoipa::path(
    get,
    path = "/api/contacts",
    responses(
        (status = 200, description = "All submissions, newest first", body = ApiResponse<Vec<ContactResponseDto>>),
        (status = 401, description = "Missing or invalid admin credentials"),
        (status = 500, description = "Failed to fetch contacts")
    ),
    tag = "contacts",
    security(
        ("admin_basic" = [])
    )
)]
pub async fn list_contacts(
    State(service): State<Arc<ContactService>>,
) -> Result<Json<ApiResponse<Vec<ContactResponseDto>>>> {
    let contacts = service.list().await?;
    Ok(Json(ApiResponse::list(contacts)))
}
