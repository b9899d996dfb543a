use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::i18n::{dtos as i18n_dtos, handlers as i18n_handlers, models as i18n_models};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Comments (public)
        comments_handlers::list_comments,
        comments_handlers::create_comment,
        // Contacts
        contacts_handlers::submit_contact,
        contacts_handlers::list_contacts,
        // i18n (public)
        i18n_handlers::get_locale_table,
        i18n_handlers::translate,
    ),
    components(
        schemas(
            // Comments
            comments_dtos::CreateCommentDto,
            comments_dtos::CommentResponseDto,
            ApiResponse<comments_dtos::CommentResponseDto>,
            ApiResponse<Vec<comments_dtos::CommentResponseDto>>,
            // Contacts
            contacts_dtos::CreateContactDto,
            contacts_dtos::ContactSubmittedDto,
            contacts_dtos::ContactResponseDto,
            ApiResponse<contacts_dtos::ContactSubmittedDto>,
            ApiResponse<Vec<contacts_dtos::ContactResponseDto>>,
            // i18n
            i18n_models::Locale,
            i18n_dtos::TranslationResponseDto,
            i18n_dtos::LocaleTableDto,
            ApiResponse<i18n_dtos::TranslationResponseDto>,
            ApiResponse<i18n_dtos::LocaleTableDto>,
        )
    ),
    tags(
        (name = "comments", description = "Public comment wall"),
        (name = "contacts", description = "Contact form and admin listing"),
        (name = "i18n", description = "Locale string tables (en, vi)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Portfolio API",
        version = "0.1.0",
        description = "Comments, contact form and translations for the portfolio site",
    )
)]
pub struct ApiDoc;

/// Adds the Basic scheme guarding the admin listing
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_basic",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
