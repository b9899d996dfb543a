use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::PreferredLocale;
use crate::features::i18n::dtos::{LocaleTableDto, TranslateQuery, TranslationResponseDto};
use crate::features::i18n::models::Locale;
use crate::features::i18n::services::TranslationService;
use crate::shared::types::ApiResponse;

/// Get the whole string table for a locale
#[utoipa::path(
    get,
    path = "/api/i18n/{locale}",
    params(
        ("locale" = String, Path, description = "Locale code: en or vi")
    ),
    responses(
        (status = 200, description = "String table", body = ApiResponse<LocaleTableDto>),
        (status = 404, description = "Unsupported locale")
    ),
    tag = "i18n"
)]
pub async fn get_locale_table(
    State(service): State<Arc<TranslationService>>,
    Path(locale): Path<String>,
) -> Result<Json<ApiResponse<LocaleTableDto>>> {
    let locale = locale
        .parse::<Locale>()
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    Ok(Json(ApiResponse::success(LocaleTableDto {
        locale,
        strings: service.table(locale).clone(),
    })))
}

/// Resolve a dotted key in the caller's locale
///
/// Unknown keys resolve to the key itself.
#[utoipa::path(
    get,
    path = "/api/i18n/translate",
    params(
        TranslateQuery,
        ("lang" = Option<String>, Query, description = "Locale code (en or vi); overrides the `language` cookie")
    ),
    responses(
        (status = 200, description = "Resolved string", body = ApiResponse<TranslationResponseDto>),
        (status = 400, description = "Missing key")
    ),
    tag = "i18n"
)]
pub async fn translate(
    State(service): State<Arc<TranslationService>>,
    PreferredLocale(preferred): PreferredLocale,
    Query(query): Query<TranslateQuery>,
) -> Result<Json<ApiResponse<TranslationResponseDto>>> {
    let key = query
        .key
        .ok_or_else(|| AppError::BadRequest("Query parameter 'key' is required".to_string()))?;

    let ctx = service.context(preferred);
    Ok(Json(ApiResponse::success(TranslationResponseDto {
        value: ctx.t(&key),
        locale: ctx.locale(),
        key,
    })))
}
