use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::i18n::handlers;
use crate::features::i18n::services::TranslationService;

/// Create routes for the i18n feature (public)
pub fn routes(service: Arc<TranslationService>) -> Router {
    Router::new()
        .route("/api/i18n/translate", get(handlers::translate))
        .route("/api/i18n/{locale}", get(handlers::get_locale_table))
        .with_state(service)
}
