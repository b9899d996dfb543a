use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::features::i18n::models::Locale;

/// Query params for resolving a single key
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TranslateQuery {
    /// Dotted key path, e.g. `about.skill1Desc`
    pub key: Option<String>,
}

/// Response DTO for a resolved key
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TranslationResponseDto {
    pub key: String,
    pub locale: Locale,
    /// Resolved string, or the key itself when nothing matched
    pub value: String,
}

/// Response DTO for a whole locale table
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocaleTableDto {
    pub locale: Locale,
    #[schema(value_type = Object)]
    pub strings: Value,
}
