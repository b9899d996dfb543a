use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope used by every endpoint.
///
/// Absent members are omitted from the JSON so callers only ever see
/// `{success, data?, message?, total?, error?}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            total: None,
            error: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn error(error: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: None,
            total: None,
            error: Some(error.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Full listing: `data` plus `total` as the number of items.
    pub fn list(items: Vec<T>) -> Self {
        let total = items.len();
        Self {
            success: true,
            data: Some(items),
            message: None,
            total: Some(total),
            error: None,
        }
    }
}
