use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Success envelope: `{"success": true, ...payload}`
///
/// The payload's fields are flattened into the top-level object.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error envelope shared by every failure response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: u16, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error,
            message: message.into(),
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Page query parameter (`?page=N`, 1-indexed, default 1)
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    #[param(minimum = 1)]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 1 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        deleted: i32,
    }

    #[test]
    fn test_success_envelope_flattens_payload() {
        let value = serde_json::to_value(ApiResponse::success(Payload { deleted: 7 })).unwrap();
        assert_eq!(value, json!({ "success": true, "deleted": 7 }));
    }

    #[test]
    fn test_error_envelope_shape() {
        let value = serde_json::to_value(ErrorResponse::new(404, "Resource Not Found")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "error": 404, "message": "Resource Not Found" })
        );
    }

    #[test]
    fn test_page_query_defaults_to_first_page() {
        let query: PageQuery = serde_json::from_value(json!({})).unwrap();
        assert_eq!(query.page, 1);
    }
}
