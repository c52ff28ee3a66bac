use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every JSON response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope carrying only a message
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(None, Some(message.into()), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_envelope_serialization() {
        let value = serde_json::to_value(ApiResponse::message("Successfully added cell")).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Successfully added cell");
        assert!(value["data"].is_null());
    }

    #[test]
    fn test_error_envelope_serialization() {
        let value = serde_json::to_value(ApiResponse::<()>::error(
            Some("Cell not found".to_string()),
            None,
        ))
        .unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Cell not found");
    }
}
