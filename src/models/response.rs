//! Uniform response envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, ErrorDetail},
    models::book::Book,
};

pub const MSG_SUCCESS: &str = "Success";

/// Envelope returned by every book operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[aliases(
    BookListResponse = ApiResponse<Vec<Book>>,
    BookResponse = ApiResponse<Book>,
    MessageResponse = ApiResponse<String>
)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub is_success: bool,
    /// Human readable outcome
    pub message: String,
    /// Fault detail, only set when the store or the server failed
    pub error: Option<ErrorDetail>,
    /// Operation payload
    pub response: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, response: T) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            error: None,
            response: Some(response),
        }
    }

    /// Success without payload (update, delete)
    pub fn done(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: message.into(),
            error: None,
            response: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: message.into(),
            error: None,
            response: None,
        }
    }

    /// Business failures carry their reason only; faults also attach the error detail.
    pub fn from_error(err: AppError) -> Self {
        if err.is_business_failure() {
            Self::failure(err.reason())
        } else {
            Self {
                is_success: false,
                message: err.to_string(),
                error: Some(ErrorDetail::from(&err)),
                response: None,
            }
        }
    }

    pub fn with_response(mut self, response: T) -> Self {
        self.response = Some(response);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_failure_has_no_detail() {
        let envelope: ApiResponse<String> =
            ApiResponse::from_error(AppError::Conflict("Book already exist".to_string()));
        assert!(!envelope.is_success);
        assert_eq!(envelope.message, "Book already exist");
        assert!(envelope.error.is_none());
        assert!(envelope.response.is_none());
    }

    #[test]
    fn test_fault_attaches_detail() {
        let envelope: ApiResponse<String> =
            ApiResponse::from_error(AppError::Database(sqlx::Error::PoolTimedOut));
        assert!(!envelope.is_success);
        assert!(envelope.message.starts_with("Database error"));
        let detail = envelope.error.expect("fault detail");
        assert_eq!(detail.error, "DbFailure");
    }

    #[test]
    fn test_wire_shape() {
        let envelope = ApiResponse::success(MSG_SUCCESS, "abc".to_string());
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["is_success"], true);
        assert_eq!(json["message"], "Success");
        assert!(json["error"].is_null());
        assert_eq!(json["response"], "abc");
    }
}
