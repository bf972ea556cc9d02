use poem_openapi::{ApiResponse, payload::Json};
use std::fmt;

use crate::types::dto::common::DetailResponse;

/// Domain error conditions raised by the service layer
///
/// Each variant maps 1:1 to an HTTP status code at the boundary; the body is
/// always `{"detail": <message>}`.
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// The submitted data collides with an existing account
    #[oai(status = 400)]
    Conflict(Json<DetailResponse>),

    /// Bad credentials or an invalid bearer token
    #[oai(status = 401)]
    Unauthorized(Json<DetailResponse>),

    /// The addressed user does not exist
    #[oai(status = 404)]
    NotFound(Json<DetailResponse>),

    /// Unexpected failure, including storage faults
    #[oai(status = 500)]
    Internal(Json<DetailResponse>),
}

impl ApiError {
    /// Duplicate email detected at registration
    pub fn email_taken() -> Self {
        ApiError::Conflict(Json(DetailResponse {
            detail: "Email already registered".to_string(),
        }))
    }

    /// A storage unique index rejected an insert or update
    ///
    /// Covers the registration race the email pre-check cannot see, and
    /// duplicate emails introduced by profile updates.
    pub fn account_taken() -> Self {
        ApiError::Conflict(Json(DetailResponse {
            detail: "Username or email already registered".to_string(),
        }))
    }

    /// Bad login credentials; same message for unknown-user and
    /// wrong-password so the response content does not reveal which
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized(Json(DetailResponse {
            detail: "Incorrect username or password".to_string(),
        }))
    }

    /// Malformed bearer token or bad signature/issuer/audience
    pub fn invalid_token() -> Self {
        ApiError::Unauthorized(Json(DetailResponse {
            detail: "Invalid authentication token".to_string(),
        }))
    }

    /// Bearer token past its expiration timestamp
    pub fn expired_token() -> Self {
        ApiError::Unauthorized(Json(DetailResponse {
            detail: "Token has expired".to_string(),
        }))
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound(Json(DetailResponse {
            detail: "User not found".to_string(),
        }))
    }

    pub fn internal_error(message: String) -> Self {
        ApiError::Internal(Json(DetailResponse {
            detail: format!("Internal server error: {}", message),
        }))
    }

    /// Get the detail message from the error variant
    pub fn detail(&self) -> &str {
        match self {
            ApiError::Conflict(json) => &json.0.detail,
            ApiError::Unauthorized(json) => &json.0.detail,
            ApiError::NotFound(json) => &json.0.detail,
            ApiError::Internal(json) => &json.0.detail,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_credentials_message_is_generic() {
        let err = ApiError::invalid_credentials();
        assert_eq!(err.detail(), "Incorrect username or password");
    }

    #[test]
    fn test_internal_error_wraps_message() {
        let err = ApiError::internal_error("boom".to_string());
        assert_eq!(err.detail(), "Internal server error: boom");
    }

    #[test]
    fn test_display_uses_detail() {
        let err = ApiError::email_taken();
        assert_eq!(format!("{}", err), "Email already registered");
    }
}
