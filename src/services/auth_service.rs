use std::sync::Arc;

use crate::errors::ApiError;
use crate::services::crypto;
use crate::services::token_service::TokenService;
use crate::services::user_service::UserService;
use crate::stores::UserStore;
use crate::types::dto::auth::TokenResponse;
use crate::types::dto::user::{CreateUserRequest, UserResponse};

/// Credential verification and token issuance
pub struct AuthService {
    store: Arc<UserStore>,
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(store: Arc<UserStore>, users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self {
            store,
            users,
            tokens,
        }
    }

    /// Verify a username/password pair and issue a bearer token
    ///
    /// Unknown usernames and wrong passwords fail with the identical
    /// message, so response content cannot be used for user enumeration.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let account = self.store.find_by_username(username).await?;

        let Some(account) = account else {
            return Err(ApiError::invalid_credentials());
        };
        if !crypto::verify_password(password, &account.hashed_password) {
            return Err(ApiError::invalid_credentials());
        }

        let access_token = self.tokens.issue(&account.username)?;
        tracing::debug!(username = %account.username, "login succeeded");

        Ok(TokenResponse {
            access_token,
            token_type: "bearer".to_string(),
        })
    }

    /// Register a new account; delegates entirely to the directory service
    pub async fn register(&self, request: &CreateUserRequest) -> Result<UserResponse, ApiError> {
        self.users.create(request).await
    }
}
