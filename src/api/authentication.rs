use poem_openapi::{
    OpenApi, Tags,
    payload::{Form, Json},
};
use std::sync::Arc;

use crate::errors::ApiError;
use crate::services::AuthService;
use crate::types::dto::auth::{LoginForm, TokenResponse};
use crate::types::dto::user::{CreateUserRequest, UserResponse};

/// Registration and login endpoints
pub struct AuthenticationApi {
    auth: Arc<AuthService>,
}

impl AuthenticationApi {
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self { auth }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// Authentication endpoints
    Authentication,
}

#[OpenApi(prefix_path = "/authentication")]
impl AuthenticationApi {
    /// Register a new user account
    #[oai(path = "/register", method = "post", tag = "ApiTags::Authentication")]
    async fn register(
        &self,
        body: Json<CreateUserRequest>,
    ) -> Result<Json<UserResponse>, ApiError> {
        let created = self.auth.register(&body.0).await?;

        Ok(Json(created))
    }

    /// Login with username and password to receive a bearer token
    #[oai(path = "/login", method = "post", tag = "ApiTags::Authentication")]
    async fn login(&self, form: Form<LoginForm>) -> Result<Json<TokenResponse>, ApiError> {
        let response = self.auth.login(&form.0.username, &form.0.password).await?;

        Ok(Json(response))
    }
}
