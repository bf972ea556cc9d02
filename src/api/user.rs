use poem_openapi::{
    OpenApi, Tags,
    param::{Path, Query},
    payload::Json,
};
use std::sync::Arc;

use crate::api::BearerAuth;
use crate::errors::ApiError;
use crate::services::{TokenService, UserService};
use crate::types::dto::common::DetailResponse;
use crate::types::dto::user::{UpdateUserRequest, UserResponse};

/// User directory endpoints; every route requires a valid bearer token
pub struct UserApi {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl UserApi {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }
}

#[derive(Tags)]
enum ApiTags {
    /// User directory endpoints
    User,
}

#[OpenApi(prefix_path = "/user")]
impl UserApi {
    /// List users with offset/limit pagination, ordered by id
    #[oai(path = "/", method = "get", tag = "ApiTags::User")]
    async fn list_users(
        &self,
        auth: BearerAuth,
        skip: Query<Option<u64>>,
        limit: Query<Option<u64>>,
    ) -> Result<Json<Vec<UserResponse>>, ApiError> {
        self.tokens.validate(&auth.0.token)?;

        let users = self
            .users
            .get_all(skip.0.unwrap_or(0), limit.0.unwrap_or(100))
            .await?;

        Ok(Json(users))
    }

    /// Fetch a single user by id
    #[oai(path = "/:id", method = "get", tag = "ApiTags::User")]
    async fn get_user(&self, auth: BearerAuth, id: Path<i32>) -> Result<Json<UserResponse>, ApiError> {
        self.tokens.validate(&auth.0.token)?;

        match self.users.get_by_id(id.0).await? {
            Some(user) => Ok(Json(user)),
            None => Err(ApiError::user_not_found()),
        }
    }

    /// Update the profile of the user addressed by username
    ///
    /// The path segment is the account's username; username and password
    /// cannot be changed through this endpoint.
    #[oai(path = "/:id", method = "put", tag = "ApiTags::User")]
    async fn update_user(
        &self,
        auth: BearerAuth,
        id: Path<String>,
        body: Json<UpdateUserRequest>,
    ) -> Result<Json<UserResponse>, ApiError> {
        self.tokens.validate(&auth.0.token)?;

        let updated = self.users.update(&id.0, &body.0).await?;

        Ok(Json(updated))
    }

    /// Delete a user by id
    #[oai(path = "/:id", method = "delete", tag = "ApiTags::User")]
    async fn delete_user(
        &self,
        auth: BearerAuth,
        id: Path<i32>,
    ) -> Result<Json<DetailResponse>, ApiError> {
        self.tokens.validate(&auth.0.token)?;

        self.users.delete(id.0).await?;

        Ok(Json(DetailResponse {
            detail: "User deleted successfully".to_string(),
        }))
    }
}
