use sea_orm::Set;
use std::sync::Arc;

use crate::errors::ApiError;
use crate::services::crypto;
use crate::stores::UserStore;
use crate::types::db::user;
use crate::types::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};

/// Directory CRUD over user accounts
///
/// Holds no state across calls; all state lives in storage.
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Create a new account
    ///
    /// The email pre-check gives duplicate registrations a precise message;
    /// the storage unique indexes remain the final arbiter for races that
    /// slip past it (surfaced as the same conflict condition).
    pub async fn create(&self, request: &CreateUserRequest) -> Result<UserResponse, ApiError> {
        if self.store.find_by_email(&request.email).await?.is_some() {
            return Err(ApiError::email_taken());
        }

        let hashed_password = crypto::hash_password(&request.password)?;

        let new_account = user::ActiveModel {
            first_name: Set(request.first_name.clone()),
            last_name: Set(request.last_name.clone()),
            username: Set(request.username.clone()),
            email: Set(request.email.clone()),
            hashed_password: Set(hashed_password),
            is_active: Set(1),
            permission_id: Set(request.permission_id),
            ..Default::default()
        };

        let created = self.store.insert(new_account).await?;
        tracing::info!(username = %created.username, id = created.id, "user registered");

        Ok(UserResponse::from(created))
    }

    /// Look up an account by id; absent is a normal outcome
    pub async fn get_by_id(&self, id: i32) -> Result<Option<UserResponse>, ApiError> {
        Ok(self.store.find_by_id(id).await?.map(UserResponse::from))
    }

    /// Look up an account by username; absent is a normal outcome
    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserResponse>, ApiError> {
        Ok(self
            .store
            .find_by_username(username)
            .await?
            .map(UserResponse::from))
    }

    /// List accounts in a bounded window, ordered by id ascending
    pub async fn get_all(&self, skip: u64, limit: u64) -> Result<Vec<UserResponse>, ApiError> {
        let accounts = self.store.list(skip, limit).await?;
        Ok(accounts.into_iter().map(UserResponse::from).collect())
    }

    /// Update the profile of the account identified by username
    ///
    /// First name, last name, email and the active flag are mutable here;
    /// username and password are not. Email uniqueness is not pre-checked on
    /// update; the unique index catches a duplicate and it surfaces as a
    /// conflict.
    pub async fn update(
        &self,
        username: &str,
        request: &UpdateUserRequest,
    ) -> Result<UserResponse, ApiError> {
        let existing = self
            .store
            .find_by_username(username)
            .await?
            .ok_or_else(ApiError::user_not_found)?;

        let mut account: user::ActiveModel = existing.into();
        account.first_name = Set(request.first_name.clone());
        account.last_name = Set(request.last_name.clone());
        account.email = Set(request.email.clone());
        account.is_active = Set(request.is_active);

        let updated = self.store.update(account).await?;

        Ok(UserResponse::from(updated))
    }

    /// Permanently delete the account with the given id
    pub async fn delete(&self, id: i32) -> Result<(), ApiError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(ApiError::user_not_found)?;

        self.store.delete_by_id(id).await?;
        tracing::info!(id, "user deleted");

        Ok(())
    }
}
