use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::errors::ApiError;
use crate::types::db::user::{self, Entity as User};

/// UserStore translates directory operations into storage reads and writes
///
/// The unique indexes on username and email are the final arbiter for
/// duplicate registrations; any service-level pre-check is only a fast path
/// with a better message.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, ApiError> {
        User::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<user::Model>, ApiError> {
        User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, ApiError> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// List a bounded window of accounts, ordered by id ascending
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Vec<user::Model>, ApiError> {
        User::find()
            .order_by_asc(user::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }

    /// Insert a new account row
    ///
    /// A unique-index violation (username or email) surfaces as a conflict;
    /// every other storage fault as an internal error.
    pub async fn insert(&self, account: user::ActiveModel) -> Result<user::Model, ApiError> {
        account.insert(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::account_taken()
            } else {
                ApiError::internal_error(format!("Database error: {}", e))
            }
        })
    }

    /// Persist a full-row update of an existing account
    pub async fn update(&self, account: user::ActiveModel) -> Result<user::Model, ApiError> {
        account.update(&self.db).await.map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::account_taken()
            } else {
                ApiError::internal_error(format!("Database error: {}", e))
            }
        })
    }

    /// Permanently remove the row with the given id
    pub async fn delete_by_id(&self, id: i32) -> Result<u64, ApiError> {
        User::delete_by_id(id)
            .exec(&self.db)
            .await
            .map(|res| res.rows_affected)
            .map_err(|e| ApiError::internal_error(format!("Database error: {}", e)))
    }
}

/// Unique-constraint violations are reported differently per backend; match
/// the SQLite and MySQL message markers.
fn is_unique_violation(e: &sea_orm::DbErr) -> bool {
    let message = e.to_string();
    message.contains("UNIQUE") || message.contains("Duplicate entry")
}

impl std::fmt::Debug for UserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserStore")
            .field("db", &"<connection>")
            .finish()
    }
}
