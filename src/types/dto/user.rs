use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::db::user;

/// Request model for creating a user account
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// First name of the account holder
    pub first_name: String,

    /// Last name of the account holder
    pub last_name: String,

    /// Unique username used to log in
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Plaintext password; hashed before storage, never persisted as-is
    pub password: String,

    /// Identifier of the permission tier assigned to the account
    pub permission_id: i32,
}

/// Request model for updating a user's profile
///
/// Username and password are not updatable through this path.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// First name of the account holder
    pub first_name: String,

    /// Last name of the account holder
    pub last_name: String,

    /// Email address
    pub email: String,

    /// Active flag (1 = active, 0 = inactive)
    pub is_active: i32,
}

/// Externally visible view of a user account
///
/// Carries every persisted field except the password hash.
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Persistence-assigned identifier
    pub id: i32,

    /// First name of the account holder
    pub first_name: String,

    /// Last name of the account holder
    pub last_name: String,

    /// Unique username
    pub username: String,

    /// Unique email address
    pub email: String,

    /// Active flag (1 = active, 0 = inactive)
    pub is_active: i32,

    /// Identifier of the assigned permission tier
    pub permission_id: i32,
}

impl From<user::Model> for UserResponse {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            username: model.username,
            email: model.email,
            is_active: model.is_active,
            permission_id: model.permission_id,
        }
    }
}
