use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Form fields submitted to the login endpoint
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct LoginForm {
    /// Username for authentication
    pub username: String,

    /// Password for authentication
    pub password: String,
}

/// Response model containing the issued bearer token
#[derive(Object, Debug, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    /// Signed, time-limited access token
    pub access_token: String,

    /// Token type label (always "bearer")
    pub token_type: String,
}
