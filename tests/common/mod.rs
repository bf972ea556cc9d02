use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use std::sync::Arc;

use userdir_backend::config::JwtSettings;
use userdir_backend::services::{AuthService, TokenService, UserService};
use userdir_backend::stores::UserStore;
use userdir_backend::types::dto::user::CreateUserRequest;

pub const TEST_SECRET: &str = "test-secret-key-minimum-32-characters-long";

pub struct TestBackend {
    pub users: Arc<UserService>,
    pub auth: Arc<AuthService>,
    pub tokens: Arc<TokenService>,
}

/// Build the full service stack against a fresh in-memory database
pub async fn setup_backend() -> TestBackend {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    let store = Arc::new(UserStore::new(db));
    let users = Arc::new(UserService::new(store.clone()));
    let tokens = Arc::new(TokenService::new(JwtSettings {
        secret: TEST_SECRET.to_string(),
        issuer: "userdir-backend".to_string(),
        audience: "userdir-backend".to_string(),
        expiration_minutes: 30,
    }));
    let auth = Arc::new(AuthService::new(store, users.clone(), tokens.clone()));

    TestBackend {
        users,
        auth,
        tokens,
    }
}

pub fn registration(username: &str, email: &str) -> CreateUserRequest {
    CreateUserRequest {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        username: username.to_string(),
        email: email.to_string(),
        password: "password123".to_string(),
        permission_id: 2,
    }
}
