mod common;

use common::{registration, setup_backend};
use userdir_backend::errors::ApiError;
use userdir_backend::types::dto::user::UpdateUserRequest;

#[tokio::test]
async fn register_echoes_fields_and_login_succeeds() {
    let backend = setup_backend().await;

    let request = registration("johndoe", "john@example.com");
    let created = backend
        .auth
        .register(&request)
        .await
        .expect("Registration failed");

    assert_eq!(created.first_name, request.first_name);
    assert_eq!(created.last_name, request.last_name);
    assert_eq!(created.username, request.username);
    assert_eq!(created.email, request.email);
    assert_eq!(created.is_active, 1);
    assert_eq!(created.permission_id, request.permission_id);

    let token = backend
        .auth
        .login("johndoe", "password123")
        .await
        .expect("Login failed");

    assert_eq!(token.token_type, "bearer");

    let claims = backend
        .tokens
        .validate(&token.access_token)
        .expect("Issued token failed validation");
    assert_eq!(claims.sub, "johndoe");
}

#[tokio::test]
async fn duplicate_email_conflicts_and_first_registration_survives() {
    let backend = setup_backend().await;

    backend
        .auth
        .register(&registration("johndoe", "shared@example.com"))
        .await
        .expect("First registration failed");

    let result = backend
        .auth
        .register(&registration("janedoe", "shared@example.com"))
        .await;

    match result {
        Err(ApiError::Conflict(body)) => {
            assert_eq!(body.0.detail, "Email already registered");
        }
        other => panic!("Expected Conflict, got {:?}", other),
    }

    let first = backend
        .users
        .get_by_username("johndoe")
        .await
        .unwrap()
        .expect("First registration disappeared");
    assert_eq!(first.email, "shared@example.com");

    backend
        .auth
        .login("johndoe", "password123")
        .await
        .expect("First registration can no longer log in");
}

#[tokio::test]
async fn bad_credentials_share_one_message() {
    let backend = setup_backend().await;

    backend
        .auth
        .register(&registration("johndoe", "john@example.com"))
        .await
        .expect("Registration failed");

    let wrong_password = backend
        .auth
        .login("johndoe", "wrongpass")
        .await
        .unwrap_err();
    let unknown_user = backend
        .auth
        .login("nonexistent", "password123")
        .await
        .unwrap_err();

    assert_eq!(wrong_password.detail(), "Incorrect username or password");
    assert_eq!(wrong_password.detail(), unknown_user.detail());
}

#[tokio::test]
async fn missing_targets_fail_not_found_and_leave_storage_unchanged() {
    let backend = setup_backend().await;

    backend
        .auth
        .register(&registration("johndoe", "john@example.com"))
        .await
        .expect("Registration failed");

    let update_result = backend
        .users
        .update(
            "nobody",
            &UpdateUserRequest {
                first_name: "First".to_string(),
                last_name: "Last".to_string(),
                email: "nobody@example.com".to_string(),
                is_active: 1,
            },
        )
        .await;
    assert!(matches!(update_result, Err(ApiError::NotFound(_))));

    let delete_result = backend.users.delete(999).await;
    assert!(matches!(delete_result, Err(ApiError::NotFound(_))));

    let all = backend.users.get_all(0, 100).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].username, "johndoe");
    assert_eq!(all[0].email, "john@example.com");
}

#[tokio::test]
async fn pagination_windows_over_five_users() {
    let backend = setup_backend().await;

    for n in 1..=5 {
        backend
            .auth
            .register(&registration(
                &format!("user{}", n),
                &format!("user{}@example.com", n),
            ))
            .await
            .expect("Registration failed");
    }

    let all = backend.users.get_all(0, 100).await.unwrap();
    assert_eq!(all.len(), 5);

    // Deterministic id-ascending order
    let usernames: Vec<&str> = all.iter().map(|u| u.username.as_str()).collect();
    assert_eq!(usernames, ["user1", "user2", "user3", "user4", "user5"]);

    let empty = backend.users.get_all(10, 50).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn fetched_view_never_contains_password_material() {
    let backend = setup_backend().await;

    let created = backend
        .auth
        .register(&registration("johndoe", "john@example.com"))
        .await
        .expect("Registration failed");

    let fetched = backend
        .users
        .get_by_id(created.id)
        .await
        .unwrap()
        .expect("User not found");

    assert_eq!(fetched, created);

    let serialized = serde_json::to_string(&fetched).unwrap();
    assert!(!serialized.contains("password"));
    assert!(!serialized.contains("argon2"));
}

#[tokio::test]
async fn update_then_fetch_reflects_new_profile() {
    let backend = setup_backend().await;

    let created = backend
        .auth
        .register(&registration("johndoe", "john@example.com"))
        .await
        .expect("Registration failed");

    backend
        .users
        .update(
            "johndoe",
            &UpdateUserRequest {
                first_name: "Johnny".to_string(),
                last_name: "Doer".to_string(),
                email: "johnny@example.com".to_string(),
                is_active: 0,
            },
        )
        .await
        .expect("Update failed");

    let fetched = backend
        .users
        .get_by_id(created.id)
        .await
        .unwrap()
        .expect("User not found");

    assert_eq!(fetched.first_name, "Johnny");
    assert_eq!(fetched.email, "johnny@example.com");
    assert_eq!(fetched.is_active, 0);
    assert_eq!(fetched.username, "johndoe");
}
