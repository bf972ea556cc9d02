// API layer - HTTP endpoints
pub mod authentication;
pub mod health;
pub mod user;

pub use authentication::AuthenticationApi;
pub use health::HealthApi;
pub use user::UserApi;

use poem_openapi::{SecurityScheme, auth::Bearer};

/// JWT bearer token authentication
#[derive(SecurityScheme)]
#[oai(
    ty = "bearer",
    key_name = "Authorization",
    key_in = "header",
    bearer_format = "JWT"
)]
pub struct BearerAuth(pub Bearer);
