use poem::{Route, Server, listener::TcpListener};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use userdir_backend::api::{AuthenticationApi, HealthApi, UserApi};
use userdir_backend::config::{Settings, init_logging};
use userdir_backend::services::{AuthService, TokenService, UserService};
use userdir_backend::stores::UserStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    // Connection string and signing secret are mandatory; bail out before
    // touching the network if either is missing.
    let settings = Settings::from_env().expect("Invalid configuration");

    let db: DatabaseConnection = Database::connect(settings.database_url())
        .await
        .expect("Failed to connect to database");
    tracing::info!("connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    tracing::info!("database migrations completed");

    let store = Arc::new(UserStore::new(db));
    let tokens = Arc::new(TokenService::new(settings.jwt().clone()));
    let users = Arc::new(UserService::new(store.clone()));
    let auth = Arc::new(AuthService::new(store, users.clone(), tokens.clone()));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthenticationApi::new(auth),
            UserApi::new(users, tokens),
        ),
        "User Directory API",
        "1.0.0",
    )
    .server(format!("http://{}/api", settings.server_address()));

    // Generate Swagger UI from the OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!(address = %settings.server_address(), "starting server");

    Server::new(TcpListener::bind(settings.server_address()))
        .run(app)
        .await
}
