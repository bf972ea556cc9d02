// Configuration layer - loaded once at startup into immutable values
pub mod env_provider;
pub mod errors;
pub mod logging;
pub mod settings;

pub use env_provider::{EnvironmentProvider, SystemEnvironment};
pub use errors::ConfigError;
pub use logging::init_logging;
pub use settings::{JwtSettings, Settings};
