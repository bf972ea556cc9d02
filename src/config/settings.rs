use std::fmt;

use crate::config::env_provider::{EnvironmentProvider, SystemEnvironment};
use crate::config::errors::ConfigError;

const SERVICE_NAME: &str = "userdir-backend";
const DEFAULT_TOKEN_LIFETIME_MINUTES: i64 = 30;

/// Token-signing configuration shared with the token service
#[derive(Clone)]
pub struct JwtSettings {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub expiration_minutes: i64,
}

impl fmt::Debug for JwtSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtSettings")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}

/// Immutable process-wide configuration, loaded once at startup
///
/// The connection string and signing secret are mandatory; startup fails
/// fast when either is absent.
pub struct Settings {
    database_url: String,
    server_host: String,
    server_port: u16,
    jwt: JwtSettings,
}

impl Settings {
    /// Load settings from the system environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_provider(&SystemEnvironment)
    }

    /// Load settings from the given environment provider
    pub fn from_provider(env: &dyn EnvironmentProvider) -> Result<Self, ConfigError> {
        let database_url = env
            .get_var("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVariable("DATABASE_URL"))?;

        let secret = env
            .get_var("JWT_SECRET")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingVariable("JWT_SECRET"))?;

        let issuer = env
            .get_var("JWT_ISSUER")
            .unwrap_or_else(|| SERVICE_NAME.to_string());
        let audience = env
            .get_var("JWT_AUDIENCE")
            .unwrap_or_else(|| SERVICE_NAME.to_string());

        let expiration_minutes = match env.get_var("JWT_EXPIRATION_MINUTES") {
            Some(value) => {
                let minutes: i64 =
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidVariable {
                            name: "JWT_EXPIRATION_MINUTES",
                            reason: format!("expected a positive integer, got '{}'", value),
                        })?;
                if minutes <= 0 {
                    return Err(ConfigError::InvalidVariable {
                        name: "JWT_EXPIRATION_MINUTES",
                        reason: "must be greater than zero".to_string(),
                    });
                }
                minutes
            }
            None => DEFAULT_TOKEN_LIFETIME_MINUTES,
        };

        let server_host = env.get_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let server_port = match env.get_var("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidVariable {
                name: "PORT",
                reason: format!("expected a port number, got '{}'", value),
            })?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            server_host,
            server_port,
            jwt: JwtSettings {
                secret,
                issuer,
                audience,
                expiration_minutes,
            },
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn jwt(&self) -> &JwtSettings {
        &self.jwt
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("jwt", &self.jwt)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env_provider::MockEnvironment;

    fn minimal_env() -> MockEnvironment {
        MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite::memory:")
            .with_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long")
    }

    #[test]
    fn test_settings_with_defaults() {
        let settings = Settings::from_provider(&minimal_env()).unwrap();

        assert_eq!(settings.database_url(), "sqlite::memory:");
        assert_eq!(settings.server_address(), "0.0.0.0:3000");
        assert_eq!(settings.jwt().issuer, "userdir-backend");
        assert_eq!(settings.jwt().audience, "userdir-backend");
        assert_eq!(settings.jwt().expiration_minutes, 30);
    }

    #[test]
    fn test_settings_missing_database_url_fails_fast() {
        let env = MockEnvironment::empty()
            .with_var("JWT_SECRET", "test-secret-key-minimum-32-characters-long");

        let result = Settings::from_provider(&env);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingVariable("DATABASE_URL")
        ));
    }

    #[test]
    fn test_settings_missing_secret_fails_fast() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "sqlite::memory:");

        let result = Settings::from_provider(&env);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingVariable("JWT_SECRET")
        ));
    }

    #[test]
    fn test_settings_empty_secret_fails_fast() {
        let env = MockEnvironment::empty()
            .with_var("DATABASE_URL", "sqlite::memory:")
            .with_var("JWT_SECRET", "");

        let result = Settings::from_provider(&env);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::MissingVariable("JWT_SECRET")
        ));
    }

    #[test]
    fn test_settings_overrides() {
        let env = minimal_env()
            .with_var("JWT_ISSUER", "issuer.example.com")
            .with_var("JWT_AUDIENCE", "api.example.com")
            .with_var("JWT_EXPIRATION_MINUTES", "5")
            .with_var("HOST", "127.0.0.1")
            .with_var("PORT", "8080");

        let settings = Settings::from_provider(&env).unwrap();

        assert_eq!(settings.jwt().issuer, "issuer.example.com");
        assert_eq!(settings.jwt().audience, "api.example.com");
        assert_eq!(settings.jwt().expiration_minutes, 5);
        assert_eq!(settings.server_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_settings_invalid_token_lifetime() {
        for bad in ["0", "-5", "not_a_number"] {
            let env = minimal_env().with_var("JWT_EXPIRATION_MINUTES", bad);
            let result = Settings::from_provider(&env);
            assert!(
                matches!(
                    result.unwrap_err(),
                    ConfigError::InvalidVariable {
                        name: "JWT_EXPIRATION_MINUTES",
                        ..
                    }
                ),
                "expected failure for JWT_EXPIRATION_MINUTES={}",
                bad
            );
        }
    }

    #[test]
    fn test_settings_invalid_port() {
        let env = minimal_env().with_var("PORT", "not_a_number");

        let result = Settings::from_provider(&env);

        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidVariable { name: "PORT", .. }
        ));
    }

    #[test]
    fn test_settings_debug_redacts_secret() {
        let settings = Settings::from_provider(&minimal_env()).unwrap();

        let debug_output = format!("{:?}", settings);

        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains("test-secret-key-minimum-32-characters-long"));
    }
}
