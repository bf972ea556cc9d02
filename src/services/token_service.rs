use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use std::fmt;
use uuid::Uuid;

use crate::config::JwtSettings;
use crate::errors::ApiError;
use crate::types::internal::auth::Claims;

/// Issues and validates signed bearer tokens
///
/// Tokens are HS256-signed with a shared secret, carry issuer and audience
/// claims, and expire a configured number of minutes after issuance. There
/// is no revocation list; a token is valid until it expires.
pub struct TokenService {
    secret: String,
    issuer: String,
    audience: String,
    expiration_minutes: i64,
}

impl TokenService {
    pub fn new(jwt: JwtSettings) -> Self {
        Self {
            secret: jwt.secret,
            issuer: jwt.issuer,
            audience: jwt.audience,
            expiration_minutes: jwt.expiration_minutes,
        }
    }

    /// Issue a signed token for the given username
    ///
    /// Claims: `sub` = username, `jti` = random UUID, issuer and audience
    /// from configuration, `exp` = now + configured lifetime.
    pub fn issue(&self, username: &str) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            iat: now,
            exp: now + self.expiration_minutes * 60,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| ApiError::internal_error(format!("Failed to sign token: {}", e)))
    }

    /// Validate a bearer token and return its claims
    ///
    /// Checks signature, issuer, audience and expiry. Expired tokens and
    /// every other defect map to distinct unauthorized conditions.
    pub fn validate(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => ApiError::expired_token(),
            _ => ApiError::invalid_token(),
        })?;

        Ok(token_data.claims)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("expiration_minutes", &self.expiration_minutes)
            .finish()
    }
}
