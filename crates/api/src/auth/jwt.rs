//! JWT access-token validation.
//!
//! The identity provider mints HS256-signed JWTs whose `permissions` claim
//! lists the scopes granted to the bearer. This service validates tokens
//! and reads their claims; it never issues tokens to end users.
//! [`issue_token`] exists for tests and operational tooling that need a
//! token signed with the shared secret.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The identity provider's stable identifier for the bearer.
    pub sub: String,
    /// Scopes granted to the bearer, e.g. `"post:actors"`. A token
    /// without the claim carries no permissions.
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Expiration (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at (UTC Unix timestamp).
    pub iat: i64,
}

/// Settings for token validation and minting.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
    /// Lifetime in minutes for tokens minted by [`issue_token`].
    pub token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_TOKEN_EXPIRY_MINS`
    /// (default 60) from the environment.
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").expect("JWT_SECRET must be set");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let token_expiry_mins = std::env::var("JWT_TOKEN_EXPIRY_MINS")
            .map(|raw| {
                raw.parse()
                    .expect("JWT_TOKEN_EXPIRY_MINS must be a valid i64")
            })
            .unwrap_or(60);

        Self {
            secret,
            token_expiry_mins,
        }
    }
}

/// Mint an HS256 token granting the given permission scopes.
pub fn issue_token(
    sub: &str,
    permissions: &[&str],
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued = Utc::now();
    let claims = Claims {
        sub: sub.to_string(),
        permissions: permissions.iter().map(|scope| scope.to_string()).collect(),
        exp: (issued + Duration::minutes(config.token_expiry_mins)).timestamp(),
        iat: issued.timestamp(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check a token's signature and expiry and return its [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, checks exp with 60s leeway
    )
    .map(|data| data.claims)
}
