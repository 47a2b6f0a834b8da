//! Bearer-token authentication for admin-only routes.
//!
//! Tokens are HS256 JWTs carrying `{username, isAdmin, iat}`. Expiry is not
//! checked. [`AdminUser`] is an extractor: placing it in a handler's argument
//! list rejects the request with 401 unless a valid admin token is presented.

use super::error::ApiError;
use super::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Account name.
    pub username: String,
    /// Whether the account may use admin routes.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    /// Issue time as a Unix timestamp.
    #[serde(default)]
    pub iat: i64,
}

/// Signing and verification keys derived from the shared secret.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenKeys {
    /// Derives HS256 keys from `secret`.
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Signs a token for `username`.
    ///
    /// # Errors
    ///
    /// Returns a [`jsonwebtoken::errors::Error`] when encoding fails.
    pub fn issue(
        &self,
        username: impl Into<String>,
        is_admin: bool,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            username: username.into(),
            is_admin,
            iat: chrono::Utc::now().timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Verifies `token` and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns a [`jsonwebtoken::errors::Error`] for a bad signature or
    /// malformed token.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

/// Signs a token with `secret`, for operators issuing credentials.
///
/// # Errors
///
/// Returns a [`jsonwebtoken::errors::Error`] when encoding fails.
pub fn create_token(
    secret: &str,
    username: &str,
    is_admin: bool,
) -> Result<String, jsonwebtoken::errors::Error> {
    TokenKeys::new(secret).issue(username, is_admin)
}

/// Caller proven to hold an admin token.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Claims);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .ok_or(ApiError::Unauthorized)?;

        let claims = state.keys.verify(token).map_err(|err| {
            warn!(error = %err, "rejected access token");
            ApiError::Unauthorized
        })?;
        if !claims.is_admin {
            warn!(username = %claims.username, "non-admin token on admin route");
            return Err(ApiError::Unauthorized);
        }
        Ok(Self(claims))
    }
}

/// Strips a `Bearer ` (or `bearer `) prefix.
fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}
