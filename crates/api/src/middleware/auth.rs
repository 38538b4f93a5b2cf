//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use marquee_core::error::CoreError;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated bearer extracted from a JWT in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication, then gate the operation on a permission scope:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     auth.require(scopes::GET_ACTORS)?;
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Identity-provider subject for the bearer (from `claims.sub`).
    pub sub: String,
    /// Permission scopes granted by the token.
    pub permissions: Vec<String>,
}

impl AuthUser {
    /// Check a single permission scope, rejecting with 403 when absent.
    pub fn require(&self, scope: &str) -> Result<(), AppError> {
        if self.permissions.iter().any(|p| p == scope) {
            Ok(())
        } else {
            Err(AppError::Core(CoreError::Forbidden(format!(
                "Permission '{scope}' required"
            ))))
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            sub: claims.sub,
            permissions: claims.permissions,
        })
    }
}
