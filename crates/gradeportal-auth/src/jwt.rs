//! JWT utilities for access tokens.
//!
//! The gateway only ever verifies tokens. [`create_access_token`] signs a
//! token for a principal with the same secret and exists for integration
//! tests and local tooling.
//!
//! # Example
//!
//! ```ignore
//! use gradeportal_auth::{create_access_token, verify_token};
//! use gradeportal_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(&principal, &config)?;
//! let claims = verify_token(&token, &config)?;
//! ```

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use gradeportal_access::Principal;
use gradeportal_config::JwtConfig;
use gradeportal_core::AppError;

use crate::claims::Claims;

/// Signs an access token carrying everything needed to rebuild `principal`.
///
/// # Errors
///
/// Returns an error if token encoding fails (e.g., invalid secret key).
pub fn create_access_token(principal: &Principal, jwt_config: &JwtConfig) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        sub: principal.id.to_string(),
        email: principal.email.clone(),
        name: principal.display_name.clone(),
        role: principal.role.as_str().to_string(),
        permissions: principal.permissions.to_strings(),
        department: principal.department.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns the embedded claims.
///
/// # Errors
///
/// Returns an unauthorized error if:
/// - The token signature is invalid
/// - The token has expired
/// - The token is malformed
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized("Invalid or expired token"))
}
