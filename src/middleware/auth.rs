use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use gradeportal_access::{Principal, SessionState};
use gradeportal_auth::{principal_from_claims, verify_token};
use gradeportal_core::AppError;
use gradeportal_observability::track_token_rejected;

use crate::state::AppState;

/// Extractor that validates the bearer token and rebuilds the principal
/// it was issued for.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Principal);

impl AuthUser {
    pub fn principal(&self) -> &Principal {
        &self.0
    }
}

fn bearer_token(parts: &Parts) -> Result<Option<&str>, AppError> {
    let Some(auth_header) = parts.headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_header = auth_header
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid authorization header"))?;

    auth_header
        .strip_prefix("Bearer ")
        .map(Some)
        .ok_or_else(|| AppError::unauthorized("Invalid authorization header format"))
}

fn authenticate(token: &str, state: &AppState) -> Result<Principal, AppError> {
    let claims = verify_token(token, &state.jwt_config)?;
    principal_from_claims(&claims)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?
            .ok_or_else(|| AppError::unauthorized("Missing authorization header"))?;

        authenticate(token, state)
            .map(AuthUser)
            .inspect_err(|_| track_token_rejected("auth_user"))
    }
}

/// The caller's session. Missing or unusable credentials make an anonymous
/// session, which the resolver turns into a redirect to the entry page.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionState);

impl FromRequestParts<AppState> for CurrentSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(parts) {
            Ok(Some(token)) => token,
            Ok(None) => return Ok(CurrentSession(SessionState::Anonymous)),
            Err(e) => {
                debug!(error = %e, "Treating request as anonymous");
                return Ok(CurrentSession(SessionState::Anonymous));
            }
        };

        match authenticate(token, state) {
            Ok(principal) => Ok(CurrentSession(SessionState::Authenticated(principal))),
            Err(e) => {
                track_token_rejected("current_session");
                debug!(error = %e, "Treating request as anonymous");
                Ok(CurrentSession(SessionState::Anonymous))
            }
        }
    }
}
