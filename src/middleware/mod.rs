//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`]: a verified principal; rejects the request with 401
//!   when the bearer token is missing or invalid
//! - [`auth::CurrentSession`]: the session as the resolver sees it; a missing
//!   or invalid token is an anonymous session, never an error
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, CurrentSession};
//!
//! async fn navigation(AuthUser(principal): AuthUser) -> impl IntoResponse {
//!     Json(menu_sections(&principal))
//! }
//!
//! async fn page(CurrentSession(session): CurrentSession) -> impl IntoResponse {
//!     resolve_route(&session, "/student/grades")
//! }
//! ```

pub mod auth;
