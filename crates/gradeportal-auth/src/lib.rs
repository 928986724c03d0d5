//! # Grade Portal Auth
//!
//! Access-token handling for the grade portal gateway.
//!
//! Tokens are issued by the portal's authentication service; this crate only
//! verifies them and turns their claims into a
//! [`Principal`](gradeportal_access::Principal).
//!
//! - [`claims`]: access-token claim structure
//! - [`jwt`]: token verification (and signing, for tests and tooling)
//!
//! # Example
//!
//! ```ignore
//! use gradeportal_auth::{verify_token, principal_from_claims};
//! use gradeportal_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let claims = verify_token(&token, &config)?;
//! let principal = principal_from_claims(&claims)?;
//! println!("{} lands on {}", principal.display_name, dashboard_home(&principal));
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::{Claims, principal_from_claims};
pub use jwt::{create_access_token, verify_token};
